use crate::core::{Cell, Direction, LevelState, UserAction, Vec2};

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Floor => '.',
            Cell::Target => 'a',
            Cell::BoxOnTarget => '1',
            Cell::BoxOnFloor => 'A',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::Floor),
            'a' => Some(Cell::Target),
            '1' => Some(Cell::BoxOnTarget),
            'A' => Some(Cell::BoxOnFloor),
            _ => None,
        }
    }

    pub fn is_box(self) -> bool {
        self == Cell::BoxOnFloor || self == Cell::BoxOnTarget
    }

    /// Walls and both box variants stop a walking agent.
    pub fn is_walkable(self) -> bool {
        !(self == Cell::Wall || self.is_box())
    }
}

impl Direction {
    pub fn to_vec(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { x: 0, y: -1 },
            Direction::Down => Vec2 { x: 0, y: 1 },
            Direction::Left => Vec2 { x: -1, y: 0 },
            Direction::Right => Vec2 { x: 1, y: 0 },
        }
    }

    /// Facing for a single step from `from` to `to`. Checked +x, -x, +y, -y in that order.
    pub fn from_step(from: Vec2, to: Vec2) -> Option<Direction> {
        if to.x > from.x {
            Some(Direction::Right)
        } else if to.x < from.x {
            Some(Direction::Left)
        } else if to.y > from.y {
            Some(Direction::Down)
        } else if to.y < from.y {
            Some(Direction::Up)
        } else {
            None
        }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Vec2 {
    pub fn manhattan(&self, other: &Vec2) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl UserAction {
    pub fn all_moves() -> Vec<UserAction> {
        vec![
            UserAction::Move(Direction::Up),
            UserAction::Move(Direction::Down),
            UserAction::Move(Direction::Left),
            UserAction::Move(Direction::Right),
        ]
    }
}

impl LevelState {
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn has_enemy_at(&self, pos: &Vec2) -> bool {
        self.enemies.iter().any(|enemy| enemy.position == *pos)
    }

    pub fn enemy_positions(&self) -> Vec<Vec2> {
        self.enemies.iter().map(|enemy| enemy.position).collect()
    }

    /// Kept as three clauses on purpose: a level with boxes but no goals
    /// reports won as soon as any box sits on a goal tile.
    pub fn is_won(&self) -> bool {
        let boxes_off_goal = self.grid.count(Cell::BoxOnFloor);
        let empty_goals = self.grid.count(Cell::Target);

        self.grid.cells().iter().any(|&c| {
            (c == Cell::BoxOnTarget && boxes_off_goal == 0)
                || (c == Cell::BoxOnTarget && empty_goals == 0)
                || boxes_off_goal == 0
        })
    }

    pub fn is_game_over(&self) -> bool {
        self.has_enemy_at(&self.player)
    }
}
