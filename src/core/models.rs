use serde::{Deserialize, Serialize};
use crate::core::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Floor,
    Target,
    BoxOnFloor,
    BoxOnTarget,
}

/// A grid cell coordinate. `x` is the column, `y` the row, with `y` growing downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
    Undo,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
    Blocked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Enemy {
    pub position: Vec2,
    pub facing: Direction,
}

/// Everything the simulation mutates during a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelState {
    pub grid: Grid,
    pub player: Vec2,
    pub player_facing: Direction,
    pub enemies: Vec<Enemy>,
}

/// One tile overwritten by a move, with the value it held before.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileChange {
    pub position: Vec2,
    pub before: Cell,
}

/// Outcome of a single move attempt, detailed enough to be undone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub direction: Direction,
    pub player_before: Vec2,
    pub facing_before: Direction,
    pub tile_changes: Vec<TileChange>,
    pub change_type: GameChangeType,
}
