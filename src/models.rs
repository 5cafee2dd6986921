use serde::Serialize;
use crate::config::GameConfig;
use crate::core::{Cell, Direction, GameChangeType, LevelState, Vec2};

pub struct GameRenderState<'a> {
    pub game: &'a LevelState,
    pub won: bool,
    pub game_over: bool,
    pub moves: usize,
    pub error: Option<String>,
    pub last_change: Option<GameChangeType>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TileVisual {
    Wall,
    Floor,
    Goal,
    Box,
    BoxOnGoal,
}

impl From<Cell> for TileVisual {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Wall => TileVisual::Wall,
            Cell::Floor => TileVisual::Floor,
            Cell::Target => TileVisual::Goal,
            Cell::BoxOnFloor => TileVisual::Box,
            Cell::BoxOnTarget => TileVisual::BoxOnGoal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ActorKind {
    Player,
    Enemy,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TileSprite {
    pub visual: TileVisual,
    pub cell: Vec2,
    pub pixel: Vec2,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActorSprite {
    pub kind: ActorKind,
    pub facing: Direction,
    pub cell: Vec2,
    pub pixel: Vec2,
}

/// One-way projection of the simulation into what a renderer needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderFrame {
    pub width: i32,
    pub height: i32,
    pub tile_size: i32,
    pub tiles: Vec<TileSprite>,
    /// Player first, then enemies in simulation order.
    pub actors: Vec<ActorSprite>,
    pub won: bool,
    pub game_over: bool,
}

fn to_pixel(cell: Vec2, tile_size: i32) -> Vec2 {
    Vec2 {
        x: cell.x * tile_size,
        y: cell.y * tile_size,
    }
}

impl RenderFrame {
    pub fn project(level: &LevelState, config: &GameConfig) -> Self {
        let tile_size = config.tile_size;
        let tiles = level
            .grid
            .iter()
            .map(|(cell, c)| TileSprite {
                visual: c.into(),
                cell,
                pixel: to_pixel(cell, tile_size),
            })
            .collect();

        let player = ActorSprite {
            kind: ActorKind::Player,
            facing: level.player_facing,
            cell: level.player,
            pixel: to_pixel(level.player, tile_size),
        };
        let enemies = level.enemies.iter().map(|enemy| ActorSprite {
            kind: ActorKind::Enemy,
            facing: enemy.facing,
            cell: enemy.position,
            pixel: to_pixel(enemy.position, tile_size),
        });

        RenderFrame {
            width: level.width(),
            height: level.height(),
            tile_size,
            tiles,
            actors: std::iter::once(player).chain(enemies).collect(),
            won: level.is_won(),
            game_over: level.is_game_over(),
        }
    }
}
