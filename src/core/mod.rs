mod model_helpers;
mod models;
mod update;
mod bounds;
mod consts;
mod enemies;
mod grid;
mod history;
mod pathfinding;
mod session;

pub use models::{Cell, Direction, UserAction, GameChangeType, Enemy, LevelState, MoveRecord, TileChange, Vec2};
pub use consts::*;
pub use bounds::BoundsOriginRoot;
pub use grid::Grid;
pub use history::MoveHistory;
pub use update::{step, revert};
pub use pathfinding::{find_path, is_walkable};
pub use enemies::advance_enemies;
pub use session::{GameSession, LevelSource};
