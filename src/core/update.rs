use tracing::debug;
use crate::core::Cell::{BoxOnFloor, BoxOnTarget, Floor, Target};
use crate::core::{Direction, GameChangeType, LevelState, MoveRecord, TileChange};

/// Applies one move attempt in place and returns what changed.
///
/// The bare step and the push are evaluated one after the other, not as
/// one branch: first the player walks if the destination is open floor,
/// then the cell beyond is checked and a box on the destination is pushed
/// if that cell is free of walls, boxes and enemies. A box on the
/// destination keeps the first check from firing, so at most one of the
/// two moves the player.
pub fn step(level: &mut LevelState, direction: Direction) -> MoveRecord {
    let dir = direction.to_vec();
    let player_before = level.player;
    let facing_before = level.player_facing;
    level.player_facing = direction;

    let dest = player_before + dir;
    let beyond = dest + dir;
    let mut tile_changes = Vec::new();
    let mut change_type = GameChangeType::Blocked;

    if level.grid.get(&dest).is_some_and(|c| c.is_walkable()) {
        level.player = dest;
        change_type = GameChangeType::PlayerMove;
    }

    let push_target_free = level.grid.get(&beyond).is_some_and(|c| c.is_walkable())
        && !level.has_enemy_at(&beyond);
    if push_target_free {
        let dest_cell = level.grid.get(&dest).unwrap_or(Floor);
        if dest_cell.is_box() {
            let beyond_cell = level.grid.tile_at(&beyond);
            tile_changes.push(TileChange { position: beyond, before: beyond_cell });
            tile_changes.push(TileChange { position: dest, before: dest_cell });

            level.grid.set_tile(&beyond, if beyond_cell == Target { BoxOnTarget } else { BoxOnFloor });
            level.grid.set_tile(&dest, if dest_cell == BoxOnTarget { Target } else { Floor });
            level.player = dest;
            change_type = GameChangeType::PlayerAndBoxMove;
        }
    }

    debug!(?direction, from = ?player_before, to = ?level.player, ?change_type, "player move");

    MoveRecord {
        direction,
        player_before,
        facing_before,
        tile_changes,
        change_type,
    }
}

/// Reverts a record produced by [`step`] on the same state.
pub fn revert(level: &mut LevelState, record: &MoveRecord) {
    for change in record.tile_changes.iter().rev() {
        level.grid.set_tile(&change.position, change.before);
    }
    level.player = record.player_before;
    level.player_facing = record.facing_before;
}
