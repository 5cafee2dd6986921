use tracing::debug;
use crate::core::pathfinding::find_path;
use crate::core::{Direction, LevelState};

/// Moves every enemy at most one cell along its shortest path to the player.
///
/// Enemies move in array order and each search sees the positions the
/// earlier ones already took this tick. Returns how many enemies moved.
pub fn advance_enemies(level: &mut LevelState) -> usize {
    let goal = level.player;
    let mut moved = 0;

    for i in 0..level.enemies.len() {
        let occupied = level.enemy_positions();
        let origin = level.enemies[i].position;
        let path = find_path(&level.grid, &occupied, origin, goal, origin);

        let Some(&next) = path.get(1) else {
            debug!(enemy = i, position = ?origin, "enemy holds position");
            continue;
        };

        let enemy = &mut level.enemies[i];
        if let Some(facing) = Direction::from_step(origin, next) {
            enemy.facing = facing;
        }
        enemy.position = next;
        moved += 1;
        debug!(enemy = i, from = ?origin, to = ?next, facing = ?enemy.facing, "enemy step");
    }

    moved
}
