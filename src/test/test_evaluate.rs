
#[cfg(test)]
mod test {
    use crate::core::*;
    use crate::test::test_util::level;

    #[test]
    fn won_when_every_box_is_on_a_goal() {
        assert!(level("1 4 @ 1 1 .").is_won());
        assert!(level("1 4 @ 1 a .").is_won());
    }

    #[test]
    fn won_when_no_boxes_at_all() {
        assert!(level("1 3 @ . a").is_won());
        assert!(level("1 2 @ .").is_won());
    }

    #[test]
    fn not_won_with_box_off_goal_and_empty_goal() {
        assert!(!level("1 5 @ A 1 a .").is_won());
        assert!(!level("1 3 @ A a").is_won());
    }

    #[test]
    fn box_off_goal_without_any_goal_tile_counts_as_won_once_a_box_sits_on_a_goal() {
        // No empty goal remains, so a single box-on-goal settles it even
        // though a box is still off goal.
        assert!(level("1 3 @ A 1").is_won());
    }

    #[test]
    fn box_off_goal_and_no_goals_at_all_is_not_won() {
        assert!(!level("1 2 @ A").is_won());
    }

    #[test]
    fn game_over_iff_enemy_shares_player_cell() {
        let mut state = level("1 4 @ G . G");
        assert!(!state.is_game_over());

        state.enemies[1].position = state.player;
        assert!(state.is_game_over());

        state.enemies[1].position = Vec2 { x: 2, y: 0 };
        assert!(!state.is_game_over());
    }

    #[test]
    fn no_enemies_is_never_game_over() {
        assert!(!level("1 2 @ .").is_game_over());
    }
}
