
#[cfg(test)]
mod test {
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn enemy_steps_toward_player() {
        let mut game = GameTestState::new("1 5 G . . . @");
        assert_eq!(game.tick(), 1);
        game.assert_matches(". G . . @");
        assert_eq!(game.level().enemies[0].facing, Direction::Right);
    }

    #[test]
    fn enemy_faces_the_way_it_stepped() {
        let mut game = GameTestState::new("1 3 @ . G");
        game.tick();
        assert_eq!(game.level().enemies[0].facing, Direction::Left);

        let mut game = GameTestState::new("3 1 @ . G");
        game.tick();
        assert_eq!(game.level().enemies[0].facing, Direction::Up);
        game.assert_matches("@\nG\n.");

        let mut game = GameTestState::new("3 1 G . @");
        game.tick();
        assert_eq!(game.level().enemies[0].facing, Direction::Down);
    }

    #[test]
    fn enemy_routes_around_walls_and_boxes() {
        let mut game = GameTestState::new(r#"
3 5
G # . A @
. A . # .
. . . . .
"#);
        for _ in 0..6 {
            game.tick();
        }
        game.assert_matches(r#"
. # . A @
. A . # .
. . . . G
"#);
        game.tick();
        game.assert_matches(r#"
. # . A @
. A . # G
. . . . .
"#);
        game.tick();
        assert!(game.session.is_game_over());
    }

    #[test]
    fn unreachable_enemy_holds_position() {
        let mut game = GameTestState::new("1 5 G # . . @");
        assert_eq!(game.tick(), 0);
        game.assert_matches("G # . . @");
        assert_eq!(game.level().enemies[0].facing, Direction::Down);
    }

    #[test]
    fn enemy_boxed_in_by_box_holds_position() {
        let mut game = GameTestState::new("1 5 G A . . @");
        assert_eq!(game.tick(), 0);
        game.assert_matches("G A . . @");
    }

    #[test]
    fn enemy_on_player_does_not_move() {
        let mut game = GameTestState::new("1 3 @ G .");
        game.try_move(Direction::Right);
        assert!(game.session.is_game_over());
        assert_eq!(game.tick(), 0);
        game.assert_matches(". X .");
    }

    #[test]
    fn adjacent_enemy_catches_player() {
        let mut game = GameTestState::new("1 3 # G @");
        assert!(!game.session.is_game_over());
        game.tick();
        game.assert_matches("# . X");
        assert!(game.session.is_game_over());
    }

    #[test]
    fn earlier_enemy_claims_contested_cell() {
        let mut game = GameTestState::new(r#"
3 3
G . G
# . #
# @ #
"#);
        assert_eq!(game.tick(), 1);
        game.assert_matches(r#"
. G G
# . #
# @ #
"#);
        assert_eq!(game.tick(), 1);
        game.assert_matches(r#"
. . G
# G #
# @ #
"#);
        assert_eq!(game.level().enemies[0].facing, Direction::Down);
        game.tick();
        game.assert_matches(r#"
. . G
# . #
# X #
"#);
        assert!(game.session.is_game_over());
    }

    #[test]
    fn later_enemy_sees_earlier_move_in_same_tick() {
        let mut game = GameTestState::new(r#"
2 4
G . . @
G . . .
"#);
        assert_eq!(game.tick(), 2);
        game.assert_matches(r#"
. G . @
. G . .
"#);
        assert_eq!(game.level().enemies[1].facing, Direction::Right);
    }

    #[test]
    fn enemies_never_stack_while_chasing() {
        let mut game = GameTestState::new(r#"
4 6
G . . . . .
. # # # . .
. . . # . G
G . . . . @
"#);
        for _ in 0..12 {
            if game.session.is_game_over() {
                break;
            }
            game.tick();
            let mut positions = game.level().enemy_positions();
            positions.sort();
            positions.dedup();
            assert_eq!(positions.len(), game.level().enemies.len(), "stacked in\n{}", game.game_to_string());
        }
    }
}
