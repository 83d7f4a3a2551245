use broadside::{CellState, Coord, Game, Side, Turn, SHOTS_PER_TURN};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Sunk ships and `Sunk` cells must always agree, on both boards.
fn check_sunk_cells<S, E>(game: &Game<S, E>) -> Result<(), TestCaseError>
where
    S: broadside::ScoreStore,
    E: broadside::EventSink,
{
    let state = game.state();
    for waters in [state.player(), state.computer()] {
        for ship in waters.fleet.ships() {
            let all_sunk = ship
                .cells()
                .all(|at| waters.board.cell_at(at).unwrap() == CellState::Sunk);
            prop_assert_eq!(ship.is_sunk(), all_sunk);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn random_play_respects_turns(seed in any::<u64>()) {
        let mut game = Game::seeded(seed).unwrap();
        let mut shooter = SmallRng::seed_from_u64(!seed);

        let mut side = Side::Player;
        let mut in_a_row = 0u8;

        while !game.turn().is_over() {
            let before = game.state().clone();
            match game.turn() {
                Turn::Player { .. } => {
                    let at = Coord::new(shooter.random_range(0..10), shooter.random_range(0..10));
                    let outcome = game.player_shoot(at.row, at.col).unwrap();
                    if outcome == broadside::ShotOutcome::AlreadyTargeted {
                        prop_assert_eq!(game.state(), &before);
                        continue;
                    }
                    if side != Side::Player {
                        side = Side::Player;
                        in_a_row = 0;
                    }
                    in_a_row += 1;
                    prop_assert_eq!(game.state().player_shots(), before.player_shots() + 1);
                }
                Turn::Computer { .. } => {
                    game.computer_shoot().unwrap();
                    if side != Side::Computer {
                        side = Side::Computer;
                        in_a_row = 0;
                    }
                    in_a_row += 1;
                    prop_assert_eq!(game.state().computer_shots(), before.computer_shots() + 1);
                }
                Turn::GameOver { .. } => unreachable!(),
            }
            prop_assert!(in_a_row <= SHOTS_PER_TURN);
            check_sunk_cells(&game)?;
        }

        let state = game.state();
        match game.turn().winner().unwrap() {
            Side::Player => prop_assert!(state.computer().fleet.is_eliminated()),
            Side::Computer => prop_assert!(state.player().fleet.is_eliminated()),
        }
    }
}
