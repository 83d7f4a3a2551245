use anyhow::{anyhow, bail};
use broadside::{Game, Targeting, Turn};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Hard stop well beyond the 200 shots a side could ever need.
const MAX_ROUNDS: usize = 1000;

fn main() -> anyhow::Result<()> {
    broadside::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut game = Game::seeded(seed)?;
    // The player's side is flown by a second hunt/target instance.
    let mut autopilot = Targeting::new();
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut turns = 0usize;

    for _ in 0..MAX_ROUNDS {
        match game.turn() {
            Turn::Player { .. } => {
                let view = game.computer_board_view();
                let at = autopilot
                    .next_target(&view, &mut rng)
                    .ok_or_else(|| anyhow!("autopilot ran out of cells"))?;
                let outcome = game.player_shoot(at.row, at.col)?;
                autopilot.record(at, outcome);
                if !matches!(game.turn(), Turn::Player { .. }) {
                    turns += 1;
                }
            }
            Turn::Computer { .. } => {
                game.computer_turn();
                turns += 1;
            }
            Turn::GameOver { winner } => {
                let state = game.state();
                let result = json!({
                    "seed": seed,
                    "winner": winner,
                    "player_shots": state.player_shots(),
                    "computer_shots": state.computer_shots(),
                    "turns": turns,
                });
                println!("{}", serde_json::to_string(&result)?);
                return Ok(());
            }
        }
    }
    bail!("game did not finish within {} rounds", MAX_ROUNDS)
}
