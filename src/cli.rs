#![cfg(feature = "std")]

//! Terminal front end: board rendering, setup and the interactive game loop.

use std::io::{self, Write};
use std::path::PathBuf;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::Duration;

use crate::{
    board::Board,
    common::{Coord, ShotOutcome, Side},
    config::{FLEET, NUM_SHIPS},
    events::{EventSink, GameEvent},
    fleet::Fleet,
    game::{Game, GameState, Turn},
    placement::FleetSetup,
    score_file::FileScoreStore,
    session::Session,
    ship::Orientation,
};

/// Event sink for the terminal: prints the status line and rings the bell on
/// hits, sinkings and the end of the game.
#[derive(Debug, Default)]
pub struct TerminalCues {
    muted: bool,
}

impl TerminalCues {
    pub fn new(muted: bool) -> Self {
        Self { muted }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flip the mute switch, returning the new state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }
}

impl EventSink for TerminalCues {
    fn notify(&mut self, event: GameEvent) {
        if let GameEvent::ShotFired(_) = event {
            return;
        }
        let bell = if self.muted { "" } else { "\x07" };
        println!("  » {}{}", event, bell);
    }
}

/// Options for an interactive game.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub seed: Option<u64>,
    pub score_file: Option<PathBuf>,
    pub delay: Duration,
    pub muted: bool,
    pub auto_place: bool,
}

type Input = Lines<BufReader<Stdin>>;

async fn prompt(input: &mut Input, text: &str) -> anyhow::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    Ok(input.next_line().await?.map(|l| l.trim().to_string()))
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

/// Play human vs. computer on the terminal until the user quits.
pub async fn run_play(opts: PlayOptions) -> anyhow::Result<()> {
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut rng = seeded_rng(opts.seed);
    if let Some(s) = opts.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let store = match &opts.score_file {
        Some(path) => FileScoreStore::new(path.clone()),
        None => FileScoreStore::default_location(),
    };

    let Some(fleet) = setup_fleet(&mut input, &mut rng, opts.auto_place).await? else {
        return Ok(());
    };
    let game = Game::start(
        SmallRng::from_rng(&mut rng),
        Some(fleet),
        store,
        TerminalCues::new(opts.muted),
    )?;
    let session = Session::new(game);

    loop {
        let state = session.snapshot().await;
        match state.turn() {
            Turn::Player { shots_left } => {
                print_player_view(&state);
                let text = format!("\nTarget ({} shot(s) left, 'help'): ", shots_left);
                let Some(line) = prompt(&mut input, &text).await? else {
                    return Ok(());
                };
                match line.to_ascii_lowercase().as_str() {
                    "" => continue,
                    "help" => print_targeting_help(),
                    "quit" | "exit" => return Ok(()),
                    "mute" => {
                        let muted = session.with_game(|g| g.sink_mut().toggle_mute()).await;
                        println!("Sound {}", if muted { "off" } else { "on" });
                    }
                    "new" => {
                        if !restart(&session, &mut input, &mut rng, opts.auto_place).await? {
                            return Ok(());
                        }
                    }
                    _ => fire(&session, &line).await,
                }
            }
            Turn::Computer { .. } => {
                println!("\nThe computer takes aim...");
                session
                    .play_computer_turn(opts.delay, |shot, _| {
                        println!("  Computer fires at {}: {}", shot.at, describe(shot.outcome));
                    })
                    .await;
            }
            Turn::GameOver { winner } => {
                print_player_view(&state);
                match winner {
                    Side::Player => println!("\nYou won with {} shots!", state.player_shots()),
                    Side::Computer => println!("\nThe computer won."),
                }
                if let Some(best) = state.best_score() {
                    println!("Best score: {} shots", best);
                }
                let text = "\n'new' for another game, anything else quits: ";
                let Some(line) = prompt(&mut input, text).await? else {
                    return Ok(());
                };
                if !line.eq_ignore_ascii_case("new")
                    || !restart(&session, &mut input, &mut rng, opts.auto_place).await?
                {
                    return Ok(());
                }
            }
        }
    }
}

async fn fire<S, E>(session: &Session<S, E>, line: &str)
where
    S: crate::score::ScoreStore,
    E: EventSink,
{
    let at: Coord = match line.parse() {
        Ok(at) => at,
        Err(e) => {
            println!("✗ Invalid coordinate: {} (e.g. A5, B10, J1)", e);
            return;
        }
    };
    match session.player_shoot(at.row, at.col).await {
        Ok(outcome) => println!("Shot at {}: {}", at, describe(outcome)),
        Err(e) => println!("✗ {}", e),
    }
}

async fn restart<S, E>(
    session: &Session<S, E>,
    input: &mut Input,
    rng: &mut SmallRng,
    auto_place: bool,
) -> anyhow::Result<bool>
where
    S: crate::score::ScoreStore,
    E: EventSink,
{
    let Some(fleet) = setup_fleet(input, rng, auto_place).await? else {
        return Ok(false);
    };
    session.new_game(Some(fleet)).await?;
    Ok(true)
}

fn describe(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::AlreadyTargeted => "already targeted",
        ShotOutcome::Miss => "miss",
        ShotOutcome::Hit => "hit",
        ShotOutcome::HitAndSunk(_) => "hit and sunk",
    }
}

/// Interactive ship placement. Returns `None` if input ends.
async fn setup_fleet(
    input: &mut Input,
    rng: &mut SmallRng,
    auto_place: bool,
) -> anyhow::Result<Option<(Board, Fleet)>> {
    let mut setup = FleetSetup::new();
    if auto_place {
        setup.auto_place_remaining(rng)?;
        return Ok(Some(setup.finish()?));
    }

    println!("\nPlace your fleet. Enter e.g. 'A5 H' or 'B3 V'; ENTER places a ship at random,");
    println!("'auto' places all remaining ships, 'undo' takes the last one back.");
    println!("'rotate <n>' turns ship n, 'clear' starts over, 'help' explains more.");
    let mut i = 0;
    while i < NUM_SHIPS {
        let def = FLEET[i];
        println!();
        print_setup(&setup);
        let text = format!(
            "\nShip {}/{}: {} (length {}): ",
            i + 1,
            NUM_SHIPS,
            def.name(),
            def.length()
        );
        let Some(line) = prompt(input, &text).await? else {
            return Ok(None);
        };
        let command = match parse_setup_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("✗ {}", e);
                continue;
            }
        };
        match command {
            SetupCommand::Random => match setup.random_placement(rng, i) {
                Ok((origin, orient)) => {
                    setup.place(i, origin, orient)?;
                    println!("✓ {} placed at {}", def.name(), origin);
                    i += 1;
                }
                Err(e) => println!("✗ {}; try 'clear'", e),
            },
            SetupCommand::Place(origin, orient) => match setup.place(i, origin, orient) {
                Ok(()) => {
                    println!("✓ {} placed at {}", def.name(), origin);
                    i += 1;
                }
                Err(e) => println!("✗ {}", e),
            },
            SetupCommand::Auto => match setup.auto_place_remaining(rng) {
                Ok(()) => break,
                Err(e) => println!("✗ {}; try 'clear'", e),
            },
            SetupCommand::Undo => match i.checked_sub(1).and_then(|last| setup.remove(last)) {
                Some(ship) => {
                    println!("✓ {} taken back", ship.name());
                    i -= 1;
                }
                None => println!("✗ Nothing to undo"),
            },
            SetupCommand::Rotate(n) if n < i => match setup.rotate(n) {
                Ok(()) => println!("✓ {} rotated", FLEET[n].name()),
                Err(e) => println!("✗ {}", e),
            },
            SetupCommand::Rotate(n) => println!("✗ Ship {} is not placed yet", n + 1),
            SetupCommand::Clear => {
                setup.clear();
                i = 0;
            }
            SetupCommand::Help => print_placement_help(),
        }
    }
    Ok(Some(setup.finish()?))
}

/// One line typed at the setup prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupCommand {
    /// Put the current ship somewhere random.
    Random,
    /// Put the current ship at an origin.
    Place(Coord, Orientation),
    /// Place every remaining ship at random.
    Auto,
    /// Take the most recently placed ship back.
    Undo,
    /// Turn a placed ship about its origin; zero-based fleet index.
    Rotate(usize),
    Clear,
    Help,
}

/// Parse a setup prompt line. `rotate` takes the one-based ship number shown
/// on the prompt.
pub fn parse_setup_command(line: &str) -> Result<SetupCommand, String> {
    let lower = line.trim().to_ascii_lowercase();
    let mut words = lower.split_whitespace();
    let command = match (words.next(), words.next(), words.next()) {
        (None, _, _) => SetupCommand::Random,
        (Some("auto"), None, _) => SetupCommand::Auto,
        (Some("undo"), None, _) => SetupCommand::Undo,
        (Some("clear"), None, _) => SetupCommand::Clear,
        (Some("help"), None, _) => SetupCommand::Help,
        (Some("rotate"), Some(n), None) => match n.parse::<usize>() {
            Ok(n @ 1..=NUM_SHIPS) => SetupCommand::Rotate(n - 1),
            _ => return Err(format!("Ship number must be 1-{}", NUM_SHIPS)),
        },
        _ => {
            let (origin, orient) = parse_placement(line)?;
            SetupCommand::Place(origin, orient)
        }
    };
    Ok(command)
}

/// Parse `A5 H` / `A5 V`; orientation defaults to horizontal.
pub fn parse_placement(line: &str) -> Result<(Coord, Orientation), String> {
    let mut parts = line.split_whitespace();
    let origin: Coord = parts
        .next()
        .ok_or_else(|| "Please enter coordinates (e.g., A5 H)".to_string())?
        .parse()
        .map_err(|e| format!("{}", e))?;
    let orient = match parts.next().map(|s| s.to_ascii_uppercase()) {
        None => Orientation::Horizontal,
        Some(s) if s == "H" => Orientation::Horizontal,
        Some(s) if s == "V" => Orientation::Vertical,
        Some(s) => return Err(format!("Invalid orientation '{}' - use H or V", s)),
    };
    Ok((origin, orient))
}

fn print_setup(setup: &FleetSetup) {
    let mut board = Board::new();
    for (r, c) in setup.occupied().iter_set_bits() {
        board.set(Coord::new(r, c), crate::board::CellState::Occupied);
    }
    println!("{}", board);
}

/// The enemy board (concealed) above the player's own board.
pub fn print_player_view(state: &GameState) {
    println!("\nEnemy waters ({} ships afloat):", state.computer().fleet.ships_afloat());
    println!("{}", state.computer().board.concealed());
    println!("\nYour waters ({} ships afloat):", state.player().fleet.ships_afloat());
    println!("{}", state.player().board);
    println!("Legend: S=Ship  X=Hit  #=Sunk  o=Miss  .=Water");
    print!("Shots fired: {}", state.player_shots());
    if let Some(best) = state.best_score() {
        print!("   Best: {}", best);
    }
    println!();
}

fn print_placement_help() {
    println!("\n  Format: <COLUMN><ROW> <ORIENTATION>, e.g. A5 H or B3 V");
    println!("  Columns A-J, rows 1-10. H extends right, V extends down.");
    println!("  Ships may not overlap or touch, not even diagonally.");
    println!("  ENTER places the current ship at random, 'auto' places the rest.");
    println!("  'undo' takes the last ship back, 'rotate 2' turns ship 2 about its origin.");
}

fn print_targeting_help() {
    println!("\n  Enter a cell such as A5, B10 or J1 to fire at it.");
    println!("  You have three shots per turn, hit or miss.");
    println!("  'mute' toggles the bell, 'new' starts over, 'quit' leaves.");
}
