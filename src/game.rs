//! Turn controller: owns both sides' boards and fleets, hands the turn back
//! and forth every [`SHOTS_PER_TURN`] shots and decides the winner.

use alloc::vec::Vec;

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    ai::Targeting,
    board::Board,
    common::{Coord, PlacementError, ShotOutcome, Side, TurnError},
    config::SHOTS_PER_TURN,
    events::{EventSink, GameEvent, NullSink},
    fleet::Fleet,
    placement::{check_fleet, place_fleet},
    score::{MemoryScoreStore, ScoreStore},
    shot::apply_shot,
};

/// Whose move it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Player { shots_left: u8 },
    Computer { shots_left: u8 },
    /// Terminal; never left except by starting a new game.
    GameOver { winner: Side },
}

impl Turn {
    fn start(side: Side) -> Self {
        match side {
            Side::Player => Turn::Player {
                shots_left: SHOTS_PER_TURN,
            },
            Side::Computer => Turn::Computer {
                shots_left: SHOTS_PER_TURN,
            },
        }
    }

    /// The side allowed to shoot, `None` once the game is over.
    pub fn side(&self) -> Option<Side> {
        match self {
            Turn::Player { .. } => Some(Side::Player),
            Turn::Computer { .. } => Some(Side::Computer),
            Turn::GameOver { .. } => None,
        }
    }

    pub fn shots_left(&self) -> u8 {
        match self {
            Turn::Player { shots_left } | Turn::Computer { shots_left } => *shots_left,
            Turn::GameOver { .. } => 0,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            Turn::GameOver { winner } => Some(*winner),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, Turn::GameOver { .. })
    }
}

/// One side's board together with the fleet sitting on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waters {
    pub board: Board,
    pub fleet: Fleet,
}

impl From<(Board, Fleet)> for Waters {
    fn from((board, fleet): (Board, Fleet)) -> Self {
        Waters { board, fleet }
    }
}

/// Everything that makes up one game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    player: Waters,
    computer: Waters,
    turn: Turn,
    player_shots: u32,
    computer_shots: u32,
    best_score: Option<u32>,
    targeting: Targeting,
}

impl GameState {
    fn new(player: Waters, computer: Waters, best_score: Option<u32>) -> Self {
        GameState {
            player,
            computer,
            turn: Turn::start(Side::Player),
            player_shots: 0,
            computer_shots: 0,
            best_score,
            targeting: Targeting::new(),
        }
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// The player's own waters, ships visible.
    pub fn player(&self) -> &Waters {
        &self.player
    }

    /// The computer's waters, ships visible. Front ends should show
    /// [`Board::concealed`] instead.
    pub fn computer(&self) -> &Waters {
        &self.computer
    }

    /// Total shots the player has fired; this is the score on a win.
    pub fn player_shots(&self) -> u32 {
        self.player_shots
    }

    pub fn computer_shots(&self) -> u32 {
        self.computer_shots
    }

    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }
}

/// A shot the computer fired and what it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerShot {
    pub at: Coord,
    pub outcome: ShotOutcome,
}

/// Game engine: a [`GameState`] plus the random source and the collaborators
/// it reports to.
pub struct Game<S = MemoryScoreStore, E = NullSink> {
    state: GameState,
    rng: SmallRng,
    store: S,
    sink: E,
}

impl Game {
    /// A game with both fleets placed at random and in-memory collaborators.
    pub fn seeded(seed: u64) -> Result<Self, PlacementError> {
        Game::start(
            SmallRng::seed_from_u64(seed),
            None,
            MemoryScoreStore::new(),
            NullSink,
        )
    }
}

impl<S: ScoreStore, E: EventSink> Game<S, E> {
    /// Start a session. `player_fleet` comes from the setup screen and must be
    /// a fresh board with that fleet on it; `None` places the player's ships
    /// at random too.
    pub fn start(
        mut rng: SmallRng,
        player_fleet: Option<(Board, Fleet)>,
        store: S,
        sink: E,
    ) -> Result<Self, PlacementError> {
        let state = new_state(&mut rng, player_fleet, &store)?;
        Ok(Game {
            state,
            rng,
            store,
            sink,
        })
    }

    /// Throw the current session away and begin a fresh one. The best score
    /// is carried over; everything else, the computer's memory included,
    /// starts from scratch.
    pub fn restart(&mut self, player_fleet: Option<(Board, Fleet)>) -> Result<(), PlacementError> {
        self.state = new_state(&mut self.rng, player_fleet, &self.store)?;
        debug!("new game started");
        Ok(())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn turn(&self) -> Turn {
        self.state.turn
    }

    pub fn best_score(&self) -> Option<u32> {
        self.state.best_score
    }

    /// The player's board as the player sees it.
    pub fn player_board(&self) -> &Board {
        &self.state.player.board
    }

    /// The computer's board as the player may see it.
    pub fn computer_board_view(&self) -> Board {
        self.state.computer.board.concealed()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut E {
        &mut self.sink
    }

    /// Fire one of the player's shots at the computer's board.
    ///
    /// An `Err` means the request was refused and nothing changed. Firing at
    /// a resolved cell returns `Ok(AlreadyTargeted)` and costs no shot.
    pub fn player_shoot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, TurnError> {
        let at = Coord::checked(row, col)?;
        let shots_left = match self.state.turn {
            Turn::Player { shots_left } => shots_left,
            Turn::Computer { .. } => return Err(TurnError::NotYourTurn),
            Turn::GameOver { .. } => return Err(TurnError::GameOver),
        };

        let target = &mut self.state.computer;
        let outcome = apply_shot(&mut target.board, &mut target.fleet, at);
        if outcome == ShotOutcome::AlreadyTargeted {
            return Ok(outcome);
        }
        self.state.player_shots += 1;
        self.report(Side::Player, outcome);

        if self.state.computer.fleet.is_eliminated() {
            self.finish(Side::Player);
        } else {
            self.state.turn = self.next_turn(Side::Player, shots_left);
        }
        Ok(outcome)
    }

    /// Fire exactly one computer shot at the player's board. Callers loop
    /// while [`Turn::Computer`], or use [`computer_turn`](Self::computer_turn).
    pub fn computer_shoot(&mut self) -> Result<ComputerShot, TurnError> {
        let shots_left = match self.state.turn {
            Turn::Computer { shots_left } => shots_left,
            Turn::Player { .. } => return Err(TurnError::NotYourTurn),
            Turn::GameOver { .. } => return Err(TurnError::GameOver),
        };

        // The computer only gets to look at what the player would show it.
        let view = self.state.player.board.concealed();
        let at = match self.state.targeting.next_target(&view, &mut self.rng) {
            Some(at) => at,
            None => {
                warn!("computer has no cell left to fire at");
                return Err(TurnError::GameOver);
            }
        };

        let target = &mut self.state.player;
        let outcome = apply_shot(&mut target.board, &mut target.fleet, at);
        self.state.targeting.record(at, outcome);
        self.state.computer_shots += 1;
        self.report(Side::Computer, outcome);

        if self.state.player.fleet.is_eliminated() {
            self.finish(Side::Computer);
        } else {
            self.state.turn = self.next_turn(Side::Computer, shots_left);
        }
        Ok(ComputerShot { at, outcome })
    }

    /// Play out the computer's whole turn without pauses.
    pub fn computer_turn(&mut self) -> Vec<ComputerShot> {
        let mut shots = Vec::new();
        while let Turn::Computer { .. } = self.state.turn {
            match self.computer_shoot() {
                Ok(shot) => shots.push(shot),
                Err(_) => break,
            }
        }
        shots
    }

    fn next_turn(&self, side: Side, shots_left: u8) -> Turn {
        match shots_left.saturating_sub(1) {
            0 => {
                info!("{} is out of shots, turn passes to {}", side, side.opponent());
                Turn::start(side.opponent())
            }
            left => match side {
                Side::Player => Turn::Player { shots_left: left },
                Side::Computer => Turn::Computer { shots_left: left },
            },
        }
    }

    fn report(&mut self, shooter: Side, outcome: ShotOutcome) {
        self.sink.notify(GameEvent::ShotFired(shooter));
        let target = shooter.opponent();
        match outcome {
            ShotOutcome::Hit => self.sink.notify(GameEvent::ShipHit { target }),
            ShotOutcome::HitAndSunk(ship) => {
                self.sink.notify(GameEvent::ShipSunk { target, ship })
            }
            ShotOutcome::Miss | ShotOutcome::AlreadyTargeted => {}
        }
    }

    fn finish(&mut self, winner: Side) {
        self.state.turn = Turn::GameOver { winner };
        info!(
            "game over, {} wins (player shots: {}, computer shots: {})",
            winner, self.state.player_shots, self.state.computer_shots
        );
        if winner == Side::Player {
            let score = self.state.player_shots;
            if self.state.best_score.map_or(true, |best| score < best) {
                self.state.best_score = Some(score);
                if let Err(e) = self.store.save_best(score) {
                    warn!("could not save best score {}: {}", score, e);
                }
            }
        }
        self.sink.notify(GameEvent::GameOver { winner });
    }
}

fn new_state<S: ScoreStore>(
    rng: &mut SmallRng,
    player_fleet: Option<(Board, Fleet)>,
    store: &S,
) -> Result<GameState, PlacementError> {
    let player = match player_fleet {
        Some((board, fleet)) => {
            check_fleet(&board, &fleet)?;
            (board, fleet)
        }
        None => place_fleet(rng)?,
    };
    let computer = place_fleet(rng)?;
    let best = store.load_best().unwrap_or_else(|e| {
        warn!("could not load best score: {}", e);
        None
    });
    Ok(GameState::new(player.into(), computer.into(), best))
}
