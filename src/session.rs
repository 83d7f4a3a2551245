#![cfg(feature = "std")]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::{sleep, Duration};

use crate::{
    board::Board,
    common::{PlacementError, ShotOutcome, TurnError},
    events::EventSink,
    fleet::Fleet,
    game::{ComputerShot, Game, GameState, Turn},
    score::ScoreStore,
};

/// A game shared between UI-driven tasks.
///
/// Every state transition happens under the session lock, one shot at a
/// time. Computer turns are paced by sleeping between shots with the lock
/// released; starting a new game while a turn is being paced makes that turn
/// stop before its next shot.
pub struct Session<S, E> {
    game: Arc<Mutex<Game<S, E>>>,
    epoch: Arc<AtomicU64>,
}

impl<S, E> Clone for Session<S, E> {
    fn clone(&self) -> Self {
        Self {
            game: Arc::clone(&self.game),
            epoch: Arc::clone(&self.epoch),
        }
    }
}

impl<S: ScoreStore, E: EventSink> Session<S, E> {
    pub fn new(game: Game<S, E>) -> Self {
        Self {
            game: Arc::new(Mutex::new(game)),
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn snapshot(&self) -> GameState {
        self.game.lock().await.state().clone()
    }

    pub async fn turn(&self) -> Turn {
        self.game.lock().await.turn()
    }

    /// Run `f` with exclusive access to the game.
    pub async fn with_game<T>(&self, f: impl FnOnce(&mut Game<S, E>) -> T) -> T {
        let mut game = self.game.lock().await;
        f(&mut game)
    }

    pub async fn player_shoot(&self, row: usize, col: usize) -> Result<ShotOutcome, TurnError> {
        self.game.lock().await.player_shoot(row, col)
    }

    /// Abandon whatever is in flight and start over.
    pub async fn new_game(
        &self,
        player_fleet: Option<(Board, Fleet)>,
    ) -> Result<(), PlacementError> {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.game.lock().await.restart(player_fleet)
    }

    /// Fire the computer's shots one by one, waiting `pace` before each.
    /// `on_shot` sees every shot together with the state right after it.
    /// Stops early if a new game is started meanwhile.
    pub async fn play_computer_turn<F>(&self, pace: Duration, mut on_shot: F) -> Vec<ComputerShot>
    where
        F: FnMut(&ComputerShot, &GameState),
    {
        let epoch = self.epoch.load(Ordering::SeqCst);
        let mut shots = Vec::new();
        loop {
            if !pace.is_zero() {
                sleep(pace).await;
            }
            if self.epoch.load(Ordering::SeqCst) != epoch {
                log::debug!("computer turn abandoned for a new game");
                break;
            }
            let mut game = self.game.lock().await;
            if !matches!(game.turn(), Turn::Computer { .. }) {
                break;
            }
            match game.computer_shoot() {
                Ok(shot) => {
                    on_shot(&shot, game.state());
                    shots.push(shot);
                }
                Err(_) => break,
            }
            if !matches!(game.turn(), Turn::Computer { .. }) {
                break;
            }
        }
        shots
    }
}
