//! Notable moments the front end may want to react to (sounds, flashes,
//! status lines). Purely observational: the engine never reads anything back.

use alloc::vec::Vec;
use core::fmt;

use crate::common::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// `Side` fired a shot.
    ShotFired(Side),
    /// A ship belonging to `target` was hit but is still afloat.
    ShipHit { target: Side },
    /// A ship belonging to `target` went down.
    ShipSunk { target: Side, ship: &'static str },
    /// `winner` sank the last enemy ship.
    GameOver { winner: Side },
}

/// Player-facing status line for the event.
impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::ShotFired(Side::Player) => write!(f, "Fire!"),
            GameEvent::ShotFired(Side::Computer) => write!(f, "The computer fires."),
            GameEvent::ShipHit { target: Side::Computer } => write!(f, "Hit, Admiral!"),
            GameEvent::ShipHit { target: Side::Player } => write!(f, "Your ship has been hit!"),
            GameEvent::ShipSunk {
                target: Side::Computer,
                ship,
            } => write!(f, "You sank the enemy {}!", ship),
            GameEvent::ShipSunk {
                target: Side::Player,
                ship,
            } => write!(f, "The computer sank your {}!", ship),
            GameEvent::GameOver {
                winner: Side::Player,
            } => write!(f, "Victory! Every enemy ship is at the bottom of the sea."),
            GameEvent::GameOver {
                winner: Side::Computer,
            } => write!(f, "Defeat! Your fleet has been destroyed."),
        }
    }
}

/// Receiver for [`GameEvent`]s. Fire-and-forget.
pub trait EventSink {
    fn notify(&mut self, event: GameEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: GameEvent) {}
}

/// Keeps every event in order, mostly useful for tests and replays.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Hand back everything recorded so far, leaving the log empty.
    pub fn take(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }
}

impl EventSink for EventLog {
    fn notify(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
