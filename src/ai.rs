// Hunt/target shot selection for the computer side.
//
// The targeting memory only ever looks at the revealed state of the board
// it is firing at. It never sees ship positions.

use log::debug;
use rand::Rng;

use crate::{
    board::{Board, CellState},
    common::{Coord, Direction, ShotOutcome},
    ship::Orientation,
};

/// What the computer is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiMode {
    /// Firing at random unresolved cells.
    Searching,
    /// Working outwards from a hit on a ship that is still afloat.
    Homing,
}

/// Hunt/target memory for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Targeting {
    mode: AiMode,
    first_hit: Option<Coord>,
    second_hit: Option<Coord>,
    orientation: Option<Orientation>,
    tried: u8,
}

impl Targeting {
    pub fn new() -> Self {
        Targeting {
            mode: AiMode::Searching,
            first_hit: None,
            second_hit: None,
            orientation: None,
            tried: 0,
        }
    }

    /// Forget the ship being tracked and go back to searching.
    pub fn reset(&mut self) {
        *self = Targeting::new();
    }

    pub fn mode(&self) -> AiMode {
        self.mode
    }

    pub fn first_hit(&self) -> Option<Coord> {
        self.first_hit
    }

    pub fn second_hit(&self) -> Option<Coord> {
        self.second_hit
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    pub fn has_tried(&self, dir: Direction) -> bool {
        self.tried & dir.bit() != 0
    }

    /// Choose the next cell to fire at on `board`. Returns `None` only when
    /// every cell has already been resolved.
    pub fn next_target<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) -> Option<Coord> {
        if self.mode == AiMode::Homing {
            let candidate = match (self.first_hit, self.second_hit) {
                (Some(first), None) => self.probe_around(board, first),
                (Some(first), Some(second)) => self.extend_line(board, first, second),
                _ => None,
            };
            if candidate.is_some() {
                return candidate;
            }
            debug!("homing exhausted around {:?}, back to searching", self.first_hit);
            self.reset();
        }
        random_unresolved(board, rng)
    }

    /// Feed back the outcome of the shot fired at `at`.
    pub fn record(&mut self, at: Coord, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::HitAndSunk(_) => self.reset(),
            ShotOutcome::Hit => match (self.mode, self.first_hit, self.second_hit) {
                (AiMode::Searching, _, _) | (AiMode::Homing, None, _) => {
                    *self = Targeting {
                        mode: AiMode::Homing,
                        first_hit: Some(at),
                        ..Targeting::new()
                    };
                }
                (AiMode::Homing, Some(first), None) => {
                    self.second_hit = Some(at);
                    self.orientation = Some(infer_orientation(first, at));
                }
                // Further hits on a known line are picked up from the board.
                (AiMode::Homing, Some(_), Some(_)) => {}
            },
            ShotOutcome::Miss | ShotOutcome::AlreadyTargeted => {}
        }
    }

    fn probe_around(&mut self, board: &Board, first: Coord) -> Option<Coord> {
        for dir in Direction::ALL {
            if self.has_tried(dir) {
                continue;
            }
            self.tried |= dir.bit();
            if let Some(next) = first.step(dir) {
                if !board.is_resolved(next) {
                    return Some(next);
                }
            }
        }
        None
    }

    /// Try one past the far end of the hit run, then one before the near end.
    fn extend_line(&mut self, board: &Board, first: Coord, second: Coord) -> Option<Coord> {
        let orientation = *self
            .orientation
            .get_or_insert_with(|| infer_orientation(first, second));
        let (forward, backward) = match orientation {
            Orientation::Horizontal => (Direction::Right, Direction::Left),
            Orientation::Vertical => (Direction::Down, Direction::Up),
        };
        let (low, high) = if first <= second {
            (first, second)
        } else {
            (second, first)
        };
        [(high, forward), (low, backward)]
            .into_iter()
            .find_map(|(end, dir)| past_hit_run(board, end, dir))
    }
}

impl Default for Targeting {
    fn default() -> Self {
        Self::new()
    }
}

fn infer_orientation(a: Coord, b: Coord) -> Orientation {
    if a.row == b.row {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Walk from `from` along `dir` across consecutive hits and return the first
/// cell after them, if it is on the board and not yet fired at.
fn past_hit_run(board: &Board, from: Coord, dir: Direction) -> Option<Coord> {
    let mut at = from;
    loop {
        let next = at.step(dir)?;
        match board.get(next) {
            CellState::Hit => at = next,
            state if state.is_resolved() => return None,
            _ => return Some(next),
        }
    }
}

/// Uniform pick among the cells nobody has fired at.
fn random_unresolved<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coord> {
    let open = board.unresolved().count();
    if open == 0 {
        return None;
    }
    board.unresolved().nth(rng.random_range(0..open))
}
