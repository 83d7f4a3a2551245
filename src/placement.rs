//! Fleet placement: manual setup and the random generator.
//!
//! Ships may not overlap and may not touch, diagonals included. Both the
//! interactive [`FleetSetup`] and [`place_fleet`] enforce that rule by
//! testing a candidate footprint against the one-cell neighbourhood of every
//! ship placed so far.

use log::debug;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::board::{Board, CellState};
use crate::common::{BoardError, Coord, PlacementError};
use crate::config::{
    BOARD_SIZE, FLEET, MAX_ATTEMPTS_PER_SHIP, MAX_PLACEMENT_RESTARTS, NUM_SHIPS, TOTAL_SHIP_CELLS,
};
use crate::fleet::Fleet;
use crate::ship::{Orientation, Ship};

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// A fleet under construction. Ship `i` is always `FLEET[i]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FleetSetup {
    slots: [Option<Ship>; NUM_SHIPS],
    occupied: BB,
}

impl FleetSetup {
    pub fn new() -> Self {
        FleetSetup {
            slots: [None; NUM_SHIPS],
            occupied: BB::new(),
        }
    }

    /// Check a placement without committing it.
    pub fn check(
        &self,
        ship_index: usize,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<Ship, BoardError> {
        let slot = self.slots.get(ship_index).ok_or(BoardError::InvalidIndex)?;
        if slot.is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let ship = Ship::new(FLEET[ship_index], orientation, origin)?;
        if ship.mask().neighborhood().intersects(&self.occupied) {
            return Err(BoardError::ShipTouches);
        }
        Ok(ship)
    }

    /// Place ship `ship_index` with its first cell at `origin`. On error the
    /// setup is unchanged.
    pub fn place(
        &mut self,
        ship_index: usize,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = self.check(ship_index, origin, orientation)?;
        self.occupied = self.occupied | ship.mask();
        self.slots[ship_index] = Some(ship);
        Ok(())
    }

    /// Take a placed ship back off the board.
    pub fn remove(&mut self, ship_index: usize) -> Option<Ship> {
        let ship = self.slots.get_mut(ship_index)?.take()?;
        self.occupied = self.occupied & !ship.mask();
        Some(ship)
    }

    /// Turn a placed ship about its origin. Fails, leaving the ship where it
    /// was, if the rotated footprint does not fit.
    pub fn rotate(&mut self, ship_index: usize) -> Result<(), BoardError> {
        let ship = self.remove(ship_index).ok_or(BoardError::InvalidIndex)?;
        match self.place(ship_index, ship.origin(), ship.orientation().rotated()) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.occupied = self.occupied | ship.mask();
                self.slots[ship_index] = Some(ship);
                Err(e)
            }
        }
    }

    pub fn clear(&mut self) {
        *self = FleetSetup::new();
    }

    pub fn is_placed(&self, ship_index: usize) -> bool {
        matches!(self.slots.get(ship_index), Some(Some(_)))
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn occupied(&self) -> BB {
        self.occupied
    }

    /// Returns a random legal (origin, orientation) for `ship_index`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_index: usize,
    ) -> Result<(Coord, Orientation), BoardError> {
        let def = *FLEET.get(ship_index).ok_or(BoardError::InvalidIndex)?;
        let size = BOARD_SIZE as usize;
        for _ in 0..MAX_ATTEMPTS_PER_SHIP {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (size - 1, size - def.length()),
                Orientation::Vertical => (size - def.length(), size - 1),
            };
            let origin = Coord::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            match self.check(ship_index, origin, orient) {
                Ok(_) => return Ok((origin, orient)),
                Err(BoardError::ShipTouches) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Randomly place every ship not yet on the board. Ships placed by hand
    /// stay where they are; if they leave no room the setup is unchanged.
    pub fn auto_place_remaining<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for _ in 0..MAX_PLACEMENT_RESTARTS {
            let mut trial = self.clone();
            if trial.fill_remaining(rng).is_ok() {
                *self = trial;
                return Ok(());
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    fn fill_remaining<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for i in 0..NUM_SHIPS {
            if self.is_placed(i) {
                continue;
            }
            let (origin, orient) = self.random_placement(rng, i)?;
            self.place(i, origin, orient)?;
        }
        Ok(())
    }

    /// Lay the finished fleet onto a fresh board.
    pub fn finish(self) -> Result<(Board, Fleet), BoardError> {
        let ships = match self.slots {
            [Some(a), Some(b), Some(c), Some(d), Some(e)] => [a, b, c, d, e],
            _ => return Err(BoardError::FleetIncomplete),
        };

        let mut board = Board::new();
        for ship in ships.iter() {
            for at in ship.cells() {
                board.set(at, CellState::Occupied);
            }
        }
        Ok((board, Fleet::from_ships(ships)))
    }
}

impl Default for FleetSetup {
    fn default() -> Self {
        Self::new()
    }
}

/// Randomly place the whole fleet on an empty board.
///
/// Ships go down largest first. When a ship cannot be placed within
/// [`MAX_ATTEMPTS_PER_SHIP`] samples every placement so far is discarded and
/// the fleet is redrawn, at most [`MAX_PLACEMENT_RESTARTS`] times.
pub fn place_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<(Board, Fleet), PlacementError> {
    for restart in 0..MAX_PLACEMENT_RESTARTS {
        let mut setup = FleetSetup::new();
        match setup.fill_remaining(rng) {
            Ok(()) => {
                let (board, fleet) = setup
                    .finish()
                    .map_err(|_| PlacementError::Exhausted { restarts: restart })?;
                let found = board.count(CellState::Occupied);
                if found != TOTAL_SHIP_CELLS {
                    return Err(PlacementError::CellCountMismatch {
                        expected: TOTAL_SHIP_CELLS,
                        found,
                    });
                }
                return Ok((board, fleet));
            }
            Err(e) => debug!("fleet placement restart {}: {}", restart + 1, e),
        }
    }
    Err(PlacementError::Exhausted {
        restarts: MAX_PLACEMENT_RESTARTS,
    })
}

/// Check that `board` is the untouched board `fleet` was laid out on: every
/// ship cell occupied, nothing else occupied and no shot fired yet.
pub fn check_fleet(board: &Board, fleet: &Fleet) -> Result<(), PlacementError> {
    let found = board.count(CellState::Occupied);
    if found != TOTAL_SHIP_CELLS {
        return Err(PlacementError::CellCountMismatch {
            expected: TOTAL_SHIP_CELLS,
            found,
        });
    }
    let laid_out = fleet.ships().iter().all(|ship| {
        ship.hits() == 0 && ship.cells().all(|at| board.get(at) == CellState::Occupied)
    });
    if !laid_out || board.iter().any(|(_, state)| state.is_resolved()) {
        return Err(PlacementError::FleetMismatch);
    }
    Ok(())
}
