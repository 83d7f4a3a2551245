use crate::board::{Board, CellState};
use crate::common::{Coord, ShotOutcome};
use crate::fleet::Fleet;

/// Fire at `at` on `board`, updating the owning ship in `fleet`.
///
/// Shots at resolved cells return [`ShotOutcome::AlreadyTargeted`] and change
/// nothing. Whether the fleet is now eliminated is left to the caller.
/// `at` must be on the board.
pub fn apply_shot(board: &mut Board, fleet: &mut Fleet, at: Coord) -> ShotOutcome {
    match board.get(at) {
        CellState::Hit | CellState::Missed | CellState::Sunk => ShotOutcome::AlreadyTargeted,
        CellState::Empty => {
            board.set(at, CellState::Missed);
            ShotOutcome::Miss
        }
        CellState::Occupied => {
            board.set(at, CellState::Hit);
            let Some(index) = fleet.ship_index_at(at) else {
                // Board and fleet disagree; treat the cell as plain hit water.
                log::warn!("occupied cell {} has no ship in the fleet", at);
                return ShotOutcome::Hit;
            };
            let ship = fleet.ship_mut(index);
            ship.register_hit(at);
            if !ship.is_sunk() {
                return ShotOutcome::Hit;
            }
            for cell in ship.cells() {
                board.set(cell, CellState::Sunk);
            }
            ShotOutcome::HitAndSunk(ship.name())
        }
    }
}
