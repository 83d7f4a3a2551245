//! One side's five ships.

use crate::bitboard::BitBoard;
use crate::common::Coord;
use crate::config::{BOARD_SIZE, NUM_SHIPS};
use crate::ship::Ship;

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// The fixed five-ship fleet. Only built by [`FleetSetup`](crate::FleetSetup)
/// and the random generator, so ships never overlap or touch.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Fleet {
    ships: [Ship; NUM_SHIPS],
}

impl Fleet {
    pub(crate) fn from_ships(ships: [Ship; NUM_SHIPS]) -> Self {
        Fleet { ships }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index)
    }

    pub(crate) fn ship_mut(&mut self, index: usize) -> &mut Ship {
        &mut self.ships[index]
    }

    /// Index of the ship covering `at`, if any.
    pub fn ship_index_at(&self, at: Coord) -> Option<usize> {
        self.ships.iter().position(|s| s.contains(at))
    }

    /// Returns `true` when every ship has taken as many hits as it is long.
    pub fn is_eliminated(&self) -> bool {
        self.ships.iter().all(|s| s.hits() == s.length())
    }

    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Union of every ship's cells.
    pub fn occupied(&self) -> BB {
        self.ships.iter().fold(BB::new(), |acc, s| acc | s.mask())
    }
}
