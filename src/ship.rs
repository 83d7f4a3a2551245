//! Ship definitions and footprints using our `BitBoard`.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Coord};
use crate::config::BOARD_SIZE;

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on the board. Its cells are fixed at construction; only the
/// hit count changes afterwards.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    origin: Coord,
    mask: BB,
    hit_mask: BB,
    hits: usize,
}

impl Ship {
    /// Lay a ship out from `origin` towards the right (horizontal) or
    /// downwards (vertical).
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        origin: Coord,
    ) -> Result<Self, BoardError> {
        let len = ship_type.length();
        let size = BOARD_SIZE as usize;
        let end = |start: usize| start.checked_add(len).is_some_and(|end| end <= size);
        let fits = match orientation {
            Orientation::Horizontal => origin.row < size && end(origin.col),
            Orientation::Vertical => origin.col < size && end(origin.row),
        };
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mask = BB::from_cells((0..len).map(|i| match orientation {
            Orientation::Horizontal => (origin.row, origin.col + i),
            Orientation::Vertical => (origin.row + i, origin.col),
        }))?;

        Ok(Ship {
            ship_type,
            orientation,
            origin,
            mask,
            hit_mask: BB::new(),
            hits: 0,
        })
    }

    /// Record a hit at `at`. Returns `false` if the cell is not part of this
    /// ship or was already hit, in which case the count is unchanged.
    pub fn register_hit(&mut self, at: Coord) -> bool {
        if !self.mask.contains(at.row, at.col) || self.hit_mask.contains(at.row, at.col) {
            return false;
        }
        let _ = self.hit_mask.set(at.row, at.col);
        self.hits += 1;
        true
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.mask.contains(at.row, at.col)
    }

    pub fn is_sunk(&self) -> bool {
        self.hits == self.ship_type.length()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BB {
        self.mask
    }

    /// Cells in order from the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (origin, orientation) = (self.origin, self.orientation);
        (0..self.length()).map(move |i| match orientation {
            Orientation::Horizontal => Coord::new(origin.row, origin.col + i),
            Orientation::Vertical => Coord::new(origin.row + i, origin.col),
        })
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, orientation: {:?}, hits: {}/{} }}",
            self.ship_type.name(),
            self.origin,
            self.orientation,
            self.hits,
            self.ship_type.length(),
        )
    }
}
