//! The 10×10 grid of cell states one side's fleet sits on.

use core::fmt;

use crate::common::{BoardError, Coord};
use crate::config::BOARD_SIZE;

const GRID: usize = BOARD_SIZE as usize;

/// State of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum CellState {
    #[default]
    Empty,
    Occupied,
    Hit,
    Missed,
    Sunk,
}

impl CellState {
    /// True once a shot has landed here.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellState::Hit | CellState::Missed | CellState::Sunk)
    }

    /// What the opposing side is allowed to see.
    pub fn concealed(self) -> Self {
        match self {
            CellState::Occupied => CellState::Empty,
            other => other,
        }
    }

    fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Occupied => 'S',
            CellState::Hit => 'X',
            CellState::Missed => 'o',
            CellState::Sunk => '#',
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[CellState; GRID]; GRID],
}

impl Board {
    /// An all-water board.
    pub fn new() -> Self {
        Board {
            cells: [[CellState::Empty; GRID]; GRID],
        }
    }

    /// State at `at`, failing for coordinates off the board.
    pub fn cell_at(&self, at: Coord) -> Result<CellState, BoardError> {
        if !at.in_bounds() {
            return Err(BoardError::BitBoardError(
                crate::bitboard::BitBoardError::IndexOutOfBounds {
                    row: at.row,
                    col: at.col,
                },
            ));
        }
        Ok(self.cells[at.row][at.col])
    }

    /// Callers guarantee `at` is on the board.
    pub(crate) fn get(&self, at: Coord) -> CellState {
        self.cells[at.row][at.col]
    }

    pub(crate) fn set(&mut self, at: Coord, state: CellState) {
        self.cells[at.row][at.col] = state;
    }

    pub fn is_resolved(&self, at: Coord) -> bool {
        at.in_bounds() && self.get(at).is_resolved()
    }

    /// The board as the opponent sees it: ships hidden, shots visible.
    pub fn concealed(&self) -> Board {
        let mut view = *self;
        for row in view.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = cell.concealed();
            }
        }
        view
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == state)
            .count()
    }

    /// Cells nobody has fired at yet, row-major.
    pub fn unresolved(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter(|(_, state)| !state.is_resolved())
            .map(|(at, _)| at)
    }

    /// All cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &state)| (Coord::new(r, c), state))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..GRID {
            write!(f, " {}", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{:2} ", r + 1)?;
            for cell in row.iter() {
                write!(f, " {}", cell.symbol())?;
            }
            if r + 1 < GRID {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        writeln!(f, "{}", self)?;
        write!(f, "}}")
    }
}
