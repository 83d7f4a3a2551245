//! Common types for the engine: coordinates, shot outcomes and errors.

use core::fmt;
use core::str::FromStr;

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;

const GRID: usize = BOARD_SIZE as usize;

/// A cell on the 10×10 grid, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Build a coordinate without bounds checking.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Build a coordinate, rejecting anything outside the board.
    pub fn checked(row: usize, col: usize) -> Result<Self, TurnError> {
        if row < GRID && col < GRID {
            Ok(Self { row, col })
        } else {
            Err(TurnError::InvalidCoordinate { row, col })
        }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < GRID && self.col < GRID
    }

    /// The neighbouring cell one step in `dir`, if it is on the board.
    pub fn step(&self, dir: Direction) -> Option<Coord> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Coord { row, col };
        next.in_bounds().then_some(next)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

/// `A1` style: column letter then one-based row.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.col as u8) as char;
        write!(f, "{}{}", col, self.row + 1)
    }
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let mut chars = input.chars();
        let col_ch = chars.next().ok_or(ParseCoordError::Empty)?.to_ascii_uppercase();
        if !col_ch.is_ascii_alphabetic() {
            return Err(ParseCoordError::BadColumn(col_ch));
        }
        let col = (col_ch as u8 - b'A') as usize;
        if col >= GRID {
            return Err(ParseCoordError::BadColumn(col_ch));
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseCoordError::BadRow);
        }
        let row: usize = digits.parse().map_err(|_| ParseCoordError::BadRow)?;
        if row == 0 || row > GRID {
            return Err(ParseCoordError::BadRow);
        }
        Ok(Coord { row: row - 1, col })
    }
}

/// Why an `A1` style coordinate could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseCoordError {
    Empty,
    BadColumn(char),
    BadRow,
}

impl fmt::Display for ParseCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCoordError::Empty => write!(f, "empty coordinate"),
            ParseCoordError::BadColumn(c) => write!(f, "invalid column '{}', must be A-J", c),
            ParseCoordError::BadRow => write!(f, "invalid row, must be 1-10"),
        }
    }
}

/// Cardinal directions, in the order the computer probes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    pub(crate) fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// The two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The cell was already resolved; nothing changed.
    AlreadyTargeted,
    Miss,
    Hit,
    /// The shot finished a ship, carrying its name.
    HitAndSunk(&'static str),
}

impl ShotOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::HitAndSunk(_))
    }
}

/// Errors returned while building or inspecting a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    BitBoardError(BitBoardError),
    /// Ship index outside the fleet table.
    InvalidIndex,
    ShipAlreadyPlaced,
    ShipOutOfBounds,
    /// Placement overlaps or touches (diagonals included) another ship.
    ShipTouches,
    /// No legal spot was found for the ship within the attempt budget.
    UnableToPlaceShip,
    /// `finish` called before every ship was placed.
    FleetIncomplete,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidIndex => write!(f, "Ship index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipTouches => write!(f, "Ship overlaps or touches another ship"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::FleetIncomplete => write!(f, "Not every ship has been placed"),
        }
    }
}

/// Reasons a shot request is rejected. The game state is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    InvalidCoordinate { row: usize, col: usize },
    NotYourTurn,
    GameOver,
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::InvalidCoordinate { row, col } => {
                write!(f, "({}, {}) is not on the board", row, col)
            }
            TurnError::NotYourTurn => write!(f, "It is not your turn"),
            TurnError::GameOver => write!(f, "The game is already over"),
        }
    }
}

/// Fatal fleet generation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    Exhausted { restarts: usize },
    CellCountMismatch { expected: usize, found: usize },
    /// A supplied board does not carry the supplied fleet, untouched.
    FleetMismatch,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::Exhausted { restarts } => {
                write!(f, "fleet placement failed after {} restarts", restarts)
            }
            PlacementError::CellCountMismatch { expected, found } => write!(
                f,
                "placed fleet covers {} cells, expected {}",
                found, expected
            ),
            PlacementError::FleetMismatch => {
                write!(f, "board does not match the fleet placed on it")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for TurnError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for ParseCoordError {}
