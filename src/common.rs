//! Common types for Connect-N: player identities, cells, moves and errors.

use core::fmt;
use core::num::NonZeroU8;

/// Stable identity of a player's pieces. Always a small positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(NonZeroU8);

impl PlayerId {
    /// Build an id from its number. Returns `None` for zero.
    pub const fn new(id: u8) -> Option<Self> {
        match NonZeroU8::new(id) {
            Some(n) => Some(PlayerId(n)),
            None => None,
        }
    }

    /// The player's number, starting at 1.
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based slot of this player, e.g. for indexing a name list.
    pub const fn index(self) -> usize {
        self.0.get() as usize - 1
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The owner of the piece in this cell, if any.
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }
}

/// An accepted move: where the piece landed and whose it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: PlayerId,
}

/// Reasons a move attempt is rejected. None of them change match state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Column index outside `[0, cols)`.
    InvalidColumn,
    /// No empty cell left in the column.
    ColumnFull,
    /// The column holds the obstacle (obstacle variant only).
    ColumnBlocked,
    /// The mover is not the player whose turn it is.
    NotYourTurn,
    /// The match already has a result.
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidColumn => write!(f, "Column is out of range"),
            MoveError::ColumnFull => write!(f, "Column is full"),
            MoveError::ColumnBlocked => write!(f, "Column is blocked by the obstacle"),
            MoveError::NotYourTurn => write!(f, "It is not this player's turn"),
            MoveError::GameOver => write!(f, "The match is already over"),
        }
    }
}

/// Errors from board construction and lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Rows or columns is zero.
    InvalidDimensions,
    /// Win-length is zero.
    InvalidWinLength,
    /// Lookup outside the grid.
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions => write!(f, "Board needs at least one row and one column"),
            BoardError::InvalidWinLength => write!(f, "Win length must be at least 1"),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Cell out of bounds: row={}, col={}", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
