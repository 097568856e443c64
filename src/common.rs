//! Common types: the two sides and the board error taxonomy.

use crate::cellset::CellSetError;
use core::fmt;

/// One of the two players. X always appears first in fixed-order scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    X,
    O,
}

impl Side {
    /// The opposing side.
    #[inline]
    pub fn opponent(&self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Both sides, X first.
    pub const BOTH: [Side; 2] = [Side::X, Side::O];
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::X => write!(f, "X"),
            Side::O => write!(f, "O"),
        }
    }
}

/// Errors returned by board and move-selection operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Move targets a position that is out of range or already occupied.
    IllegalMove { position: u8 },
    /// Move selection was requested on a completed or full board.
    NoMovesAvailable,
}

impl From<CellSetError> for BoardError {
    fn from(err: CellSetError) -> Self {
        match err {
            CellSetError::IndexOutOfBounds { position } => BoardError::IllegalMove { position },
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::IllegalMove { position } => {
                write!(f, "Position {} is out of range or already taken", position)
            }
            BoardError::NoMovesAvailable => write!(f, "No moves available on this board"),
        }
    }
}
