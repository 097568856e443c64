//! Game board state: one cell set per side plus the structural queries
//! the move search builds on.

use crate::cellset::CellSet;
use crate::common::{BoardError, Side};
use crate::config::{GRID_SIZE, NUM_CELLS, WINNING_LINES};
use core::fmt;

/// Serializable board state for syncing or saving games.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub x: CellSet,
    pub o: CellSet,
}

/// One snapshot of the 3×3 grid. Copied freely during search; the only
/// mutator is [`Board::place_move`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    marks: [CellSet; 2],
}

#[inline]
fn side_index(side: Side) -> usize {
    match side {
        Side::X => 0,
        Side::O => 1,
    }
}

impl Board {
    /// Create an empty board (every cell vacant).
    pub fn new() -> Self {
        Board {
            marks: [CellSet::new(); 2],
        }
    }

    /// Build a board from an external record of moves, e.g. a persisted
    /// move history. Rejects positions that are out of range or claimed
    /// twice.
    pub fn from_moves<I>(moves: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (u8, Side)>,
    {
        let mut board = Self::new();
        for (position, side) in moves {
            board.place_move(position, side)?;
        }
        Ok(board)
    }

    /// All vacant positions. The returned set iterates in ascending index
    /// order, which fixes the tie-break order of the search.
    pub fn available_moves(&self) -> CellSet {
        !(self.marks[0] | self.marks[1])
    }

    /// All positions held by `side`.
    pub fn occupied_by(&self, side: Side) -> CellSet {
        self.marks[side_index(side)]
    }

    /// The occupant of a single cell, if any.
    pub fn cell(&self, position: u8) -> Result<Option<Side>, BoardError> {
        if position >= NUM_CELLS {
            return Err(BoardError::IllegalMove { position });
        }
        for side in Side::BOTH {
            if self.marks[side_index(side)].contains(position) {
                return Ok(Some(side));
            }
        }
        Ok(None)
    }

    /// The side holding a completed line, if any. Sides are scanned in
    /// fixed order (X before O); with disjoint occupancy at most one side
    /// can ever complete a line.
    pub fn winner(&self) -> Option<Side> {
        for side in Side::BOTH {
            let owned = self.marks[side_index(side)];
            for line in WINNING_LINES.iter() {
                if line.iter().all(|&position| owned.contains(position)) {
                    return Some(side);
                }
            }
        }
        None
    }

    /// True once the game is over: a line is complete or the board is full.
    pub fn is_complete(&self) -> bool {
        self.winner().is_some() || self.available_moves().is_empty()
    }

    /// True for a finished game with no winner.
    pub fn is_draw(&self) -> bool {
        self.is_complete() && self.winner().is_none()
    }

    /// Place a mark for `side` at `position`. The cell must be vacant and
    /// in range; on failure the board is left untouched.
    pub fn place_move(&mut self, position: u8, side: Side) -> Result<(), BoardError> {
        if position >= NUM_CELLS {
            return Err(BoardError::IllegalMove { position });
        }
        if !self.available_moves().contains(position) {
            return Err(BoardError::IllegalMove { position });
        }
        self.marks[side_index(side)].set(position)?;
        Ok(())
    }

    /// Number of moves made so far.
    pub fn move_count(&self) -> usize {
        self.marks[0].count_ones() + self.marks[1].count_ones()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  x: {:?},\n  o: {:?}\n}}",
            self.marks[0], self.marks[1]
        )
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let position = r * GRID_SIZE + c;
                let mark = if self.marks[0].contains(position) {
                    'X'
                } else if self.marks[1].contains(position) {
                    'O'
                } else {
                    '.'
                };
                write!(f, " {}", mark)?;
            }
            if r + 1 < GRID_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState {
            x: b.marks[0],
            o: b.marks[1],
        }
    }
}

impl From<BoardState> for Board {
    fn from(state: BoardState) -> Self {
        Board {
            marks: [state.x, state.o],
        }
    }
}
