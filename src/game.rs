//! Game-flow layer over the board: apply a move, classify the position,
//! snapshot and restore state. Turn alternation belongs to the caller.

use crate::board::{Board, BoardState};
use crate::common::{BoardError, Side};

/// Serializable overall game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: BoardState,
    pub status: GameStatus,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Side),
    Drawn,
}

/// Core game logic holding one board and answering at the level a caller
/// records moves: place, then report what the game looks like now.
pub struct GameEngine {
    board: Board,
}

impl GameEngine {
    /// Create a new engine with an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Restore an engine from a previously saved state. The stored status
    /// is a capture-time convenience; the board is the source of truth.
    pub fn from_state(state: GameState) -> Self {
        Self {
            board: Board::from(state.board),
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Place a mark for `side` and report the resulting status.
    pub fn apply_move(&mut self, position: u8, side: Side) -> Result<GameStatus, BoardError> {
        self.board.place_move(position, side)?;
        Ok(self.status())
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        match self.board.winner() {
            Some(side) => GameStatus::Won(side),
            None if self.board.available_moves().is_empty() => GameStatus::Drawn,
            None => GameStatus::InProgress,
        }
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: BoardState::from(&self.board),
            status: self.status(),
        }
    }
}
