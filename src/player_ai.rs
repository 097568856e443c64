use crate::board::Board;
use crate::common::{BoardError, Side};
use crate::player::Player;
use crate::search;
use rand::rngs::SmallRng;

/// Player that plays perfectly via exhaustive search. Ignores the RNG;
/// its choices are fully determined by the board.
pub struct SearchPlayer;

impl SearchPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for SearchPlayer {
    fn select_move(
        &mut self,
        _rng: &mut SmallRng,
        board: &Board,
        side: Side,
    ) -> Result<u8, BoardError> {
        search::best_move(board, side)
    }
}
