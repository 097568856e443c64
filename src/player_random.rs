use crate::board::Board;
use crate::common::{BoardError, Side};
use crate::player::Player;
use rand::rngs::SmallRng;
use rand::Rng;

/// Player that picks uniformly among the vacant cells. Useful as a
/// baseline opponent in simulations.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        _side: Side,
    ) -> Result<u8, BoardError> {
        let available = board.available_moves();
        let count = available.count_ones();
        if count == 0 {
            return Err(BoardError::NoMovesAvailable);
        }
        let pick = rng.random_range(0..count);
        available
            .iter()
            .nth(pick)
            .ok_or(BoardError::NoMovesAvailable)
    }
}
