use crate::board::Board;
use crate::common::{BoardError, Side};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next position for `side` on `board`.
    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        side: Side,
    ) -> Result<u8, BoardError>;

    /// Inform the player of a move made by either side.
    fn notify_move(&mut self, _position: u8, _side: Side) {}
}
