use crate::game::{BoardView, Cell, Stone};
use crate::tensor::BoardTensor;

/// Channels produced by [`encode_board`].
pub const ENCODING_CHANNELS: usize = 3;

/// Encode a board as a `[3, N, N]` tensor, relative to the side to move.
///
/// Channel 0: Side-to-move stones (1.0 where placed)
/// Channel 1: Opponent stones (1.0 where placed)
/// Channel 2: Empty cells (1.0 where a stone may still go)
pub fn encode_board<V: BoardView + ?Sized>(board: &V, to_move: Stone) -> BoardTensor {
    let n = board.size();
    let own = to_move.to_cell();
    let opponent = to_move.other().to_cell();
    let mut tensor = BoardTensor::zeros(ENCODING_CHANNELS, n);

    for row in 0..n {
        for col in 0..n {
            let cell = board.get(row, col);
            let channel = if cell == own {
                0
            } else if cell == opponent {
                1
            } else {
                debug_assert_eq!(cell, Cell::Empty);
                2
            };
            tensor.set(channel, row, col, 1.0);
        }
    }

    tensor
}
