use crate::tensor::BoardTensor;

/// A single environment step recorded for replay.
///
/// `action` is the row-major cell index `row * N + col`. `next_state` is
/// `None` for terminal steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: BoardTensor,
    pub action: usize,
    pub reward: f32,
    pub next_state: Option<BoardTensor>,
    pub done: bool,
}
