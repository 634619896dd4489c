mod random;
pub mod state_encoding;

pub use random::RandomAgent;
pub use state_encoding::{encode_board, ENCODING_CHANNELS};
