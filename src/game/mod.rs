//! Minimal Gomoku board: cell and stone types, the read-only [`BoardView`]
//! query interface consumed by reward shaping, and a plain N×N board that
//! implements it.

mod board;
mod stone;

pub use board::{Board, BoardView, Cell, GameOutcome, WIN_LENGTH};
pub use stone::Stone;
