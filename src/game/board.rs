use super::Stone;
use crate::error::GameError;
use crate::training::reward::pattern_length;

/// Stones in an unbroken line needed to end a game.
pub const WIN_LENGTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Stone),
    Draw,
}

impl GameOutcome {
    /// Short label used in episode logs
    pub fn label(self) -> &'static str {
        match self {
            GameOutcome::Winner(Stone::Black) => "black_win",
            GameOutcome::Winner(Stone::White) => "white_win",
            GameOutcome::Draw => "draw",
        }
    }
}

/// Read-only board queries. This is the whole surface the reward shaper needs
/// from a rules engine.
pub trait BoardView {
    /// Side length N of the square board.
    fn size(&self) -> usize;

    /// Cell state at `(row, col)`. Callers keep both coordinates below `size()`.
    fn get(&self, row: usize, col: usize) -> Cell;
}

/// Square N×N board stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Place a stone on an empty cell
    pub fn place(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GameError> {
        if row >= self.size || col >= self.size {
            return Err(GameError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        let idx = row * self.size + col;
        if self.cells[idx] != Cell::Empty {
            return Err(GameError::Occupied { row, col });
        }
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flattened indices of every empty cell, ascending
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Check if the stone at (row, col) completes five or more in a line
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }
        pattern_length(self, row, col, cell) >= WIN_LENGTH
    }
}

impl BoardView for Board {
    fn size(&self) -> usize {
        self.size
    }

    fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }
}
