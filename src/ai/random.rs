use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::Board;

/// An agent that places uniformly at random on an empty cell.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a row-major cell index, or `None` on a full board.
    pub fn select_action(&mut self, board: &Board) -> Option<usize> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..empty.len());
        Some(empty[idx])
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{BoardView, Cell};

    #[test]
    fn test_random_agent_selects_empty_cell() {
        let mut agent = RandomAgent::new();
        let mut board = Board::new(3);
        board.place(0, 0, Cell::Black).unwrap();
        board.place(1, 1, Cell::White).unwrap();

        for _ in 0..100 {
            let action = agent.select_action(&board).unwrap();
            assert_eq!(board.get(action / 3, action % 3), Cell::Empty);
        }
    }

    #[test]
    fn test_random_agent_fills_board() {
        let mut agent = RandomAgent::with_seed(3);
        let mut board = Board::new(4);
        let mut turn = 0;
        while let Some(action) = agent.select_action(&board) {
            let cell = if turn % 2 == 0 { Cell::Black } else { Cell::White };
            board.place(action / 4, action % 4, cell).unwrap();
            turn += 1;
        }
        assert!(board.is_full());
        assert_eq!(turn, 16);
    }

    #[test]
    fn test_seeded_agents_agree() {
        let board = Board::new(15);
        let mut a = RandomAgent::with_seed(11);
        let mut b = RandomAgent::with_seed(11);
        for _ in 0..10 {
            assert_eq!(a.select_action(&board), b.select_action(&board));
        }
    }
}
