//! Heuristic reward shaping from line patterns around a placed stone.

use crate::game::{BoardView, Cell, Stone};

/// The four undirected line directions: horizontal, vertical, diagonal,
/// anti-diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Shaping reward constants.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    pub threat_2: f32,
    pub threat_3: f32,
    pub threat_4: f32,
    pub block_3: f32,
    pub block_4: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        RewardConfig {
            threat_2: 0.01,
            threat_3: 0.05,
            threat_4: 0.2,
            block_3: 0.1,
            block_4: 0.3,
        }
    }
}

/// The two parts of a shaped reward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RewardComponents {
    pub threat_reward: f32,
    pub block_reward: f32,
}

impl RewardComponents {
    pub fn total(&self) -> f32 {
        self.threat_reward + self.block_reward
    }
}

/// Count consecutive `color` cells starting one step from (row, col) in
/// direction (dr, dc). Stops at the first mismatch or the board edge.
pub fn count_line<V: BoardView + ?Sized>(
    board: &V,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    color: Cell,
) -> usize {
    let n = board.size();
    let mut count = 0;
    let mut r = row.checked_add_signed(dr);
    let mut c = col.checked_add_signed(dc);
    while let (Some(rr), Some(cc)) = (r, c) {
        if rr >= n || cc >= n || board.get(rr, cc) != color {
            break;
        }
        count += 1;
        r = rr.checked_add_signed(dr);
        c = cc.checked_add_signed(dc);
    }
    count
}

/// Longest unbroken run of `color` through (row, col), counting the cell
/// itself, over all four line directions.
pub fn pattern_length<V: BoardView + ?Sized>(board: &V, row: usize, col: usize, color: Cell) -> usize {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| {
            1 + count_line(board, row, col, dr, dc, color)
                + count_line(board, row, col, -dr, -dc, color)
        })
        .max()
        .unwrap_or(1)
}

/// Longest opponent run radiating from the just-occupied cell.
///
/// Same computation as [`pattern_length`] with the opponent's color; it
/// approximates how much opponent development the move interrupts.
pub fn block_length<V: BoardView + ?Sized>(
    board: &V,
    row: usize,
    col: usize,
    opponent: Cell,
) -> usize {
    pattern_length(board, row, col, opponent)
}

/// Tiered shaping reward for a placement. Holds only read-only constants.
#[derive(Debug, Clone)]
pub struct RewardShaper {
    config: RewardConfig,
}

impl RewardShaper {
    pub fn new(config: RewardConfig) -> Self {
        RewardShaper { config }
    }

    pub fn config(&self) -> &RewardConfig {
        &self.config
    }

    /// Threat and block parts for the stone `mover` placed at (row, col).
    pub fn components<V: BoardView + ?Sized>(
        &self,
        board: &V,
        row: usize,
        col: usize,
        mover: Stone,
        opponent: Stone,
    ) -> RewardComponents {
        // runs of five or more are left to the environment's terminal reward
        let threat_reward = match pattern_length(board, row, col, mover.to_cell()) {
            4 => self.config.threat_4,
            3 => self.config.threat_3,
            2 => self.config.threat_2,
            _ => 0.0,
        };
        let block_reward = match block_length(board, row, col, opponent.to_cell()) {
            len if len >= 4 => self.config.block_4,
            3 => self.config.block_3,
            _ => 0.0,
        };
        RewardComponents {
            threat_reward,
            block_reward,
        }
    }

    /// Total shaped reward for the stone `mover` placed at (row, col).
    pub fn shape<V: BoardView + ?Sized>(
        &self,
        board: &V,
        row: usize,
        col: usize,
        mover: Stone,
        opponent: Stone,
    ) -> f32 {
        self.components(board, row, col, mover, opponent).total()
    }
}
