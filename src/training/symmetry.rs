//! Dihedral (D4) data augmentation.
//!
//! Each [`Symmetry`] is a number of 90° counter-clockwise rotations followed
//! by an optional horizontal mirror. The same element is applied to the board
//! tensor and to the flattened action index, so the transformed action always
//! names the cell that moved with the stone.

use crate::tensor::BoardTensor;
use crate::training::transition::Transition;

/// One element of the symmetry group of the square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symmetry {
    rotations: u8,
    flip: bool,
}

/// The eight group elements in expansion order: rotations outer, flip inner.
///
/// | index | rotations | flip |
/// |---|---|---|
/// | 0 | 0 | no |
/// | 1 | 0 | yes |
/// | 2 | 1 | no |
/// | 3 | 1 | yes |
/// | 4 | 2 | no |
/// | 5 | 2 | yes |
/// | 6 | 3 | no |
/// | 7 | 3 | yes |
pub const SYMMETRIES: [Symmetry; 8] = [
    Symmetry::new(0, false),
    Symmetry::new(0, true),
    Symmetry::new(1, false),
    Symmetry::new(1, true),
    Symmetry::new(2, false),
    Symmetry::new(2, true),
    Symmetry::new(3, false),
    Symmetry::new(3, true),
];

impl Symmetry {
    pub const IDENTITY: Symmetry = Symmetry::new(0, false);

    pub const fn new(rotations: u8, flip: bool) -> Self {
        Symmetry {
            rotations: rotations % 4,
            flip,
        }
    }

    /// Quarter turns counter-clockwise, `0..4`.
    pub fn rotations(self) -> u8 {
        self.rotations
    }

    /// Whether columns are mirrored after rotating.
    pub fn flip(self) -> bool {
        self.flip
    }

    /// Map a cell on an `n × n` board.
    ///
    /// Rotation is applied one quarter turn at a time via
    /// `(row, col) -> (n - 1 - col, row)`, then the mirror `col -> n - 1 - col`.
    pub fn transform_cell(self, row: usize, col: usize, n: usize) -> (usize, usize) {
        let (mut r, mut c) = (row, col);
        for _ in 0..self.rotations {
            (r, c) = (n - 1 - c, r);
        }
        if self.flip {
            c = n - 1 - c;
        }
        (r, c)
    }

    /// Map a row-major action index on an `n × n` board.
    pub fn transform_action(self, action: usize, n: usize) -> usize {
        debug_assert!(action < n * n, "action {action} outside a {n}x{n} board");
        let (r, c) = self.transform_cell(action / n, action % n, n);
        r * n + c
    }

    /// Return a transformed copy of `tensor`; every channel moves identically.
    pub fn transform_tensor(self, tensor: &BoardTensor) -> BoardTensor {
        let n = tensor.size();
        let mut out = BoardTensor::zeros(tensor.channels(), n);
        for row in 0..n {
            for col in 0..n {
                let (r, c) = self.transform_cell(row, col, n);
                for ch in 0..tensor.channels() {
                    out.set(ch, r, c, tensor.get(ch, row, col));
                }
            }
        }
        out
    }

    /// The element equivalent to applying `first`, then `self`.
    pub fn compose(self, first: Symmetry) -> Symmetry {
        // A mirror reverses the direction of any rotation it is moved across.
        let outer = if first.flip {
            (4 - self.rotations) % 4
        } else {
            self.rotations
        };
        Symmetry::new(outer + first.rotations, self.flip ^ first.flip)
    }

    pub fn inverse(self) -> Symmetry {
        if self.flip {
            // every mirrored element is a reflection, hence an involution
            self
        } else {
            Symmetry::new((4 - self.rotations) % 4, false)
        }
    }
}

/// Turns one transition into its eight symmetric variants.
#[derive(Debug, Clone, Copy)]
pub struct SymmetryExpander {
    board_size: usize,
}

impl SymmetryExpander {
    pub fn new(board_size: usize) -> Self {
        SymmetryExpander { board_size }
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// The orbit of `transition` under [`SYMMETRIES`], in that order.
    ///
    /// Reward and done are copied unchanged. A terminal transition without a
    /// next state yields variants without one.
    pub fn expand(&self, transition: &Transition) -> [Transition; 8] {
        debug_assert_eq!(transition.state.size(), self.board_size);
        SYMMETRIES.map(|sym| Transition {
            state: sym.transform_tensor(&transition.state),
            action: sym.transform_action(transition.action, self.board_size),
            reward: transition.reward,
            next_state: transition
                .next_state
                .as_ref()
                .map(|next| sym.transform_tensor(next)),
            done: transition.done,
        })
    }
}
