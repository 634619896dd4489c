use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    /// Get the opposing color
    pub fn other(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// Convert stone to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Stone::Black => Cell::Black,
            Stone::White => Cell::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_stone() {
        assert_eq!(Stone::Black.other(), Stone::White);
        assert_eq!(Stone::White.other(), Stone::Black);
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Stone::Black.to_cell(), Cell::Black);
        assert_eq!(Stone::White.to_cell(), Cell::White);
    }
}
