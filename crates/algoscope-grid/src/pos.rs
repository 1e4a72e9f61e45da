//! Grid coordinates.

use std::fmt;

/// A (row, col) position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance `|Δrow| + |Δcol|`.
    pub fn manhattan(&self, other: &Pos) -> u32 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u32
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Pos::new(5, 5);
        let b = Pos::new(10, 25);
        assert_eq!(a.manhattan(&b), 25);
        assert_eq!(b.manhattan(&a), 25);
        assert_eq!(a.manhattan(&a), 0);
    }
}
