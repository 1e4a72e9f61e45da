//! The fixed-topology grid arena.
//!
//! Cells are addressed by a flat row-major index. The grid itself only holds
//! permanent topology (start, finish, walls); per-run search fields live in
//! [`crate::state::SearchState`], indexed the same way.

use crate::error::{Error, Result};
use crate::pos::Pos;

/// Grid height.
pub const ROWS: usize = 15;

/// Grid width.
pub const COLS: usize = 30;

/// Total number of cells.
pub const CELL_COUNT: usize = ROWS * COLS;

/// Fixed start cell.
pub const START: Pos = Pos::new(5, 5);

/// Fixed finish cell.
pub const FINISH: Pos = Pos::new(10, 25);

/// Interior wall columns and the inclusive row ranges left open in each.
const INTERIOR_WALLS: [(usize, [(usize, usize); 2]); 2] = [
    (10, [(2, 4), (10, 12)]),
    (20, [(5, 7), (11, 13)]),
];

/// Permanent role of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellKind {
    Start,
    Finish,
    Wall,
    Open,
}

impl CellKind {
    /// Start and finish keep their identity through every replay phase.
    pub fn is_fixed(&self) -> bool {
        matches!(self, CellKind::Start | CellKind::Finish)
    }
}

/// A 15×30 grid with one start, one finish and a wall layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    walls: Vec<bool>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Build the standard layout: a border box plus two gapped interior walls.
    pub fn new() -> Self {
        let mut grid = Self::empty();
        grid.apply_layout();
        grid
    }

    /// Start and finish only, no walls.
    pub fn empty() -> Self {
        Self {
            walls: vec![false; CELL_COUNT],
        }
    }

    /// Restore the standard wall layout, discarding any edits.
    pub fn reset(&mut self) {
        self.walls.fill(false);
        self.apply_layout();
    }

    fn apply_layout(&mut self) {
        for row in 0..ROWS {
            for col in 0..COLS {
                let pos = Pos::new(row, col);
                if pos == START || pos == FINISH {
                    continue;
                }
                let border = row == 0 || row == ROWS - 1 || col == 0 || col == COLS - 1;
                let interior = INTERIOR_WALLS.iter().any(|(wall_col, gaps)| {
                    col == *wall_col && !gaps.iter().any(|&(lo, hi)| (lo..=hi).contains(&row))
                });
                if border || interior {
                    self.walls[Self::index(pos)] = true;
                }
            }
        }
    }

    /// Flip a wall. Start and finish are rejected.
    pub fn toggle_wall(&mut self, pos: Pos) -> Result<bool> {
        Self::check_bounds(pos)?;
        if pos == START || pos == FINISH {
            return Err(Error::FixedCell {
                row: pos.row,
                col: pos.col,
            });
        }
        let idx = Self::index(pos);
        self.walls[idx] = !self.walls[idx];
        Ok(self.walls[idx])
    }

    pub fn kind(&self, pos: Pos) -> Result<CellKind> {
        Self::check_bounds(pos)?;
        Ok(self.kind_at(Self::index(pos)))
    }

    pub(crate) fn kind_at(&self, idx: usize) -> CellKind {
        let pos = Self::pos(idx);
        if pos == START {
            CellKind::Start
        } else if pos == FINISH {
            CellKind::Finish
        } else if self.walls[idx] {
            CellKind::Wall
        } else {
            CellKind::Open
        }
    }

    pub(crate) fn is_wall(&self, idx: usize) -> bool {
        self.walls[idx]
    }

    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, CellKind)> + '_ {
        (0..CELL_COUNT).map(move |idx| (Self::pos(idx), self.kind_at(idx)))
    }

    /// Up, down, left, right; bounds-checked, never wrapping.
    pub fn neighbors(idx: usize) -> impl Iterator<Item = usize> {
        let Pos { row, col } = Self::pos(idx);
        let up = (row > 0).then(|| idx - COLS);
        let down = (row < ROWS - 1).then(|| idx + COLS);
        let left = (col > 0).then(|| idx - 1);
        let right = (col < COLS - 1).then(|| idx + 1);
        [up, down, left, right].into_iter().flatten()
    }

    pub const fn index(pos: Pos) -> usize {
        pos.row * COLS + pos.col
    }

    pub const fn pos(idx: usize) -> Pos {
        Pos::new(idx / COLS, idx % COLS)
    }

    fn check_bounds(pos: Pos) -> Result<()> {
        if pos.row >= ROWS || pos.col >= COLS {
            return Err(Error::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        Ok(())
    }
}
