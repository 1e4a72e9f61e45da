//! Per-run transient search state.
//!
//! Allocated fresh for every run, so nothing leaks between runs and the grid
//! itself stays immutable during a search.

use std::ops::{Index, IndexMut};

use crate::grid::CELL_COUNT;

/// Sentinel for "not yet reached".
pub const INFINITY: u32 = u32::MAX;

/// Transient fields for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeState {
    /// Accumulated cost from start (g-score)
    pub distance: u32,
    pub visited: bool,
    /// Index of the cell that discovered this one
    pub predecessor: Option<usize>,
    /// Open-set priority (f-score or heuristic)
    pub score: u32,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            distance: INFINITY,
            visited: false,
            predecessor: None,
            score: INFINITY,
        }
    }
}

/// Search state for every cell, indexed like the grid arena.
#[derive(Debug, Clone)]
pub struct SearchState {
    nodes: Vec<NodeState>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeState::default(); CELL_COUNT],
        }
    }

    /// Walk predecessor links back from `finish`, returning start→finish order.
    ///
    /// An unreached finish has no predecessor and yields just itself.
    pub fn reconstruct(&self, finish: usize) -> Vec<usize> {
        let mut path = vec![finish];
        let mut current = finish;
        while let Some(prev) = self.nodes[current].predecessor {
            // Predecessor links form a tree; the bound only guards corrupt state.
            if path.len() > CELL_COUNT {
                break;
            }
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}

impl Index<usize> for SearchState {
    type Output = NodeState;

    fn index(&self, idx: usize) -> &NodeState {
        &self.nodes[idx]
    }
}

impl IndexMut<usize> for SearchState {
    fn index_mut(&mut self, idx: usize) -> &mut NodeState {
        &mut self.nodes[idx]
    }
}
