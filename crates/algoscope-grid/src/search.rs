//! The five search strategies.
//!
//! Each returns cell indices in the order they were visited and leaves
//! predecessor links in the [`SearchState`] for path reconstruction. Open
//! sets are re-sorted with a stable sort every iteration, so ties resolve by
//! insertion order and the visited order is reproducible.

use std::collections::VecDeque;

use crate::grid::{Grid, CELL_COUNT};
use crate::state::{SearchState, INFINITY};

/// FIFO queue; visited is marked at enqueue time.
pub fn bfs(grid: &Grid, state: &mut SearchState, start: usize, finish: usize) -> Vec<usize> {
    let mut order = Vec::new();
    let mut queue = VecDeque::from([start]);
    state[start].visited = true;

    while let Some(node) = queue.pop_front() {
        if grid.is_wall(node) {
            continue;
        }
        order.push(node);
        if node == finish {
            return order;
        }
        for next in Grid::neighbors(node) {
            if !state[next].visited && !grid.is_wall(next) {
                state[next].visited = true;
                state[next].predecessor = Some(node);
                queue.push_back(next);
            }
        }
    }
    order
}

/// LIFO stack of (node, parent); visited and predecessor assigned at pop.
///
/// Neighbors may be pushed more than once. The pop-time check discards the
/// duplicates, so only genuinely visited cells are reported.
pub fn dfs(grid: &Grid, state: &mut SearchState, start: usize, finish: usize) -> Vec<usize> {
    let mut order = Vec::new();
    let mut stack: Vec<(usize, Option<usize>)> = vec![(start, None)];

    while let Some((node, parent)) = stack.pop() {
        if state[node].visited || grid.is_wall(node) {
            continue;
        }
        state[node].visited = true;
        state[node].predecessor = parent;
        order.push(node);
        if node == finish {
            return order;
        }
        for next in Grid::neighbors(node) {
            if !state[next].visited {
                stack.push((next, Some(node)));
            }
        }
    }
    order
}

/// Unit-weight Dijkstra over every cell, re-sorting the unvisited set by
/// distance each iteration. Stops once the closest cell is unreachable.
pub fn dijkstra(grid: &Grid, state: &mut SearchState, start: usize, finish: usize) -> Vec<usize> {
    let mut order = Vec::new();
    state[start].distance = 0;
    let mut unvisited: Vec<usize> = (0..CELL_COUNT).collect();

    while !unvisited.is_empty() {
        unvisited.sort_by_key(|&idx| state[idx].distance);
        let node = unvisited.remove(0);
        if grid.is_wall(node) {
            continue;
        }
        if state[node].distance == INFINITY {
            return order;
        }
        state[node].visited = true;
        order.push(node);
        if node == finish {
            return order;
        }

        let candidate = state[node].distance + 1;
        for next in Grid::neighbors(node) {
            if !state[next].visited && !grid.is_wall(next) && candidate < state[next].distance {
                state[next].distance = candidate;
                state[next].predecessor = Some(node);
            }
        }
    }
    order
}

/// A*: f = g + Manhattan distance to finish; a neighbor is relaxed only when
/// its g-score improves.
pub fn astar(grid: &Grid, state: &mut SearchState, start: usize, finish: usize) -> Vec<usize> {
    best_first(grid, state, start, finish, Priority::CostPlusHeuristic)
}

/// Greedy best-first: ordered by the heuristic alone, ignoring path cost.
pub fn greedy(grid: &Grid, state: &mut SearchState, start: usize, finish: usize) -> Vec<usize> {
    best_first(grid, state, start, finish, Priority::HeuristicOnly)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Priority {
    CostPlusHeuristic,
    HeuristicOnly,
}

fn best_first(
    grid: &Grid,
    state: &mut SearchState,
    start: usize,
    finish: usize,
    priority: Priority,
) -> Vec<usize> {
    let target = Grid::pos(finish);
    let h = |idx: usize| -> u32 { Grid::pos(idx).manhattan(&target) };

    let mut order = Vec::new();
    state[start].distance = 0;
    state[start].score = h(start);
    let mut open = vec![start];

    while !open.is_empty() {
        open.sort_by_key(|&idx| state[idx].score);
        let node = open.remove(0);
        if state[node].visited || grid.is_wall(node) {
            continue;
        }
        state[node].visited = true;
        order.push(node);
        if node == finish {
            return order;
        }

        for next in Grid::neighbors(node) {
            if state[next].visited || grid.is_wall(next) {
                continue;
            }
            match priority {
                Priority::CostPlusHeuristic => {
                    let tentative = state[node].distance + 1;
                    if tentative >= state[next].distance {
                        continue;
                    }
                    state[next].distance = tentative;
                    state[next].score = tentative + h(next);
                }
                Priority::HeuristicOnly => {
                    state[next].score = h(next);
                }
            }
            state[next].predecessor = Some(node);
            if !open.contains(&next) {
                open.push(next);
            }
        }
    }
    order
}
