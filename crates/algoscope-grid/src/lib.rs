//! Algoscope Grid Pathfinding
//!
//! A fixed 15×30 grid with one start, one finish and a deterministic wall
//! layout, searched by five replayable strategies.
//!
//! # Layout
//!
//! Start sits at (5, 5) and finish at (10, 25). Border cells are walls, and
//! two interior wall columns are punched with gaps:
//!
//! - column 10, open at rows 2..=4 and 10..=12
//! - column 20, open at rows 5..=7 and 11..=13
//!
//! The gaps guarantee a route from start to finish.
//!
//! # Arena
//!
//! Cells live in a flat row-major arena. Transient search fields (distance,
//! visited, predecessor, score) are kept in a separate [`SearchState`]
//! allocated per run, and predecessors are arena indices, so a run can never
//! leak state into the next one.
//!
//! # Usage
//!
//! ```
//! use algoscope_grid::{run, Grid, SearchAlgorithm, FINISH, START};
//!
//! let grid = Grid::new();
//! let outcome = run(&grid, SearchAlgorithm::Bfs);
//! assert!(outcome.found);
//! assert_eq!(outcome.path.first(), Some(&START));
//! assert_eq!(outcome.path.last(), Some(&FINISH));
//! ```

mod algorithm;
mod error;
mod grid;
mod pos;
mod search;
mod state;

pub use algorithm::SearchAlgorithm;
pub use error::{Error, Result};
pub use grid::{CellKind, Grid, CELL_COUNT, COLS, FINISH, ROWS, START};
pub use pos::Pos;
pub use state::{NodeState, SearchState, INFINITY};

/// Visited order and reconstructed path for one search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub algorithm: SearchAlgorithm,
    /// Cells in the order they became visited
    pub visited: Vec<Pos>,
    /// Start→finish path, or just the finish when it was never reached
    pub path: Vec<Pos>,
    pub found: bool,
}

impl SearchOutcome {
    /// Number of moves along the path (cells minus one).
    pub fn path_len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Run `algorithm` from [`START`] to [`FINISH`] on a fresh search state.
pub fn run(grid: &Grid, algorithm: SearchAlgorithm) -> SearchOutcome {
    let mut state = SearchState::new();
    run_with_state(grid, algorithm, &mut state)
}

/// Run against a caller-supplied state, for inspecting distances afterwards.
///
/// The state is reset before the search starts.
pub fn run_with_state(
    grid: &Grid,
    algorithm: SearchAlgorithm,
    state: &mut SearchState,
) -> SearchOutcome {
    *state = SearchState::new();
    let start = Grid::index(START);
    let finish = Grid::index(FINISH);

    let visited = match algorithm {
        SearchAlgorithm::Bfs => search::bfs(grid, state, start, finish),
        SearchAlgorithm::Dfs => search::dfs(grid, state, start, finish),
        SearchAlgorithm::Dijkstra => search::dijkstra(grid, state, start, finish),
        SearchAlgorithm::AStar => search::astar(grid, state, start, finish),
        SearchAlgorithm::Greedy => search::greedy(grid, state, start, finish),
    };

    let found = visited.last() == Some(&finish);
    let path = state.reconstruct(finish);

    tracing::debug!(
        algorithm = algorithm.id(),
        visited = visited.len(),
        path = path.len(),
        found,
        "search recorded"
    );

    SearchOutcome {
        algorithm,
        visited: visited.into_iter().map(Grid::pos).collect(),
        path: path.into_iter().map(Grid::pos).collect(),
        found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Reference hop distances from start, computed independently.
    fn hop_distances(grid: &Grid) -> Vec<Option<usize>> {
        let mut dist = vec![None; CELL_COUNT];
        let start = Grid::index(START);
        dist[start] = Some(0);
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            for next in Grid::neighbors(node) {
                if dist[next].is_none() && !grid.is_wall(next) {
                    dist[next] = dist[node].map(|d| d + 1);
                    queue.push_back(next);
                }
            }
        }
        dist
    }

    fn assert_valid_path(grid: &Grid, outcome: &SearchOutcome) {
        assert_eq!(outcome.path.first(), Some(&START));
        assert_eq!(outcome.path.last(), Some(&FINISH));
        for pair in outcome.path.windows(2) {
            assert_eq!(pair[0].manhattan(&pair[1]), 1, "{} path jumps", outcome.algorithm);
        }
        for pos in &outcome.path {
            assert_ne!(grid.kind(*pos).unwrap(), CellKind::Wall);
        }
    }

    fn sealed_finish() -> Grid {
        let mut grid = Grid::empty();
        for pos in [Pos::new(9, 25), Pos::new(11, 25), Pos::new(10, 24), Pos::new(10, 26)] {
            grid.toggle_wall(pos).unwrap();
        }
        grid
    }

    #[test]
    fn fixed_layout_is_connected() {
        let grid = Grid::new();
        assert!(hop_distances(&grid)[Grid::index(FINISH)].is_some());
        assert!(run(&grid, SearchAlgorithm::Bfs).found);
    }

    #[test]
    fn every_algorithm_finds_a_valid_path() {
        let grid = Grid::new();
        for algo in SearchAlgorithm::ALL {
            let outcome = run(&grid, algo);
            assert!(outcome.found, "{} did not reach finish", algo);
            assert_eq!(outcome.visited.first(), Some(&START));
            assert_eq!(outcome.visited.last(), Some(&FINISH));
            assert_valid_path(&grid, &outcome);
        }
    }

    #[test]
    fn bfs_visits_in_nondecreasing_hop_distance() {
        let grid = Grid::new();
        let dist = hop_distances(&grid);
        let outcome = run(&grid, SearchAlgorithm::Bfs);

        let hops: Vec<usize> = outcome
            .visited
            .iter()
            .map(|pos| dist[Grid::index(*pos)].unwrap())
            .collect();
        assert!(hops.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn optimal_searches_agree_on_path_length() {
        let grid = Grid::new();
        let shortest = hop_distances(&grid)[Grid::index(FINISH)].unwrap();

        for algo in SearchAlgorithm::ALL.into_iter().filter(|a| a.is_optimal()) {
            assert_eq!(run(&grid, algo).path_len(), shortest, "{} not shortest", algo);
        }
    }

    #[test]
    fn non_optimal_searches_never_beat_bfs() {
        let grid = Grid::new();
        let bfs = run(&grid, SearchAlgorithm::Bfs).path_len();
        assert!(run(&grid, SearchAlgorithm::Dfs).path_len() >= bfs);
        assert!(run(&grid, SearchAlgorithm::Greedy).path_len() >= bfs);
    }

    #[test]
    fn dfs_explores_last_pushed_neighbor_first() {
        // Neighbors are pushed up, down, left, right; right pops first.
        let outcome = run(&Grid::new(), SearchAlgorithm::Dfs);
        assert_eq!(outcome.visited[1], Pos::new(5, 6));
    }

    #[test]
    fn visited_cells_are_unique_and_open() {
        let grid = Grid::new();
        for algo in SearchAlgorithm::ALL {
            let outcome = run(&grid, algo);
            let mut seen = std::collections::HashSet::new();
            for pos in &outcome.visited {
                assert!(seen.insert(*pos), "{} visited {} twice", algo, pos);
                assert_ne!(grid.kind(*pos).unwrap(), CellKind::Wall);
            }
        }
    }

    #[test]
    fn unreachable_finish_yields_degenerate_path() {
        let grid = sealed_finish();
        for algo in SearchAlgorithm::ALL {
            let outcome = run(&grid, algo);
            assert!(!outcome.found, "{} claims to reach a sealed finish", algo);
            assert_eq!(outcome.path, vec![FINISH]);
            assert_eq!(outcome.path_len(), 0);
            assert!(outcome.visited.len() <= CELL_COUNT);
        }
    }

    #[test]
    fn repeated_runs_do_not_leak_state() {
        let grid = Grid::new();
        for algo in SearchAlgorithm::ALL {
            assert_eq!(run(&grid, algo), run(&grid, algo));
        }

        let mut state = SearchState::new();
        let first = run_with_state(&grid, SearchAlgorithm::AStar, &mut state);
        let second = run_with_state(&grid, SearchAlgorithm::AStar, &mut state);
        assert_eq!(first, second);
        assert_eq!(state[Grid::index(START)].distance, 0);
    }

    proptest::proptest! {
        #[test]
        fn random_walls_never_break_termination_or_optimality(
            walls in proptest::collection::vec((1usize..ROWS - 1, 1usize..COLS - 1), 0..120)
        ) {
            let mut grid = Grid::new();
            for (row, col) in walls {
                // Start/finish toggles are rejected; that is fine here.
                let _ = grid.toggle_wall(Pos::new(row, col));
            }
            let shortest = hop_distances(&grid)[Grid::index(FINISH)];

            for algo in SearchAlgorithm::ALL {
                let outcome = run(&grid, algo);
                proptest::prop_assert!(outcome.visited.len() <= CELL_COUNT);
                proptest::prop_assert_eq!(outcome.found, shortest.is_some());
                if let (true, Some(shortest)) = (algo.is_optimal(), shortest) {
                    proptest::prop_assert_eq!(outcome.path_len(), shortest);
                }
            }
        }
    }

    #[test]
    fn informed_searches_visit_less_than_bfs() {
        let grid = Grid::empty();
        let bfs = run(&grid, SearchAlgorithm::Bfs).visited.len();
        assert!(run(&grid, SearchAlgorithm::AStar).visited.len() < bfs);
        assert!(run(&grid, SearchAlgorithm::Greedy).visited.len() < bfs);
    }
}
