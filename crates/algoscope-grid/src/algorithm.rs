//! Search algorithm identity.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The five grid search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SearchAlgorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
    Greedy,
}

impl SearchAlgorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [SearchAlgorithm; 5] = [
        SearchAlgorithm::Bfs,
        SearchAlgorithm::Dfs,
        SearchAlgorithm::Dijkstra,
        SearchAlgorithm::AStar,
        SearchAlgorithm::Greedy,
    ];

    /// Host identifier (`bfs`, `astar`, ...).
    pub fn id(&self) -> &'static str {
        match self {
            SearchAlgorithm::Bfs => "bfs",
            SearchAlgorithm::Dfs => "dfs",
            SearchAlgorithm::Dijkstra => "dijkstra",
            SearchAlgorithm::AStar => "astar",
            SearchAlgorithm::Greedy => "greedy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchAlgorithm::Bfs => "Breadth-First Search",
            SearchAlgorithm::Dfs => "Depth-First Search",
            SearchAlgorithm::Dijkstra => "Dijkstra's Algorithm",
            SearchAlgorithm::AStar => "A* Search",
            SearchAlgorithm::Greedy => "Greedy Best-First",
        }
    }

    /// Whether the found path is guaranteed shortest on a unit-cost grid.
    pub fn is_optimal(&self) -> bool {
        matches!(
            self,
            SearchAlgorithm::Bfs | SearchAlgorithm::Dijkstra | SearchAlgorithm::AStar
        )
    }
}

impl FromStr for SearchAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidAlgorithm(s.to_string()))
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_identifiers() {
        assert_eq!("astar".parse::<SearchAlgorithm>().unwrap(), SearchAlgorithm::AStar);
        assert_eq!("GREEDY".parse::<SearchAlgorithm>().unwrap(), SearchAlgorithm::Greedy);
        for algo in SearchAlgorithm::ALL {
            assert_eq!(algo.id().parse::<SearchAlgorithm>().unwrap(), algo);
        }
    }

    #[test]
    fn rejects_unknown_identifier() {
        assert_eq!(
            "jps".parse::<SearchAlgorithm>(),
            Err(Error::InvalidAlgorithm("jps".into()))
        );
    }
}
