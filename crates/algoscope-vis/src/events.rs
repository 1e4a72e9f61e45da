//! Replay steps and the visual categories a host renders.

use algoscope_grid::{Pos, SearchOutcome, FINISH, START};
use serde::{Deserialize, Serialize};

/// Visual category of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellVisual {
    Start,
    Finish,
    Wall,
    Open,
    Visited,
    Path,
    /// Finish cell after a search that never reached it
    Unreached,
}

/// Visual category of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarVisual {
    Default,
    /// Touched by the most recent step
    Active,
    /// Final position after a completed replay
    Sorted,
}

/// Which part of a search replay a step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Visited,
    Path,
    /// Single trailing marker for an unreachable finish
    Unreachable,
}

/// One replayable pathfinding step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub seq: usize,
    pub phase: Phase,
    pub pos: Pos,
}

impl PathStep {
    /// Start and finish keep their identity through the visited and path
    /// phases. The unreachable marker is the one step allowed to restyle finish.
    pub fn is_fixed(&self) -> bool {
        self.phase != Phase::Unreachable && (self.pos == START || self.pos == FINISH)
    }
}

/// Flatten a search outcome into one ordered step list: every visited cell,
/// then every path cell, then an unreachable marker if finish was never found.
pub fn path_timeline(outcome: &SearchOutcome) -> Vec<PathStep> {
    let visited = outcome.visited.iter().map(|&pos| (Phase::Visited, pos));
    let path = outcome.path.iter().map(|&pos| (Phase::Path, pos));
    let marker = (!outcome.found).then_some((Phase::Unreachable, FINISH));

    visited
        .chain(path)
        .chain(marker)
        .enumerate()
        .map(|(seq, (phase, pos))| PathStep { seq, phase, pos })
        .collect()
}

/// Events streamed to a host alongside frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VisEvent {
    /// A replay began
    ReplayStarted { total_steps: usize },

    /// A replay applied every step
    ReplayCompleted { applied: usize },

    /// A replay stopped early on request
    ReplayCancelled { applied: usize, total_steps: usize },
}
