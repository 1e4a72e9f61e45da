//! Rendering surfaces.
//!
//! A surface is whatever the host draws into. The replay scheduler only ever
//! calls [`Surface::apply`] and [`Surface::finish`]; [`BarFrame`] and
//! [`GridFrame`] are in-memory surfaces that track the visual state a host
//! would show, and can render it as text.

use algoscope_grid::{CellKind, Grid, Pos, COLS, ROWS};
use algoscope_sort::SortStep;
use serde::{Deserialize, Serialize};

use crate::events::{BarVisual, CellVisual, PathStep, Phase};

/// Something a replay can draw steps into.
pub trait Surface<S>: Send + 'static {
    fn apply(&mut self, step: &S);

    /// Called once after the last step of a replay that was not cancelled.
    fn finish(&mut self) {}
}

/// Bar chart state for sort replays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarFrame {
    pub values: Vec<u32>,
    pub active: Vec<usize>,
    pub sorted: bool,
    /// Steps applied since the last load
    pub applied: usize,
}

impl BarFrame {
    pub fn new(values: &[u32]) -> Self {
        let mut frame = Self::default();
        frame.load(values);
        frame
    }

    /// Show a fresh array, clearing highlights.
    pub fn load(&mut self, values: &[u32]) {
        self.values = values.to_vec();
        self.active.clear();
        self.sorted = false;
        self.applied = 0;
    }

    /// Rebuild the frame as it looks after the first `up_to` steps.
    pub fn from_steps(input: &[u32], steps: &[SortStep], up_to: usize) -> Self {
        let mut frame = Self::new(input);
        for step in steps.iter().take(up_to) {
            frame.apply(step);
        }
        frame
    }

    pub fn visual(&self, index: usize) -> BarVisual {
        if self.sorted {
            BarVisual::Sorted
        } else if self.active.contains(&index) {
            BarVisual::Active
        } else {
            BarVisual::Default
        }
    }

    /// One line per bar, scaled to `width` columns against `max`.
    pub fn render_text(&self, max: u32, width: usize) -> String {
        let mut out = String::new();
        for (i, &value) in self.values.iter().enumerate() {
            let len = if max == 0 {
                0
            } else {
                (value as usize * width) / max as usize
            };
            let glyph = match self.visual(i) {
                BarVisual::Default => '█',
                BarVisual::Active => '▓',
                BarVisual::Sorted => '▒',
            };
            out.extend(std::iter::repeat(glyph).take(len.max(1)));
            out.push_str(&format!(" {}\n", value));
        }
        out
    }
}

impl Surface<SortStep> for BarFrame {
    fn apply(&mut self, step: &SortStep) {
        self.values.clone_from(&step.values);
        self.active = step.op.positions();
        self.applied += 1;
    }

    fn finish(&mut self) {
        self.active.clear();
        self.sorted = true;
    }
}

/// Cell visuals for pathfinding replays, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridFrame {
    pub cells: Vec<CellVisual>,
    pub applied: usize,
}

impl GridFrame {
    pub fn new(grid: &Grid) -> Self {
        let mut frame = Self {
            cells: Vec::with_capacity(ROWS * COLS),
            applied: 0,
        };
        frame.load(grid);
        frame
    }

    /// Show the grid's permanent layout, clearing any search visuals.
    pub fn load(&mut self, grid: &Grid) {
        self.cells = grid
            .cells()
            .map(|(_, kind)| match kind {
                CellKind::Start => CellVisual::Start,
                CellKind::Finish => CellVisual::Finish,
                CellKind::Wall => CellVisual::Wall,
                CellKind::Open => CellVisual::Open,
            })
            .collect();
        self.applied = 0;
    }

    /// Rebuild the frame as it looks after the first `up_to` steps.
    pub fn from_steps(grid: &Grid, steps: &[PathStep], up_to: usize) -> Self {
        let mut frame = Self::new(grid);
        for step in steps.iter().take(up_to).filter(|s| !s.is_fixed()) {
            frame.apply(step);
        }
        frame
    }

    pub fn visual(&self, pos: Pos) -> Option<CellVisual> {
        if pos.row >= ROWS || pos.col >= COLS {
            return None;
        }
        self.cells.get(Grid::index(pos)).copied()
    }

    pub fn count(&self, visual: CellVisual) -> usize {
        self.cells.iter().filter(|&&c| c == visual).count()
    }

    pub fn render_text(&self) -> String {
        let mut out = String::with_capacity((COLS + 1) * ROWS);
        for row in self.cells.chunks(COLS) {
            for cell in row {
                out.push(match cell {
                    CellVisual::Start => 'S',
                    CellVisual::Finish => 'F',
                    CellVisual::Wall => '#',
                    CellVisual::Open => ' ',
                    CellVisual::Visited => '.',
                    CellVisual::Path => '*',
                    CellVisual::Unreached => 'X',
                });
            }
            out.push('\n');
        }
        out
    }
}

impl Surface<PathStep> for GridFrame {
    fn apply(&mut self, step: &PathStep) {
        let visual = match step.phase {
            Phase::Visited => CellVisual::Visited,
            Phase::Path => CellVisual::Path,
            Phase::Unreachable => CellVisual::Unreached,
        };
        if let Some(cell) = self.cells.get_mut(Grid::index(step.pos)) {
            *cell = visual;
        }
        self.applied += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoscope_grid::{run, SearchAlgorithm, FINISH, START};
    use algoscope_sort::SortAlgorithm;

    use crate::events::path_timeline;

    #[test]
    fn bar_frame_tracks_active_positions() {
        let run = algoscope_sort::run(&[3, 1, 2], SortAlgorithm::Bubble);
        let mut frame = BarFrame::new(&run.input);

        frame.apply(&run.steps[0]);
        assert_eq!(frame.values, vec![1, 3, 2]);
        assert_eq!(frame.visual(0), BarVisual::Active);
        assert_eq!(frame.visual(2), BarVisual::Default);

        frame.finish();
        assert_eq!(frame.visual(0), BarVisual::Sorted);
    }

    #[test]
    fn bar_frame_rebuilds_from_prefix() {
        let run = algoscope_sort::run(&[4, 3, 2, 1], SortAlgorithm::Insertion);
        let frame = BarFrame::from_steps(&run.input, &run.steps, 2);
        assert_eq!(frame.values, run.steps[1].values);
        assert_eq!(frame.applied, 2);

        let untouched = BarFrame::from_steps(&run.input, &run.steps, 0);
        assert_eq!(untouched.values, run.input);
    }

    #[test]
    fn grid_frame_starts_from_layout() {
        let frame = GridFrame::new(&Grid::new());
        assert_eq!(frame.visual(START), Some(CellVisual::Start));
        assert_eq!(frame.visual(FINISH), Some(CellVisual::Finish));
        assert_eq!(frame.visual(Pos::new(0, 0)), Some(CellVisual::Wall));
        assert_eq!(frame.visual(Pos::new(ROWS, 0)), None);
        assert_eq!(frame.count(CellVisual::Wall), Grid::new().wall_count());
    }

    #[test]
    fn grid_frame_replayed_in_full_shows_path() {
        let grid = Grid::new();
        let outcome = run(&grid, SearchAlgorithm::Bfs);
        let steps = path_timeline(&outcome);

        let frame = GridFrame::from_steps(&grid, &steps, steps.len());

        assert_eq!(frame.visual(START), Some(CellVisual::Start));
        assert_eq!(frame.visual(FINISH), Some(CellVisual::Finish));
        assert_eq!(frame.count(CellVisual::Path), outcome.path.len() - 2);
        let text = frame.render_text();
        assert_eq!(text.lines().count(), ROWS);
        assert!(text.contains('*'));
    }

    #[test]
    fn render_bars_scales_to_width() {
        let frame = BarFrame::new(&[100, 400]);
        let text = frame.render_text(400, 8);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0].chars().filter(|&c| c == '█').count(), 2);
        assert_eq!(lines[1].chars().filter(|&c| c == '█').count(), 8);
    }
}
