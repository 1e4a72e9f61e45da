//! Visualizer sessions: the state a host component owns between commands.
//!
//! Every command that changes the underlying data (a new array, a grid edit,
//! a new run) first stops the active replay and waits for it, so a replay
//! never writes into state that has moved on.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use algoscope_grid::{Grid, Pos, SearchAlgorithm, SearchOutcome};
use algoscope_sort::{generate_array, SortAlgorithm, SortRun, SortStep};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{broadcast, Mutex};
use tracing::info;

use crate::config::{sort_delay, validate_speed, ReplayConfig, SortConfig};
use crate::error::Result;
use crate::events::{path_timeline, Phase, PathStep, VisEvent};
use crate::replay::{ReplayOutcome, Replayer};
use crate::surface::{BarFrame, GridFrame};

/// Sorting visualizer state.
pub struct SortSession {
    config: SortConfig,
    rng: StdRng,
    algorithm: SortAlgorithm,
    /// Read by the replay before every step, so slider moves apply mid-run.
    speed: Arc<AtomicU32>,
    replayer: Replayer<SortStep, BarFrame>,
}

impl SortSession {
    pub fn new(config: SortConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let values = generate_array(config.size, config.min, config.max, &mut rng)?;
        Ok(Self {
            speed: Arc::new(AtomicU32::new(config.speed)),
            config,
            rng,
            algorithm: SortAlgorithm::Bubble,
            replayer: Replayer::new(BarFrame::new(&values)),
        })
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    pub fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    /// Takes effect on the next [`Self::start`].
    pub fn set_algorithm(&mut self, algorithm: SortAlgorithm) {
        self.algorithm = algorithm;
    }

    pub fn speed(&self) -> u32 {
        self.speed.load(Ordering::Relaxed)
    }

    /// Change the speed slider; an active replay picks it up on its next step.
    pub fn set_speed(&self, speed: u32) -> Result<()> {
        validate_speed(speed)?;
        self.speed.store(speed, Ordering::Relaxed);
        Ok(())
    }

    /// The array as currently displayed.
    pub async fn values(&self) -> Vec<u32> {
        self.replayer.surface().lock().await.values.clone()
    }

    /// Stop any replay and show a fresh random array.
    pub async fn regenerate(&mut self) -> Result<Vec<u32>> {
        let SortConfig { size, min, max, .. } = self.config;
        let values = generate_array(size, min, max, &mut self.rng)?;
        self.replayer.reset_surface(|frame| frame.load(&values)).await;
        info!(size = values.len(), "array regenerated");
        Ok(values)
    }

    /// Sort the displayed array and start replaying the recorded steps.
    ///
    /// Any active replay is cancelled first, so the sort starts from
    /// whatever state that replay left on screen.
    pub async fn start(&mut self) -> SortRun {
        let values = self
            .replayer
            .reset_surface(|frame| {
                let values = frame.values.clone();
                frame.load(&values);
                values
            })
            .await;

        let run = algoscope_sort::run(&values, self.algorithm);
        info!(
            algorithm = self.algorithm.id(),
            steps = run.steps.len(),
            "sort replay starting"
        );

        let speed = Arc::clone(&self.speed);
        self.replayer
            .start(run.steps.clone(), move |_: &SortStep| {
                sort_delay(speed.load(Ordering::Relaxed))
            })
            .await;
        run
    }

    pub async fn stop(&mut self) -> Option<ReplayOutcome> {
        self.replayer.stop().await
    }

    pub async fn wait(&mut self) -> Option<ReplayOutcome> {
        self.replayer.wait().await
    }

    pub fn is_replaying(&self) -> bool {
        self.replayer.is_active()
    }

    pub fn surface(&self) -> Arc<Mutex<BarFrame>> {
        self.replayer.surface()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<VisEvent> {
        self.replayer.subscribe()
    }

    pub fn replayer(&self) -> &Replayer<SortStep, BarFrame> {
        &self.replayer
    }
}

/// Pathfinding visualizer state.
pub struct PathSession {
    grid: Grid,
    algorithm: SearchAlgorithm,
    config: ReplayConfig,
    replayer: Replayer<PathStep, GridFrame>,
}

impl PathSession {
    pub fn new(config: ReplayConfig) -> Self {
        let grid = Grid::new();
        Self {
            replayer: Replayer::new(GridFrame::new(&grid)),
            grid,
            algorithm: SearchAlgorithm::Bfs,
            config,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn algorithm(&self) -> SearchAlgorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: SearchAlgorithm) {
        self.algorithm = algorithm;
    }

    /// Search the current grid and replay visited cells, then the path.
    pub async fn start(&mut self) -> SearchOutcome {
        let grid = &self.grid;
        self.replayer.reset_surface(|frame| frame.load(grid)).await;

        let outcome = algoscope_grid::run(&self.grid, self.algorithm);
        let steps = path_timeline(&outcome);
        info!(
            algorithm = self.algorithm.id(),
            visited = outcome.visited.len(),
            path = outcome.path.len(),
            found = outcome.found,
            "path replay starting"
        );

        let ReplayConfig {
            visit_delay,
            path_delay,
        } = self.config;
        self.replayer
            .start(steps, move |step: &PathStep| match step.phase {
                Phase::Visited => visit_delay,
                Phase::Path | Phase::Unreachable => path_delay,
            })
            .await;
        outcome
    }

    /// Stop any replay, then flip a wall. Start and finish are rejected.
    pub async fn toggle_wall(&mut self, pos: Pos) -> Result<bool> {
        self.replayer.stop().await;
        let is_wall = self.grid.toggle_wall(pos)?;
        let grid = &self.grid;
        self.replayer.reset_surface(|frame| frame.load(grid)).await;
        Ok(is_wall)
    }

    /// Stop any replay and restore the fixed layout.
    pub async fn reset(&mut self) {
        self.replayer.stop().await;
        self.grid.reset();
        let grid = &self.grid;
        self.replayer.reset_surface(|frame| frame.load(grid)).await;
    }

    pub async fn stop(&mut self) -> Option<ReplayOutcome> {
        self.replayer.stop().await
    }

    pub async fn wait(&mut self) -> Option<ReplayOutcome> {
        self.replayer.wait().await
    }

    pub fn is_replaying(&self) -> bool {
        self.replayer.is_active()
    }

    pub fn surface(&self) -> Arc<Mutex<GridFrame>> {
        self.replayer.surface()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<VisEvent> {
        self.replayer.subscribe()
    }

    pub fn replayer(&self) -> &Replayer<PathStep, GridFrame> {
        &self.replayer
    }
}
