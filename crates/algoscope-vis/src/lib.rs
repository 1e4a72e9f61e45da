//! Algoscope Visualization
//!
//! Paced, cancelable replay of recorded algorithm steps.
//!
//! # Architecture
//!
//! - **Engines**: `algoscope-sort` and `algoscope-grid` compute a full step
//!   list synchronously; nothing suspends during computation
//! - **Replay**: [`Replayer`] walks the list at a per-step delay, polling a
//!   cancel flag before every step, with at most one replay per surface
//! - **Surfaces**: [`BarFrame`] and [`GridFrame`] hold the visual state a host
//!   draws
//! - **Sessions**: [`SortSession`] and [`PathSession`] tie config, engine and
//!   replayer together and stop the replay before any state change
//!
//! # Usage
//!
//! ```ignore
//! let mut session = SortSession::new(SortConfig::from_env())?;
//! session.set_algorithm(SortAlgorithm::Quick);
//! session.start().await;
//! session.set_speed(90)?;   // applies from the next step
//! session.wait().await;
//! ```

mod config;
mod error;
mod events;
mod replay;
mod session;
mod surface;

pub use config::{
    sort_delay, validate_speed, ReplayConfig, SortConfig, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED,
};
pub use error::{Error, Result};
pub use events::{path_timeline, BarVisual, CellVisual, PathStep, Phase, VisEvent};
pub use replay::{replay, CancelFlag, ReplayOutcome, Replayer, Step};
pub use session::{PathSession, SortSession};
pub use surface::{BarFrame, GridFrame, Surface};

#[cfg(test)]
mod tests {
    use super::*;
    use algoscope_grid::{Grid, SearchAlgorithm, FINISH};
    use algoscope_sort::{SortAlgorithm, SortStep};
    use std::time::Duration;
    use tokio::sync::Mutex;

    /// Bar surface that raises the cancel flag once it has drawn `k` steps.
    struct CancelAfter {
        frame: BarFrame,
        k: usize,
        flag: CancelFlag,
    }

    impl Surface<SortStep> for CancelAfter {
        fn apply(&mut self, step: &SortStep) {
            self.frame.apply(step);
            if self.frame.applied == self.k {
                self.flag.cancel();
            }
        }

        fn finish(&mut self) {
            self.frame.finish();
        }
    }

    #[tokio::test]
    async fn cancelled_sort_replay_shows_exactly_step_k() {
        let input = [9, 8, 7, 6, 5, 4, 3, 2, 1];
        let run = algoscope_sort::run(&input, SortAlgorithm::Bubble);

        for k in [1, 5, run.steps.len() - 1] {
            let flag = CancelFlag::new();
            let surface = Mutex::new(CancelAfter {
                frame: BarFrame::new(&input),
                k,
                flag: flag.clone(),
            });

            let pace = |_: &SortStep| Duration::from_millis(1);
            let outcome = replay(&run.steps, &surface, pace, &flag).await;

            let surface = surface.lock().await;
            assert_eq!(outcome, ReplayOutcome::Cancelled { applied: k });
            assert_eq!(surface.frame, BarFrame::from_steps(&input, &run.steps, k));
            assert_eq!(surface.frame.values, run.steps[k - 1].values);
            assert!(!surface.frame.sorted);
        }
    }

    #[tokio::test]
    async fn path_replay_never_restyles_start_or_finish() {
        let grid = Grid::new();
        for algo in SearchAlgorithm::ALL {
            let outcome = algoscope_grid::run(&grid, algo);
            let steps = path_timeline(&outcome);
            let mut replayer = Replayer::new(GridFrame::new(&grid));

            replayer.start(steps, |_: &PathStep| Duration::ZERO).await;
            replayer.wait().await;

            let frame = replayer.surface();
            let frame = frame.lock().await;
            assert_eq!(frame.count(CellVisual::Start), 1, "{}", algo);
            assert_eq!(frame.visual(FINISH), Some(CellVisual::Finish), "{}", algo);
        }
    }

    #[tokio::test]
    async fn restart_reports_cancel_before_new_start() {
        let grid = Grid::new();
        let mut replayer = Replayer::new(GridFrame::new(&grid));
        let mut events = replayer.subscribe();

        let dfs = path_timeline(&algoscope_grid::run(&grid, SearchAlgorithm::Dfs));
        replayer.start(dfs.clone(), |_: &PathStep| Duration::from_millis(2)).await;
        tokio::time::sleep(Duration::from_millis(15)).await;

        let bfs = path_timeline(&algoscope_grid::run(&grid, SearchAlgorithm::Bfs));
        let previous = replayer.start(bfs.clone(), |_: &PathStep| Duration::ZERO).await;
        replayer.wait().await;

        assert!(previous.is_some_and(|o| o.is_cancelled()));
        assert!(matches!(events.recv().await, Ok(VisEvent::ReplayStarted { .. })));
        assert!(matches!(events.recv().await, Ok(VisEvent::ReplayCancelled { .. })));
        assert!(matches!(events.recv().await, Ok(VisEvent::ReplayStarted { .. })));
        assert!(matches!(events.recv().await, Ok(VisEvent::ReplayCompleted { .. })));
    }

    #[test]
    fn sessions_run_on_a_test_runtime() {
        let mut session = PathSession::new(ReplayConfig::immediate());
        session.set_algorithm(SearchAlgorithm::Dijkstra);

        let outcome = tokio_test::block_on(async {
            let outcome = session.start().await;
            session.wait().await;
            outcome
        });

        assert!(outcome.found);
        tokio_test::assert_ok!(SortConfig::default().validate());
    }
}
