//! Cancelable, paced replay of recorded steps.
//!
//! Computation is finished before replay starts; replay is the only part that
//! suspends, once per step, for the step's delay. Cancellation is cooperative:
//! a shared flag is polled before every step, and an in-flight wait still
//! runs to completion before the replay notices and returns.
//!
//! A [`Replayer`] owns the rendering surface and allows at most one replay at
//! a time. Starting a new replay first cancels the active one and waits for
//! its task to finish, so two replays never write to the same surface.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use algoscope_sort::SortStep;
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::events::{PathStep, VisEvent};
use crate::surface::Surface;

/// A replayable unit of progress.
pub trait Step: Send + Sync + 'static {
    /// Fixed steps still consume their delay but are never drawn.
    fn is_fixed(&self) -> bool {
        false
    }
}

impl Step for SortStep {}

impl Step for PathStep {
    fn is_fixed(&self) -> bool {
        PathStep::is_fixed(self)
    }
}

/// Shared cancellation flag, cloned between the host and the replay task.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// How a replay ended. `applied` counts steps consumed, fixed ones included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReplayOutcome {
    Completed { applied: usize },
    Cancelled { applied: usize },
}

impl ReplayOutcome {
    pub fn applied(&self) -> usize {
        match *self {
            ReplayOutcome::Completed { applied } | ReplayOutcome::Cancelled { applied } => applied,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ReplayOutcome::Cancelled { .. })
    }
}

/// Apply `steps` to `surface` one at a time, sleeping `delay(step)` after each.
///
/// Returns without error as soon as `cancel` is observed; the surface keeps
/// the state of the last applied step.
pub async fn replay<S, F, D>(
    steps: &[S],
    surface: &Mutex<F>,
    delay: D,
    cancel: &CancelFlag,
) -> ReplayOutcome
where
    S: Step,
    F: Surface<S>,
    D: Fn(&S) -> Duration,
{
    for (applied, step) in steps.iter().enumerate() {
        if cancel.is_cancelled() {
            return ReplayOutcome::Cancelled { applied };
        }
        if !step.is_fixed() {
            surface.lock().await.apply(step);
        }
        let wait = delay(step);
        if wait.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(wait).await;
        }
    }

    if cancel.is_cancelled() {
        return ReplayOutcome::Cancelled {
            applied: steps.len(),
        };
    }
    surface.lock().await.finish();
    ReplayOutcome::Completed {
        applied: steps.len(),
    }
}

struct ActiveReplay {
    cancel: CancelFlag,
    handle: JoinHandle<ReplayOutcome>,
}

/// Owns a surface and runs at most one replay against it.
pub struct Replayer<S, F> {
    surface: Arc<Mutex<F>>,
    active: Option<ActiveReplay>,
    events: broadcast::Sender<VisEvent>,
    _step: PhantomData<fn(S)>,
}

impl<S, F> Replayer<S, F>
where
    S: Step,
    F: Surface<S>,
{
    pub fn new(surface: F) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            surface: Arc::new(Mutex::new(surface)),
            active: None,
            events,
            _step: PhantomData,
        }
    }

    /// Shared handle to the surface, for reading the current frame.
    pub fn surface(&self) -> Arc<Mutex<F>> {
        Arc::clone(&self.surface)
    }

    /// Replay lifecycle events.
    pub fn subscribe(&self) -> broadcast::Receiver<VisEvent> {
        self.events.subscribe()
    }

    /// Whether a replay task is still running.
    pub fn is_active(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| !active.handle.is_finished())
    }

    /// The active replay's flag, for cancelling from outside an async context.
    pub fn cancel_flag(&self) -> Option<CancelFlag> {
        self.active.as_ref().map(|active| active.cancel.clone())
    }

    /// Request cancellation without waiting for the task to stop.
    pub fn cancel(&self) {
        if let Some(active) = &self.active {
            active.cancel.cancel();
        }
    }

    /// Start replaying `steps`. Any active replay is cancelled and awaited
    /// first; its outcome is returned.
    pub async fn start<D>(&mut self, steps: Vec<S>, delay: D) -> Option<ReplayOutcome>
    where
        D: Fn(&S) -> Duration + Send + 'static,
    {
        let previous = self.stop().await;

        let cancel = CancelFlag::new();
        let surface = Arc::clone(&self.surface);
        let events = self.events.clone();
        let task_cancel = cancel.clone();
        let total_steps = steps.len();

        info!(total_steps, "replay started");
        let _ = events.send(VisEvent::ReplayStarted { total_steps });

        let handle = tokio::spawn(async move {
            let outcome = replay(&steps, &surface, delay, &task_cancel).await;
            let event = match outcome {
                ReplayOutcome::Completed { applied } => {
                    info!(applied, "replay completed");
                    VisEvent::ReplayCompleted { applied }
                }
                ReplayOutcome::Cancelled { applied } => {
                    info!(applied, total_steps, "replay cancelled");
                    VisEvent::ReplayCancelled {
                        applied,
                        total_steps,
                    }
                }
            };
            let _ = events.send(event);
            outcome
        });

        self.active = Some(ActiveReplay { cancel, handle });
        previous
    }

    /// Cancel the active replay and wait until it has observably stopped.
    pub async fn stop(&mut self) -> Option<ReplayOutcome> {
        let active = self.active.take()?;
        active.cancel.cancel();
        Self::join(active.handle).await
    }

    /// Wait for the active replay to finish on its own.
    pub async fn wait(&mut self) -> Option<ReplayOutcome> {
        let active = self.active.take()?;
        Self::join(active.handle).await
    }

    /// Stop any replay, then mutate the surface (e.g. load a new array).
    pub async fn reset_surface<R>(&mut self, f: impl FnOnce(&mut F) -> R) -> R {
        if let Some(outcome) = self.stop().await {
            debug!(?outcome, "replay stopped before surface reset");
        }
        let mut surface = self.surface.lock().await;
        f(&mut *surface)
    }

    async fn join(handle: JoinHandle<ReplayOutcome>) -> Option<ReplayOutcome> {
        match handle.await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                warn!("replay task failed: {}", e);
                None
            }
        }
    }
}

impl<S, F> Drop for Replayer<S, F> {
    fn drop(&mut self) {
        if let Some(active) = &self.active {
            active.cancel.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A step tagged with the replay it belongs to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Tagged {
        run: u8,
        seq: usize,
        fixed: bool,
    }

    impl Step for Tagged {
        fn is_fixed(&self) -> bool {
            self.fixed
        }
    }

    fn tagged(run: u8, count: usize) -> Vec<Tagged> {
        (0..count)
            .map(|seq| Tagged {
                run,
                seq,
                fixed: false,
            })
            .collect()
    }

    /// Logs every applied step; optionally cancels itself after `cancel_after`.
    #[derive(Default)]
    struct Probe {
        log: Vec<Tagged>,
        finished: bool,
        cancel_after: Option<(usize, CancelFlag)>,
    }

    impl Surface<Tagged> for Probe {
        fn apply(&mut self, step: &Tagged) {
            self.log.push(*step);
            if let Some((k, flag)) = &self.cancel_after {
                if self.log.len() == *k {
                    flag.cancel();
                }
            }
        }

        fn finish(&mut self) {
            self.finished = true;
        }
    }

    fn no_delay(_: &Tagged) -> Duration {
        Duration::ZERO
    }

    #[tokio::test]
    async fn replay_applies_every_step_in_order() {
        let surface = Mutex::new(Probe::default());
        let steps = tagged(0, 10);

        let outcome = replay(&steps, &surface, no_delay, &CancelFlag::new()).await;

        assert_eq!(outcome, ReplayOutcome::Completed { applied: 10 });
        let probe = surface.lock().await;
        assert_eq!(probe.log, steps);
        assert!(probe.finished);
    }

    #[tokio::test]
    async fn cancel_after_k_leaves_state_of_step_k() {
        let cancel = CancelFlag::new();
        let surface = Mutex::new(Probe {
            cancel_after: Some((4, cancel.clone())),
            ..Probe::default()
        });
        let steps = tagged(0, 10);

        let pace = |_: &Tagged| Duration::from_millis(1);
        let outcome = replay(&steps, &surface, pace, &cancel).await;

        assert_eq!(outcome, ReplayOutcome::Cancelled { applied: 4 });
        let probe = surface.lock().await;
        assert_eq!(probe.log.len(), 4);
        assert_eq!(probe.log.last().map(|s| s.seq), Some(3));
        assert!(!probe.finished);
    }

    #[tokio::test]
    async fn pre_cancelled_replay_applies_nothing() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let surface = Mutex::new(Probe::default());

        let outcome = replay(&tagged(0, 3), &surface, no_delay, &cancel).await;

        assert_eq!(outcome, ReplayOutcome::Cancelled { applied: 0 });
        assert!(surface.lock().await.log.is_empty());
    }

    #[tokio::test]
    async fn fixed_steps_are_consumed_but_not_drawn() {
        let mut steps = tagged(0, 4);
        steps[0].fixed = true;
        steps[3].fixed = true;
        let surface = Mutex::new(Probe::default());

        let outcome = replay(&steps, &surface, no_delay, &CancelFlag::new()).await;

        assert_eq!(outcome.applied(), 4);
        let seqs: Vec<_> = surface.lock().await.log.iter().map(|s| s.seq).collect();
        assert_eq!(seqs, vec![1, 2]);
    }

    #[tokio::test]
    async fn replayer_runs_to_completion() {
        let mut replayer = Replayer::new(Probe::default());
        let mut events = replayer.subscribe();

        assert_eq!(replayer.start(tagged(1, 5), no_delay).await, None);
        let outcome = replayer.wait().await;

        assert_eq!(outcome, Some(ReplayOutcome::Completed { applied: 5 }));
        assert!(!replayer.is_active());
        assert!(matches!(events.recv().await, Ok(VisEvent::ReplayStarted { total_steps: 5 })));
        assert!(matches!(events.recv().await, Ok(VisEvent::ReplayCompleted { applied: 5 })));
    }

    #[tokio::test]
    async fn restart_cancels_previous_before_first_new_step() {
        let mut replayer = Replayer::new(Probe::default());
        let slow = |_: &Tagged| Duration::from_millis(5);

        replayer.start(tagged(1, 200), slow).await;
        tokio::time::sleep(Duration::from_millis(20)).await;
        let previous = replayer.start(tagged(2, 3), no_delay).await;
        let latest = replayer.wait().await;

        let previous = previous.expect("first replay was active");
        assert!(previous.is_cancelled());
        assert_eq!(latest, Some(ReplayOutcome::Completed { applied: 3 }));

        let probe = replayer.surface();
        let probe = probe.lock().await;
        let first_new = probe.log.iter().position(|s| s.run == 2).unwrap();
        assert!(probe.log[..first_new].iter().all(|s| s.run == 1));
        assert!(probe.log[first_new..].iter().all(|s| s.run == 2));
        assert_eq!(first_new, previous.applied());
    }

    #[tokio::test]
    async fn stop_when_idle_is_a_no_op() {
        let mut replayer: Replayer<Tagged, Probe> = Replayer::new(Probe::default());
        assert_eq!(replayer.stop().await, None);
        assert!(replayer.cancel_flag().is_none());
    }

    #[tokio::test]
    async fn cancel_flag_stops_from_outside() {
        let mut replayer = Replayer::new(Probe::default());
        replayer
            .start(tagged(1, 100), |_: &Tagged| Duration::from_millis(2))
            .await;
        let flag = replayer.cancel_flag().unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;
        flag.cancel();

        let outcome = replayer.wait().await.unwrap();
        assert!(outcome.is_cancelled());
        assert!(outcome.applied() < 100);
    }

    #[tokio::test]
    async fn reset_surface_stops_replay_first() {
        let mut replayer = Replayer::new(Probe::default());
        replayer
            .start(tagged(1, 100), |_: &Tagged| Duration::from_millis(2))
            .await;

        let logged = replayer
            .reset_surface(|probe| {
                let n = probe.log.len();
                probe.log.clear();
                n
            })
            .await;

        assert!(logged < 100);
        assert!(!replayer.is_active());
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(replayer.surface().lock().await.log.is_empty());
    }
}
