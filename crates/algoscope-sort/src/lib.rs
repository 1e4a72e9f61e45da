//! Algoscope Sort Engine
//!
//! Six sorting algorithms instrumented to record every array mutation as an
//! ordered, replayable step.
//!
//! # Recording
//!
//! A run copies the caller's array, sorts the copy, and returns one
//! [`SortStep`] per meaningful mutation (a swap, an assignment, or a merge
//! placement). Each step owns a full snapshot of the array at that point, so
//! a replayer only has to walk the list.
//!
//! Comparison operators and loop bounds follow the textbook versions exactly,
//! which makes step counts deterministic for a given input:
//!
//! - **Bubble**: one step per inversion
//! - **Selection**: at most `n - 1` steps
//! - **Insertion**: one step per inversion plus `n - 1` key placements
//! - **Merge**: every element placed once per merge level
//! - **Quick**: every Lomuto swap, including the final pivot swap
//! - **Heap**: every sift and extraction swap
//!
//! # Usage
//!
//! ```
//! use algoscope_sort::{run, SortAlgorithm};
//!
//! let run = run(&[3, 1, 2], SortAlgorithm::Bubble);
//! assert_eq!(run.final_values(), &[1, 2, 3]);
//! assert_eq!(run.steps.len(), 2);
//! ```

mod algorithm;
mod array;
mod divide;
mod error;
mod quadratic;
mod recorder;

pub use algorithm::{Complexity, SortAlgorithm};
pub use array::{bar_height_percent, generate_array, DEFAULT_MAX, DEFAULT_MIN, DEFAULT_SIZE};
pub use error::{Error, Result};
pub use recorder::{Recorder, SortOp, SortStep};

/// The recorded result of one sort run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortRun {
    pub algorithm: SortAlgorithm,
    pub input: Vec<u32>,
    pub steps: Vec<SortStep>,
    /// False when recording stopped on a cancellation request.
    pub completed: bool,
}

impl SortRun {
    /// The array after the last recorded step (the input if nothing moved).
    pub fn final_values(&self) -> &[u32] {
        self.steps
            .last()
            .map(|step| step.values.as_slice())
            .unwrap_or(&self.input)
    }
}

/// Sort a copy of `values` and record every mutation.
pub fn run(values: &[u32], algorithm: SortAlgorithm) -> SortRun {
    run_cancellable(values, algorithm, || false)
}

/// Like [`run`], but polls `is_cancelled` inside inner loops and returns the
/// steps recorded so far once it reports true.
pub fn run_cancellable<F>(values: &[u32], algorithm: SortAlgorithm, is_cancelled: F) -> SortRun
where
    F: Fn() -> bool,
{
    let mut working = values.to_vec();
    let mut rec = Recorder::new(&is_cancelled);

    match algorithm {
        SortAlgorithm::Bubble => quadratic::bubble(&mut working, &mut rec),
        SortAlgorithm::Selection => quadratic::selection(&mut working, &mut rec),
        SortAlgorithm::Insertion => quadratic::insertion(&mut working, &mut rec),
        SortAlgorithm::Merge => divide::merge_sort(&mut working, &mut rec),
        SortAlgorithm::Quick => divide::quick_sort(&mut working, &mut rec),
        SortAlgorithm::Heap => divide::heap_sort(&mut working, &mut rec),
    }

    let completed = !rec.stopped();
    let steps = rec.into_steps();
    tracing::debug!(
        algorithm = algorithm.id(),
        len = values.len(),
        steps = steps.len(),
        completed,
        "sort recorded"
    );

    SortRun {
        algorithm,
        input: values.to_vec(),
        steps,
        completed,
    }
}
