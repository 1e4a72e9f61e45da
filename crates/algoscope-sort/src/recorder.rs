//! Step recording for instrumented sorts.
//!
//! Every mutation of the working array goes through a [`Recorder`], which
//! applies it and appends a full snapshot. Snapshots are cheap at the array
//! sizes a bar chart can show, and keep replay a plain index walk.

use std::cell::Cell;

/// The mutation that produced a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum SortOp {
    /// Two positions exchanged values
    Swap { i: usize, j: usize },
    /// A single position was assigned
    Write { index: usize },
}

impl SortOp {
    /// Positions touched by this mutation.
    pub fn positions(&self) -> Vec<usize> {
        match *self {
            SortOp::Swap { i, j } => vec![i, j],
            SortOp::Write { index } => vec![index],
        }
    }
}

/// One replayable sort step: the mutation plus the array right after it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortStep {
    pub seq: usize,
    pub op: SortOp,
    pub values: Vec<u32>,
}

/// Applies mutations to a working array and records a snapshot for each.
pub struct Recorder<'a> {
    steps: Vec<SortStep>,
    is_cancelled: &'a dyn Fn() -> bool,
    /// Latched the first time a poll reports cancellation.
    stopped: Cell<bool>,
}

impl<'a> Recorder<'a> {
    pub fn new(is_cancelled: &'a dyn Fn() -> bool) -> Self {
        Self {
            steps: Vec::new(),
            is_cancelled,
            stopped: Cell::new(false),
        }
    }

    /// Polled inside inner loops so a stop request lands within one step.
    pub fn cancelled(&self) -> bool {
        if !self.stopped.get() && (self.is_cancelled)() {
            self.stopped.set(true);
        }
        self.stopped.get()
    }

    /// Whether an algorithm saw a cancellation and returned early.
    pub fn stopped(&self) -> bool {
        self.stopped.get()
    }

    pub fn swap(&mut self, values: &mut [u32], i: usize, j: usize) {
        values.swap(i, j);
        self.push(values, SortOp::Swap { i, j });
    }

    pub fn write(&mut self, values: &mut [u32], index: usize, value: u32) {
        values[index] = value;
        self.push(values, SortOp::Write { index });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn into_steps(self) -> Vec<SortStep> {
        self.steps
    }

    fn push(&mut self, values: &[u32], op: SortOp) {
        self.steps.push(SortStep {
            seq: self.steps.len(),
            op,
            values: values.to_vec(),
        });
    }
}
