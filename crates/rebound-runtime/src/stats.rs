//! Call statistics
//!
//! Cheap per-wrapper counters with a plain snapshot type. Recording goes
//! through `Cell`, so the wrapper can count through `&self` without locks;
//! reading produces a detached [`TrampolineStats`] value.

use std::cell::Cell;

/// Internal counters owned by one wrapper
#[derive(Debug, Default)]
pub(crate) struct CallStats {
    driving_calls: Cell<u64>,
    reentries: Cell<u64>,
    iterations: Cell<u64>,
}

impl CallStats {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_driving_call(&self) {
        self.driving_calls.set(self.driving_calls.get() + 1);
    }

    pub(crate) fn record_reentry(&self) {
        self.reentries.set(self.reentries.get() + 1);
    }

    pub(crate) fn record_iteration(&self) {
        self.iterations.set(self.iterations.get() + 1);
    }

    pub(crate) fn snapshot(&self) -> TrampolineStats {
        TrampolineStats {
            driving_calls: self.driving_calls.get(),
            reentries: self.reentries.get(),
            iterations: self.iterations.get(),
        }
    }

    pub(crate) fn reset(&self) {
        self.driving_calls.set(0);
        self.reentries.set(0);
        self.iterations.set(0);
    }
}

/// Point-in-time counters for one wrapper
///
/// For a tail-recursive routine that would have recursed `n` times, one
/// driving call records `n` re-entries and `n + 1` iterations: every frame
/// the routine would have pushed becomes one trip around the drive loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrampolineStats {
    /// Top-level calls that entered the drive loop
    pub driving_calls: u64,
    /// Recursive calls intercepted before executing
    pub reentries: u64,
    /// Times the routine body was invoked by the drive loop
    pub iterations: u64,
}
