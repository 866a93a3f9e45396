//! Progress observation and cooperative cancellation for matrix computation
//!
//! Neither mechanism influences computed values: progress is reported to an
//! injected observer and cancellation is only checked between cells.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Receives leaf-evaluation progress while a matrix is computed
pub trait ProgressObserver {
    /// Called whenever the completed percentage changes
    ///
    /// `current` counts evaluated masking patterns, `total` is the number
    /// scheduled for the whole matrix.
    fn on_progress(&self, current: u64, total: u64);
}

/// Observer that discards all progress
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&self, _current: u64, _total: u64) {}
}

/// Counts evaluated masking patterns and forwards percentage changes
///
/// One tracker is shared by a computation and any reduced computation it
/// delegates to, so the observer sees a single continuous run.
pub struct LeafTracker<'a> {
    observer: &'a dyn ProgressObserver,
    done: u64,
    total: u64,
    last_percent: Option<u64>,
}

impl<'a> LeafTracker<'a> {
    /// Create a tracker reporting to `observer`
    pub fn new(observer: &'a dyn ProgressObserver) -> Self {
        Self {
            observer,
            done: 0,
            total: 0,
            last_percent: None,
        }
    }

    /// Reset the counters for a run of `total` leaf evaluations
    pub fn begin(&mut self, total: u64) {
        self.done = 0;
        self.total = total;
        self.last_percent = None;
        self.notify();
    }

    /// Count `leaves` further evaluations
    pub fn record(&mut self, leaves: u64) {
        self.done = self.done.saturating_add(leaves).min(self.total);
        self.notify();
    }

    fn notify(&mut self) {
        let percent = if self.total == 0 {
            100
        } else {
            (u128::from(self.done) * 100 / u128::from(self.total)) as u64
        };

        if self.last_percent != Some(percent) {
            self.last_percent = Some(percent);
            self.observer.on_progress(self.done, self.total);
        }
    }
}

/// Shared flag requesting that a running computation stop before its next cell
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a flag that is not raised
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Test if the flag was raised
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
