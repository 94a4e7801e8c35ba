//! Invocation spy for placeholder operations.

use std::cell::Cell;

/// Counts how many times an operation ran.
///
/// Operation bodies in this crate do no real work, so the counter is what
/// makes delegation observable.
///
/// # Example
///
/// ```
/// use srp_payroll::roles::CallCounter;
///
/// let counter = CallCounter::new();
/// counter.record();
/// counter.record();
/// assert_eq!(counter.count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct CallCounter {
    count: Cell<u32>,
}

impl CallCounter {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one invocation.
    pub fn record(&self) {
        self.count.set(self.count.get().saturating_add(1));
    }

    /// Number of recorded invocations.
    pub fn count(&self) -> u32 {
        self.count.get()
    }
}
