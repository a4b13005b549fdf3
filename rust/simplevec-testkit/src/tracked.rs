//! Instance-counting element type.
//!
//! Counters are thread-local, so tests running on separate threads do not
//! interfere with each other.

use std::cell::Cell;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

/// An `i64` wrapper that counts its live instances on the current thread.
///
/// Every construction (including `Default` and `Clone`) increments the live
/// count and every drop decrements it.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tracked(i64);

impl Tracked {
    pub fn new(value: i64) -> Tracked {
        LIVE.with(|c| c.set(c.get() + 1));
        Tracked(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Default for Tracked {
    fn default() -> Self {
        Tracked::new(0)
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Tracked::new(self.0)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        LIVE.with(|c| c.set(c.get() - 1));
    }
}

/// Number of `Tracked` values currently alive on this thread.
pub fn live_count() -> isize {
    LIVE.with(|c| c.get())
}

/// Snapshot of the live count; [`LiveScope::assert_balanced`] checks that every
/// value created since the snapshot has been dropped.
pub struct LiveScope {
    baseline: isize,
}

impl LiveScope {
    pub fn new() -> LiveScope {
        LiveScope {
            baseline: live_count(),
        }
    }

    /// Values created since the snapshot that are still alive.
    pub fn outstanding(&self) -> isize {
        live_count() - self.baseline
    }

    pub fn assert_balanced(&self) {
        assert_eq!(
            self.outstanding(),
            0,
            "Tracked values leaked or dropped twice"
        );
    }
}

impl Default for LiveScope {
    fn default() -> Self {
        Self::new()
    }
}
