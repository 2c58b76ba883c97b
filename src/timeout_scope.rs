//! Scoped acquisition of a [`Store`]'s per-operation timeout.

use std::time::Duration;

use crate::store::Store;

/// Installs a timeout on a [`Store`] for the lifetime of the guard and
/// restores the prior value when the guard is dropped, on every exit path
/// -- normal return, error propagation via `?`, or panic unwind.
///
/// A collective primitive wraps its entire body in a `TimeoutScope` so that
/// every store operation it makes, including those inside failure
/// diagnostic branches, shares the caller's single deadline budget.
pub struct TimeoutScope<'a> {
    store: &'a dyn Store,
    previous: Duration,
}

impl<'a> TimeoutScope<'a> {
    /// Record `store`'s current timeout and install `timeout` in its
    /// place.
    pub fn new(store: &'a dyn Store, timeout: Duration) -> Self {
        let previous = store.timeout();
        store.set_timeout(timeout);
        log::trace!("installed store timeout {timeout:?}, was {previous:?}");
        Self { store, previous }
    }
}

impl Drop for TimeoutScope<'_> {
    fn drop(&mut self) {
        self.store.set_timeout(self.previous);
        log::trace!("restored store timeout {:?}", self.previous);
    }
}
