//! `all_sum`: 64-bit signed integer sum-reduction.

use std::time::Duration;

use super::Collectives;
use crate::error::Result;
use crate::key_layout;
use crate::timeout_scope::TimeoutScope;

impl Collectives {
    /// Accumulate `value` into the shared counter at `prefix`, barrier so
    /// every rank has contributed before any rank reads, then read the
    /// total by adding zero.
    ///
    /// This reuses `prefix` both as the counter key and as the barrier's
    /// own prefix; the barrier's keys (`prefix/num_members`,
    /// `prefix/last_members`, `prefix/<i>`) share the namespace with the
    /// counter without colliding, since they carry distinct suffixes.
    pub fn all_sum(&self, prefix: &str, value: i64, timeout: Option<Duration>) -> Result<i64> {
        let timeout = self.resolve_timeout(timeout);
        let _scope = TimeoutScope::new(self.store.as_ref(), timeout);

        self.store.add(&key_layout::root(prefix), value)?;
        self.barrier(prefix, Some(timeout), true)?;
        self.store.add(&key_layout::root(prefix), 0)
    }
}
