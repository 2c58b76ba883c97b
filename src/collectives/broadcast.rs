//! `broadcast`: one-to-all payload distribution.

use std::time::Duration;

use super::Collectives;
use crate::error::Result;
use crate::key_layout;
use crate::timeout_scope::TimeoutScope;

impl Collectives {
    /// Write `data` to the broadcast slot under `prefix`. Exactly one rank
    /// in the group should call this; all others call
    /// [`Collectives::broadcast_recv`]. No internal consistency checks are
    /// performed.
    pub fn broadcast_send(&self, prefix: &str, data: &[u8], timeout: Option<Duration>) -> Result<()> {
        let _scope = TimeoutScope::new(self.store.as_ref(), self.resolve_timeout(timeout));
        self.store.set(&key_layout::root(prefix), data)
    }

    /// Read the broadcast payload written under `prefix`, blocking up to
    /// `timeout` for it to appear.
    pub fn broadcast_recv(&self, prefix: &str, timeout: Option<Duration>) -> Result<Vec<u8>> {
        let _scope = TimeoutScope::new(self.store.as_ref(), self.resolve_timeout(timeout));
        self.store.get(&key_layout::root(prefix))
    }
}
