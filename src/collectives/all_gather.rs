//! `all_gather`: symmetric gather where every rank contributes and every
//! rank receives.

use std::time::Duration;

use super::Collectives;
use crate::error::Result;
use crate::key_layout;
use crate::timeout_scope::TimeoutScope;

impl Collectives {
    /// Write `data` under this rank's slot, then read every rank's slot
    /// (including this one) and return the `world_size`-length,
    /// rank-ordered result.
    ///
    /// This rank's own key is definitionally present once the initial
    /// write succeeds, so the missing-rank diagnostic on failure only
    /// considers peers.
    pub fn all_gather(&self, prefix: &str, data: &[u8], timeout: Option<Duration>) -> Result<Vec<Vec<u8>>> {
        let _scope = TimeoutScope::new(self.store.as_ref(), self.resolve_timeout(timeout));

        self.store
            .set(&key_layout::rank_key(prefix, self.rank), data)?;

        let all_keys = key_layout::all_keys(prefix, self.world_size);
        self.store
            .multi_get(&all_keys)
            .map_err(|err| self.missing_ranks_error(prefix, "all_gather", err))
    }
}
