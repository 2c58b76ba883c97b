//! `gather`: many-to-one collection at a caller-chosen receiver rank.

use std::time::Duration;

use super::Collectives;
use crate::error::Result;
use crate::key_layout;
use crate::timeout_scope::TimeoutScope;

impl Collectives {
    /// Contribute `data` to the gather under `prefix`. Every rank except
    /// the one that will call [`Collectives::gather_recv`] calls this.
    pub fn gather_send(&self, prefix: &str, data: &[u8], timeout: Option<Duration>) -> Result<()> {
        let _scope = TimeoutScope::new(self.store.as_ref(), self.resolve_timeout(timeout));
        self.store
            .set(&key_layout::rank_key(prefix, self.rank), data)
    }

    /// Collect every peer's contribution under `prefix` and insert `data`
    /// (this rank's own contribution) at position `rank`, producing a
    /// `world_size`-length vector ordered by rank.
    ///
    /// Exactly one rank in the group should call this. If `multi_get`
    /// succeeds despite a peer never having written (the store returning
    /// an empty value), the result carries an empty entry for that peer --
    /// the gather does not distinguish absent from empty.
    pub fn gather_recv(&self, prefix: &str, data: &[u8], timeout: Option<Duration>) -> Result<Vec<Vec<u8>>> {
        let _scope = TimeoutScope::new(self.store.as_ref(), self.resolve_timeout(timeout));

        let peer_keys = key_layout::peer_keys(prefix, self.world_size, self.rank);
        let mut results = self
            .store
            .multi_get(&peer_keys)
            .map_err(|err| self.missing_ranks_error(prefix, "gather", err))?;

        results.insert(self.rank, data.to_vec());
        Ok(results)
    }
}
