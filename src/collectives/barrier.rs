//! `barrier`: mutual arrival synchronization.

use std::time::Duration;

use super::Collectives;
use crate::error::Result;
use crate::key_layout;
use crate::timeout_scope::TimeoutScope;

impl Collectives {
    /// Block until every rank in `[0, world_size)` has entered the same
    /// barrier under `prefix` within `timeout`, or fail with the set of
    /// peer ranks that never showed up.
    ///
    /// When `blocking` is `false` this is a best-effort join: presence is
    /// recorded and the call returns immediately without waiting on peers,
    /// without leaving the counter in an inconsistent state. `world_size
    /// == 1` completes locally without blocking.
    pub fn barrier(&self, prefix: &str, timeout: Option<Duration>, blocking: bool) -> Result<()> {
        let _scope = TimeoutScope::new(self.store.as_ref(), self.resolve_timeout(timeout));

        let num_members_key = key_layout::num_members(prefix);
        let last_members_key = key_layout::last_members(prefix);

        let idx = self.store.add(&num_members_key, 1)?;
        self.store
            .set(&key_layout::rank_key(prefix, self.rank), b"joined")?;

        if idx as usize == self.world_size {
            log::debug!("rank {} is last joiner for barrier {prefix}", self.rank);
            self.store.set(&last_members_key, b"released")?;
            return Ok(());
        }

        if !blocking {
            log::trace!("rank {} best-effort barrier join for {prefix}", self.rank);
            return Ok(());
        }

        self.store
            .wait(std::slice::from_ref(&last_members_key))
            .map_err(|err| self.missing_ranks_error(prefix, "barrier", err))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    use super::*;
    use crate::error::Error;
    use crate::memory_store::MemoryStore;

    #[test]
    fn world_size_one_completes_without_blocking() {
        let store = Arc::new(MemoryStore::new());
        let collectives = Collectives::new(store, 0, 1).unwrap();
        collectives.barrier("b1", None, true).unwrap();
    }

    #[test]
    fn non_blocking_barrier_returns_after_recording_presence() {
        let store = Arc::new(MemoryStore::new());
        let collectives = Collectives::new(store.clone(), 0, 3).unwrap();
        collectives.barrier("b2", None, false).unwrap();
        assert!(store
            .check(&[crate::key_layout::rank_key("b2", 0)])
            .unwrap());
    }

    #[test]
    fn every_rank_releases_once_all_have_joined() {
        let store = Arc::new(MemoryStore::new());
        let world_size = 4;
        let handles: Vec<_> = (0..world_size)
            .map(|rank| {
                let store = store.clone();
                thread::spawn(move || {
                    let collectives = Collectives::new(store, rank, world_size).unwrap();
                    collectives.barrier("s6-ok", Some(Duration::from_secs(5)), true)
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }
    }

    #[test]
    fn missing_rank_is_reported_after_timeout() {
        let store = Arc::new(MemoryStore::new());
        let world_size = 3;
        let timeout = Duration::from_millis(50);

        let handles: Vec<_> = (0..2)
            .map(|rank| {
                let store = store.clone();
                thread::spawn(move || {
                    let collectives = Collectives::new(store, rank, world_size).unwrap();
                    collectives.barrier("s6", Some(timeout), true)
                })
            })
            .collect();

        for handle in handles {
            let err = handle.join().unwrap().unwrap_err();
            match err {
                Error::MissingRanks { collective, ranks, .. } => {
                    assert_eq!(collective, "barrier");
                    assert_eq!(ranks, "2, ");
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }

        assert!(!store
            .check(&[crate::key_layout::rank_key("s6", 2)])
            .unwrap());
    }
}
