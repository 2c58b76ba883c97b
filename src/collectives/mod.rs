//! The six group collective primitives composed over a [`Store`].
//!
//! A `Collectives` instance is an immutable `(store, rank, world_size)`
//! triple with no mutable state of its own; thread-safety of concurrent
//! calls reduces entirely to the store's own thread-safety. Multiple
//! instances may share the same store.

use std::sync::Arc;
use std::time::Duration;

use crate::config::CollectivesConfig;
use crate::error::{Error, Result};
use crate::key_layout;
use crate::store::Store;

mod all_gather;
mod all_sum;
mod barrier;
mod broadcast;
mod gather;
mod scatter;

/// Stateless (per-call) protocol logic over a shared [`Store`].
pub struct Collectives {
    store: Arc<dyn Store>,
    rank: usize,
    world_size: usize,
    config: CollectivesConfig,
}

impl Collectives {
    /// Create a collectives instance over `store` with `world_size >= 1`
    /// and `rank < world_size`, using the default 5-minute timeout.
    pub fn new(store: Arc<dyn Store>, rank: usize, world_size: usize) -> Result<Self> {
        Self::with_config(store, rank, world_size, CollectivesConfig::default())
    }

    /// As [`Collectives::new`], with an explicit [`CollectivesConfig`].
    pub fn with_config(
        store: Arc<dyn Store>,
        rank: usize,
        world_size: usize,
        config: CollectivesConfig,
    ) -> Result<Self> {
        if world_size == 0 {
            return Err(Error::PreconditionViolation(
                "world_size must be at least 1".to_string(),
            ));
        }
        if rank >= world_size {
            return Err(Error::PreconditionViolation(format!(
                "rank {rank} out of range for world_size {world_size}"
            )));
        }
        Ok(Self {
            store,
            rank,
            world_size,
            config,
        })
    }

    /// This instance's rank in `[0, world_size)`.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// This instance's fixed world size.
    pub fn world_size(&self) -> usize {
        self.world_size
    }

    fn resolve_timeout(&self, timeout: Option<Duration>) -> Duration {
        timeout.unwrap_or_else(|| self.config.default_timeout())
    }

    /// Enumerate peer ranks (`i != self.rank`) whose presence marker is
    /// absent right now, and wrap `source` into a [`Error::MissingRanks`]
    /// naming them. This is a snapshot, not a continuous observation: it
    /// reflects presence at the moment the diagnostic is constructed.
    fn missing_ranks_error(&self, prefix: &str, collective: &'static str, source: Error) -> Error {
        let mut ranks = String::new();
        for i in 0..self.world_size {
            if i == self.rank {
                continue;
            }
            let key = key_layout::rank_key(prefix, i);
            let present = self.store.check(std::slice::from_ref(&key)).unwrap_or(false);
            if !present {
                ranks.push_str(&i.to_string());
                ranks.push_str(", ");
            }
        }
        log::warn!(
            "{collective} failed at rank {}: missing ranks {ranks}({source})",
            self.rank
        );
        Error::MissingRanks {
            collective,
            ranks,
            source: source.to_string(),
        }
    }
}
