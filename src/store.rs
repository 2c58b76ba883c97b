//! The `Store` contract consumed by the collectives protocol layer.
//!
//! The store itself (TCP rendezvous, file-backed, in-memory, etc.) is an
//! external collaborator; this trait only names the capability set the
//! protocol layer needs from it. Every method blocks the calling thread up
//! to the store's currently installed timeout -- there is no async runtime
//! involved anywhere in this crate.

use std::time::Duration;

use crate::error::Result;

/// A shared key-value rendezvous store with atomic counters, presence
/// checks, blocking waits, and a process-local timeout mode.
pub trait Store: Send + Sync {
    /// Unconditionally install `key ↦ value`.
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Return the current value for `key`, blocking up to the active
    /// timeout for the key to appear.
    fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Atomically add `delta` to the integer stored at `key` (absent
    /// treated as 0) and return the new value.
    fn add(&self, key: &str, delta: i64) -> Result<i64>;

    /// Non-blocking: true iff every listed key currently exists.
    fn check(&self, keys: &[String]) -> Result<bool>;

    /// Block up to the active timeout until every listed key exists.
    fn wait(&self, keys: &[String]) -> Result<()>;

    /// `get` on each key, in order.
    fn multi_get(&self, keys: &[String]) -> Result<Vec<Vec<u8>>>;

    /// `set` on each matched `(key, value)` pair.
    ///
    /// # Panics
    ///
    /// Implementations may assume `keys.len() == values.len()`; callers in
    /// this crate always uphold it.
    fn multi_set(&self, keys: &[String], values: &[Vec<u8>]) -> Result<()>;

    /// Install a new blocking timeout for subsequent operations.
    fn set_timeout(&self, timeout: Duration);

    /// The currently installed blocking timeout.
    fn timeout(&self) -> Duration;
}
