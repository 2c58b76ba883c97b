//! An in-process reference [`Store`], gated behind the `test-support`
//! feature.
//!
//! This is not a production rendezvous backend: it has no networking, no
//! persistence, and no cross-process visibility. It exists to exercise the
//! protocol layer in this crate's own test suite (and in downstream
//! crates' tests) without standing up a real store.

use std::collections::HashMap;
use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::store::Store;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

struct Inner {
    values: HashMap<String, Vec<u8>>,
    counters: HashMap<String, i64>,
}

/// An in-memory [`Store`] backed by a `Mutex` + `Condvar`, safe to share
/// across threads via `Arc<MemoryStore>`.
pub struct MemoryStore {
    inner: Mutex<Inner>,
    condvar: Condvar,
    timeout: Mutex<Duration>,
}

impl MemoryStore {
    /// Create an empty store with the default 5-minute timeout.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                values: HashMap::new(),
                counters: HashMap::new(),
            }),
            condvar: Condvar::new(),
            timeout: Mutex::new(DEFAULT_TIMEOUT),
        }
    }

    fn deadline(&self) -> Instant {
        Instant::now() + self.timeout()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.values.insert(key.to_string(), value.to_vec());
        self.condvar.notify_all();
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Vec<u8>> {
        let deadline = self.deadline();
        let mut guard = self.inner.lock().unwrap();
        loop {
            if let Some(value) = guard.values.get(key) {
                return Ok(value.clone());
            }
            let now = Instant::now();
            if now >= deadline {
                return Err(Error::Timeout);
            }
            let (next, _) = self.condvar.wait_timeout(guard, deadline - now).unwrap();
            guard = next;
        }
    }

    fn add(&self, key: &str, delta: i64) -> Result<i64> {
        let mut inner = self.inner.lock().unwrap();
        let counter = inner.counters.entry(key.to_string()).or_insert(0);
        *counter += delta;
        let value = *counter;
        self.condvar.notify_all();
        Ok(value)
    }

    fn check(&self, keys: &[String]) -> Result<bool> {
        let inner = self.inner.lock().unwrap();
        Ok(keys.iter().all(|k| inner.values.contains_key(k)))
    }

    fn wait(&self, keys: &[String]) -> Result<()> {
        let deadline = self.deadline();
        let mut guard = self.inner.lock().unwrap();
        while !keys.iter().all(|k| guard.values.contains_key(k)) {
            let now = Instant::now();
            if now >= deadline {
                return Err(Error::Timeout);
            }
            let (next, _) = self.condvar.wait_timeout(guard, deadline - now).unwrap();
            guard = next;
        }
        Ok(())
    }

    fn multi_get(&self, keys: &[String]) -> Result<Vec<Vec<u8>>> {
        let deadline = self.deadline();
        let mut guard = self.inner.lock().unwrap();
        loop {
            if keys.iter().all(|k| guard.values.contains_key(k)) {
                return Ok(keys
                    .iter()
                    .map(|k| guard.values.get(k).cloned().unwrap_or_default())
                    .collect());
            }
            let now = Instant::now();
            if now >= deadline {
                return Err(Error::Timeout);
            }
            let (next, _) = self.condvar.wait_timeout(guard, deadline - now).unwrap();
            guard = next;
        }
    }

    fn multi_set(&self, keys: &[String], values: &[Vec<u8>]) -> Result<()> {
        assert_eq!(keys.len(), values.len(), "multi_set: keys/values length mismatch");
        let mut inner = self.inner.lock().unwrap();
        for (key, value) in keys.iter().zip(values.iter()) {
            inner.values.insert(key.clone(), value.clone());
        }
        self.condvar.notify_all();
        Ok(())
    }

    fn set_timeout(&self, timeout: Duration) {
        *self.timeout.lock().unwrap() = timeout;
    }

    fn timeout(&self) -> Duration {
        *self.timeout.lock().unwrap()
    }
}
