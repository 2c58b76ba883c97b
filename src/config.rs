//! Configuration for a [`crate::Collectives`] instance.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default per-call timeout: 5 minutes, matching the reference
/// implementation's default.
const DEFAULT_TIMEOUT_MS: u64 = 5 * 60 * 1000;

const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Tunables for a [`crate::Collectives`] instance.
///
/// Every collective method also accepts an optional per-call timeout that
/// overrides [`CollectivesConfig::default_timeout`] for that one call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct CollectivesConfig {
    /// Default per-call timeout, in milliseconds, used when a collective
    /// method is not given an explicit timeout.
    #[cfg_attr(feature = "clap", clap(long, default_value_t = default_timeout_ms()))]
    #[serde(default = "default_timeout_ms")]
    pub default_timeout_ms: u64,
}

impl CollectivesConfig {
    /// `default_timeout_ms` as a [`Duration`].
    pub fn default_timeout(&self) -> Duration {
        Duration::from_millis(self.default_timeout_ms)
    }
}

impl Default for CollectivesConfig {
    fn default() -> Self {
        Self {
            default_timeout_ms: default_timeout_ms(),
        }
    }
}
