//! Error types for the collectives protocol layer.

use thiserror::Error;

/// Error type for collective operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A store operation did not complete within the active timeout.
    #[error("store operation timed out")]
    Timeout,

    /// The store reported a non-timeout failure (connectivity, protocol).
    #[error("store error: {0}")]
    Store(String),

    /// A quorum failed to form in time; lists the peer ranks whose
    /// presence key was absent when the diagnostic was constructed.
    #[error("{collective} failed -- missing ranks: {ranks}{source}")]
    MissingRanks {
        /// Name of the collective that failed (e.g. `"barrier"`).
        collective: &'static str,
        /// Ascending, comma-separated list of absent peer ranks, each
        /// followed by `", "` (e.g. `"2, 5, "`).
        ranks: String,
        /// The underlying store error text.
        source: String,
    },

    /// A caller-supplied precondition did not hold (e.g. `scatter_send`
    /// given a data vector whose length does not equal `world_size`).
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),
}

/// Result type alias for collective operations.
pub type Result<T> = std::result::Result<T, Error>;
