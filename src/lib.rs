//! Group collective communication primitives over a shared key-value
//! rendezvous store.
//!
//! Each process in a fixed-size `world` participates under a stable
//! integer `rank` in `[0, world_size)`. [`Collectives`] composes a
//! [`Store`]'s primitive operations (`set`, `get`, `add`, `check`, `wait`,
//! `multi_get`, `multi_set`, plus a timeout mode) into six group
//! operations: [`barrier`][Collectives::barrier],
//! [`broadcast_send`][Collectives::broadcast_send] /
//! [`broadcast_recv`][Collectives::broadcast_recv],
//! [`gather_send`][Collectives::gather_send] /
//! [`gather_recv`][Collectives::gather_recv],
//! [`scatter_send`][Collectives::scatter_send] /
//! [`scatter_recv`][Collectives::scatter_recv],
//! [`all_gather`][Collectives::all_gather], and
//! [`all_sum`][Collectives::all_sum].
//!
//! The backing store implementation (TCP rendezvous, file-backed,
//! in-memory) is an external dependency: this crate only specifies and
//! consumes the [`Store`] trait. Enable the `test-support` feature for an
//! in-process reference implementation, [`MemoryStore`], suitable for
//! exercising this crate's primitives without one.

pub mod collectives;
pub mod config;
pub mod error;
pub mod key_layout;
#[cfg(feature = "test-support")]
pub mod memory_store;
pub mod store;
mod timeout_scope;

pub use collectives::Collectives;
pub use config::CollectivesConfig;
pub use error::{Error, Result};
#[cfg(feature = "test-support")]
pub use memory_store::MemoryStore;
pub use store::Store;
pub use timeout_scope::TimeoutScope;
