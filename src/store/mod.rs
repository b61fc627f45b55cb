//! Counter-store client abstraction.
//!
//! The external store owns the only durable state in the system (the visit
//! counter). This module defines the two operations the dashboard consumes
//! and provides a Redis-backed client plus an in-process mock for tests.

pub mod mock;
pub mod redis;

pub use self::mock::{MockConfig, MockStore};
pub use self::redis::RedisStore;

use async_trait::async_trait;

use crate::error::StoreError;

/// Operations the dashboard needs from the external counter store.
///
/// Implementations must be safe for concurrent callers: the single client
/// instance is shared across all in-flight requests without locking.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Atomically increment the visit counter and return the new value.
    async fn increment(&self) -> Result<i64, StoreError>;

    /// Liveness probe. `Ok(false)` means the store answered but reported
    /// itself unhealthy; `Err` means it could not be reached at all.
    async fn ping(&self) -> Result<bool, StoreError>;
}
