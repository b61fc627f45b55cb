//! Mock counter store for unit testing.
//!
//! This module provides a mock store that can be used in tests
//! without a running Redis instance.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StoreError;

use super::CounterStore;

/// Configuration for mock store behavior.
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Whether to fail increment requests.
    pub fail_increment: bool,
    /// Whether to fail ping requests.
    pub fail_ping: bool,
    /// Value returned by successful pings.
    pub ping_result: bool,
    /// Simulated latency in milliseconds.
    pub latency_ms: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            fail_increment: false,
            fail_ping: false,
            ping_result: true,
            latency_ms: 0,
        }
    }
}

/// Mock counter store for testing.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    /// Mock configuration.
    config: MockConfig,
    /// In-process counter standing in for the store's durable state.
    counter: Arc<AtomicI64>,
}

impl MockStore {
    /// Create a new mock store starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock store with custom configuration.
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            config,
            counter: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Create a mock store whose counter starts at the given value.
    pub fn starting_at(value: i64) -> Self {
        Self {
            config: MockConfig::default(),
            counter: Arc::new(AtomicI64::new(value)),
        }
    }

    /// Current counter value without incrementing.
    pub fn current(&self) -> i64 {
        self.counter.load(Ordering::SeqCst)
    }

    async fn simulate_latency(&self) {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.config.latency_ms)).await;
        }
    }
}

#[async_trait]
impl CounterStore for MockStore {
    async fn increment(&self) -> Result<i64, StoreError> {
        self.simulate_latency().await;

        if self.config.fail_increment {
            return Err(StoreError::Unreachable(
                "mock increment failure".to_string(),
            ));
        }

        Ok(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn ping(&self) -> Result<bool, StoreError> {
        self.simulate_latency().await;

        if self.config.fail_ping {
            return Err(StoreError::Unreachable("mock ping failure".to_string()));
        }

        Ok(self.config.ping_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_store_increments_monotonically() {
        let store = MockStore::new();

        let first = store.increment().await.unwrap();
        let second = store.increment().await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(store.current(), 2);
    }

    #[tokio::test]
    async fn mock_store_starting_value() {
        let store = MockStore::starting_at(41);
        assert_eq!(store.increment().await.unwrap(), 42);
    }

    #[tokio::test]
    async fn mock_store_ping_result_configurable() {
        let store = MockStore::with_config(MockConfig {
            ping_result: false,
            ..Default::default()
        });

        assert!(!store.ping().await.unwrap());
    }

    #[tokio::test]
    async fn mock_store_failure_modes() {
        let store = MockStore::with_config(MockConfig {
            fail_increment: true,
            fail_ping: true,
            ..Default::default()
        });

        assert!(store.increment().await.is_err());
        assert!(store.ping().await.is_err());
    }
}
