//! Redis-backed counter store client.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tokio::sync::OnceCell;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::StoreError;

use super::CounterStore;

/// Redis client for the external counter store.
///
/// Holds one long-lived [`ConnectionManager`] shared by all requests. The
/// manager is created lazily on first use so the service comes up even
/// when the store is down; until the first successful connection, every
/// request retries it.
pub struct RedisStore {
    /// Lazy connection handle, cheap to clone once established.
    client: redis::Client,
    conn: OnceCell<ConnectionManager>,
    /// Counter key incremented on every request.
    key: String,
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore")
            .field("key", &self.key)
            .field("connected", &self.conn.initialized())
            .finish()
    }
}

impl RedisStore {
    /// Create a new store client from config. Does not connect yet.
    pub fn new(config: &Config) -> Result<Self, StoreError> {
        let client = redis::Client::open(config.store_url())?;

        Ok(Self {
            client,
            conn: OnceCell::new(),
            key: config.counter_key.clone(),
        })
    }

    /// Get the shared connection, establishing it on first use.
    async fn connection(&self) -> Result<ConnectionManager, StoreError> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                debug!("establishing counter store connection");
                ConnectionManager::new(self.client.clone()).await
            })
            .await
            .map_err(|e| StoreError::Unreachable(e.to_string()))?;

        Ok(conn.clone())
    }
}

#[async_trait]
impl CounterStore for RedisStore {
    #[instrument(skip(self), fields(key = %self.key))]
    async fn increment(&self) -> Result<i64, StoreError> {
        let mut conn = self.connection().await?;
        let count: i64 = conn.incr(&self.key, 1).await?;

        debug!(count, "incremented visit counter");

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> Result<bool, StoreError> {
        let mut conn = self.connection().await?;
        let pong: String = redis::cmd("PING").query_async(&mut conn).await?;

        Ok(pong == "PONG")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_creation_does_not_connect() {
        let config = Config::default();
        let store = RedisStore::new(&config).unwrap();
        assert!(!store.conn.initialized());
    }

    #[test]
    fn store_rejects_malformed_url() {
        let config = Config {
            store_host: "not a hostname".to_string(),
            ..Config::default()
        };
        // redis::Client::open parses the URL eagerly.
        assert!(RedisStore::new(&config).is_err());
    }
}
