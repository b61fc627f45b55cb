//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Counter Store ===
    /// Hostname of the external counter store.
    #[serde(default = "default_store_host")]
    pub store_host: String,

    /// Port of the external counter store.
    #[serde(default = "default_store_port")]
    pub store_port: u16,

    /// Name of the counter key incremented on every request.
    #[serde(default = "default_counter_key")]
    pub counter_key: String,

    // === Server Configuration ===
    /// HTTP listen port for the dashboard.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_store_host() -> String {
    "redis".to_string()
}

fn default_store_port() -> u16 {
    6379
}

fn default_counter_key() -> String {
    "hits".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.store_host.is_empty() {
            return Err("STORE_HOST must not be empty".to_string());
        }

        if self.store_port == 0 {
            return Err("STORE_PORT must be non-zero".to_string());
        }

        if self.counter_key.is_empty() {
            return Err("COUNTER_KEY must not be empty".to_string());
        }

        Ok(())
    }

    /// Connection URL for the counter store.
    pub fn store_url(&self) -> String {
        format!("redis://{}:{}/", self.store_host, self.store_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_host: default_store_host(),
            store_port: default_store_port(),
            counter_key: default_counter_key(),
            port: default_port(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}
