//! Per-request render context and the dashboard template.

use askama::Template;

use crate::config::Config;
use crate::host::HostFacts;

/// Result of the store liveness probe, as shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    /// The liveness check answered truthy.
    Connected,
    /// The liveness check answered falsy.
    Disconnected,
}

impl StoreStatus {
    /// Map a liveness-check result onto a status.
    pub fn from_ping(alive: bool) -> Self {
        if alive {
            Self::Connected
        } else {
            Self::Disconnected
        }
    }

    /// Whether the badge gets the connected styling.
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

impl std::fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connected => write!(f, "Connected"),
            Self::Disconnected => write!(f, "Disconnected"),
        }
    }
}

/// Everything one request substitutes into the dashboard template.
///
/// Constructed fresh per request and discarded once the response is sent;
/// the only durable state behind any of these fields is the counter value
/// owned by the external store.
#[derive(Debug, Clone, Template)]
#[template(path = "dashboard.html")]
pub struct RenderContext {
    /// Visit counter value returned by the store's increment.
    pub visit_count: i64,
    /// Local hostname.
    pub hostname: String,
    /// Address the hostname resolved to.
    pub ip_address: String,
    /// Request timestamp, `YYYY-MM-DD HH:MM:SS`.
    pub current_time: String,
    /// Store liveness at request time.
    pub status: StoreStatus,
    /// Rust toolchain version string.
    pub runtime_version: String,
    /// OS and architecture.
    pub platform_info: String,
    /// Local timezone name.
    pub timezone: String,
    /// Configured counter-store host.
    pub store_host: String,
    /// Configured counter-store port.
    pub store_port: u16,
    /// Port this service listens on.
    pub http_port: u16,
}

impl RenderContext {
    /// Assemble the context from the per-request pieces.
    pub fn new(visit_count: i64, facts: HostFacts, status: StoreStatus, config: &Config) -> Self {
        Self {
            visit_count,
            hostname: facts.hostname,
            ip_address: facts.ip_address,
            current_time: facts.current_time,
            status,
            runtime_version: facts.runtime_version,
            platform_info: facts.platform_info,
            timezone: facts.timezone,
            store_host: config.store_host.clone(),
            store_port: config.store_port,
            http_port: config.port,
        }
    }
}
