//! Unified error types for the dashboard service.

use thiserror::Error;

/// Unified error type for the dashboard service.
///
/// At the HTTP boundary every variant collapses to a single plain-text
/// 500 response; the variants exist for logging and for callers inside
/// the process, not for the wire.
#[derive(Error, Debug)]
pub enum DashError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Counter-store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Host fact gathering error.
    #[error("host error: {0}")]
    Host(#[from] HostError),

    /// Template rendering error.
    #[error("render error: {0}")]
    Render(#[from] askama::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Counter-store connection and command errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("store unreachable: {0}")]
    Unreachable(String),

    /// A store command failed after the connection was established.
    #[error("store command failed: {0}")]
    Command(#[from] redis::RedisError),
}

/// Host and network fact gathering errors.
#[derive(Error, Debug)]
pub enum HostError {
    /// The local hostname could not be read.
    #[error("hostname unavailable: {0}")]
    Hostname(String),

    /// The local hostname did not resolve to an address.
    #[error("failed to resolve {host}: {reason}")]
    ResolutionFailed {
        /// Hostname that failed to resolve.
        host: String,
        /// Reason for failure.
        reason: String,
    },
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, DashError>;
