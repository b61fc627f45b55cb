//! Multi-container demo dashboard service.
//!
//! A single HTTP endpoint renders an HTML dashboard wiring together two
//! containers: this web process and an external counter store. On every
//! request the service atomically increments a visit counter in the store,
//! gathers a handful of host and platform facts, probes the store's
//! liveness, and renders everything into one HTML document.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`store`]: Counter-store client (Redis) and test mock
//! - [`host`]: Host and platform fact gathering
//! - [`render`]: Per-request render context and HTML template
//! - [`api`]: HTTP surface
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod host;
pub mod render;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{DashError, Result};
