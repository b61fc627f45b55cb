//! Host and platform fact gathering.
//!
//! Everything here is re-read on every request. The values are static-ish
//! for a process lifetime, but nothing is memoized: the dashboard shows
//! whatever the system reports at render time.

use std::net::IpAddr;

use chrono::{DateTime, Local};
use tracing::instrument;

use crate::error::HostError;

/// Timestamp format shown on the dashboard, second precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Host and environment facts for one request.
#[derive(Debug, Clone)]
pub struct HostFacts {
    /// Local hostname (the container ID under Docker).
    pub hostname: String,
    /// Address the hostname resolves to.
    pub ip_address: String,
    /// Local wall-clock time, `YYYY-MM-DD HH:MM:SS`.
    pub current_time: String,
    /// Version of the Rust toolchain this binary was built with.
    pub runtime_version: String,
    /// OS and machine architecture, e.g. `linux x86_64`.
    pub platform_info: String,
    /// Local timezone name.
    pub timezone: String,
}

impl HostFacts {
    /// Gather all facts for the current request.
    #[instrument]
    pub async fn gather() -> Result<Self, HostError> {
        let hostname = local_hostname()?;
        let ip_address = resolve_ip(&hostname).await?.to_string();

        Ok(Self {
            hostname,
            ip_address,
            current_time: format_timestamp(Local::now()),
            runtime_version: runtime_version(),
            platform_info: platform_info(),
            timezone: timezone_name(),
        })
    }
}

/// Read the local hostname.
pub fn local_hostname() -> Result<String, HostError> {
    let name = hostname::get().map_err(|e| HostError::Hostname(e.to_string()))?;
    Ok(name.to_string_lossy().into_owned())
}

/// Resolve the hostname to an address, preferring IPv4.
pub async fn resolve_ip(host: &str) -> Result<IpAddr, HostError> {
    let addrs: Vec<_> = tokio::net::lookup_host((host, 0u16))
        .await
        .map_err(|e| HostError::ResolutionFailed {
            host: host.to_string(),
            reason: e.to_string(),
        })?
        .collect();

    addrs
        .iter()
        .find(|a| a.is_ipv4())
        .or_else(|| addrs.first())
        .map(|a| a.ip())
        .ok_or_else(|| HostError::ResolutionFailed {
            host: host.to_string(),
            reason: "no addresses".to_string(),
        })
}

/// Format a timestamp the way the dashboard displays it.
pub fn format_timestamp(dt: DateTime<Local>) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Version of the Rust toolchain this binary was built with.
pub fn runtime_version() -> String {
    rustc_version_runtime::version().to_string()
}

/// OS name and machine architecture.
pub fn platform_info() -> String {
    format!("{} {}", std::env::consts::OS, std::env::consts::ARCH)
}

/// Local timezone name, falling back to the UTC offset when the IANA
/// zone cannot be determined.
pub fn timezone_name() -> String {
    iana_time_zone::get_timezone().unwrap_or_else(|_| Local::now().offset().to_string())
}
