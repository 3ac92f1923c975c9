//! Self-identification of the calling host.
//!
//! # Responsibilities
//! - Report the local hostname
//! - Discover a best-effort outbound IPv4 address
//!
//! # Design Decisions
//! - Both lookups sit behind [`HostIdentity`] so tests can pin them
//! - Failures are reported, never fatal; the executor leaves fields empty

pub mod interfaces;

use std::net::Ipv4Addr;

use thiserror::Error;

/// Errors from outbound address discovery.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Interface enumeration failed at the OS level.
    #[error("failed to enumerate network interfaces: {0}")]
    Interfaces(#[from] std::io::Error),

    /// No non-loopback IPv4 address is assigned.
    #[error("no non-loopback IPv4 interface found, are you connected to the network?")]
    NotConnected,
}

/// Source of the host identity recorded in audit info.
pub trait HostIdentity: Send + Sync {
    /// Local hostname, `None` when it cannot be determined.
    fn hostname(&self) -> Option<String>;

    /// Outbound-facing IPv4 address.
    fn client_ip(&self) -> Result<Ipv4Addr, IdentityError>;
}

/// Identity read from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentity;

impl HostIdentity for SystemIdentity {
    fn hostname(&self) -> Option<String> {
        sysinfo::System::host_name()
    }

    fn client_ip(&self) -> Result<Ipv4Addr, IdentityError> {
        let ifaces = get_if_addrs::get_if_addrs()?;
        interfaces::first_ipv4(&ifaces).ok_or(IdentityError::NotConnected)
    }
}

/// Identity with fixed values, for tests and pinned deployments.
#[derive(Debug, Clone, Default)]
pub struct FixedIdentity {
    pub hostname: Option<String>,
    pub client_ip: Option<Ipv4Addr>,
}

impl FixedIdentity {
    pub fn new(hostname: impl Into<String>, client_ip: Ipv4Addr) -> Self {
        Self {
            hostname: Some(hostname.into()),
            client_ip: Some(client_ip),
        }
    }
}

impl HostIdentity for FixedIdentity {
    fn hostname(&self) -> Option<String> {
        self.hostname.clone()
    }

    fn client_ip(&self) -> Result<Ipv4Addr, IdentityError> {
        self.client_ip.ok_or(IdentityError::NotConnected)
    }
}
