//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files. Every
//! section has defaults so a minimal file (or none at all) is valid.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Client-level configuration shared by every call made through one
/// [`crate::ApiCall`].
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix concatenated with each call's URL (e.g. "https://api.example.com").
    pub base_url: String,

    /// Per-call deadline in milliseconds. Zero disables the deadline.
    pub timeout_ms: u64,

    /// Headers sent with every call.
    pub headers: BTreeMap<String, String>,

    /// Optional Basic authentication credentials.
    pub auth: Option<BasicAuthConfig>,

    /// Logging settings used by the command-line binary.
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Configured timeout, `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

/// Basic authentication credentials.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct BasicAuthConfig {
    pub username: String,

    #[serde(default)]
    pub password: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "api_call=info".to_string(),
        }
    }
}
