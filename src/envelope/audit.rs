//! Audit metadata attached to every envelope.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::envelope::meta::{null_as_default, MetaList};
use crate::envelope::operation_id::operation_id;

/// Who made the call, when, how long it took and what the server reported.
///
/// The success verdict is not stored here; see [`crate::Envelope::is_ok`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditInfo {
    /// Elapsed time from start to response fully read, as seconds on the wire.
    #[serde(with = "duration_secs")]
    pub duration: Duration,

    /// Wall-clock instant the call began.
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: DateTime<Utc>,

    /// Local hostname, empty when unknown.
    #[serde(deserialize_with = "null_as_default")]
    pub host: String,

    /// Outbound IPv4 address, empty when undiscoverable.
    #[serde(rename = "clientIP", deserialize_with = "null_as_default")]
    pub client_ip: String,

    /// Transport status code, zero when the transport never completed.
    #[serde(deserialize_with = "null_as_default")]
    pub status_code: u16,

    #[serde(deserialize_with = "null_as_default")]
    pub operation_id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub errors: MetaList,

    #[serde(deserialize_with = "null_as_default")]
    pub info: MetaList,

    #[serde(deserialize_with = "null_as_default")]
    pub warning: MetaList,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

impl AuditInfo {
    /// Start a fresh audit record and derive its operation id.
    pub fn begin(host: String, client_ip: String, timestamp: DateTime<Utc>) -> Self {
        let operation_id = operation_id(&client_ip, &host, &timestamp);
        Self {
            timestamp,
            host,
            client_ip,
            operation_id,
            ..Self::default()
        }
    }

    /// True when `status_code` is in `[200, 300)`.
    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

mod duration_secs {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = Option::<f64>::deserialize(deserializer)?.unwrap_or_default();
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
