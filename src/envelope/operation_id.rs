//! Deterministic operation identifiers.
//!
//! # Design Decisions
//! - MD5 hex digest over `client_ip ++ host ++ timestamp`, in that order
//! - Timestamp rendered as `YYYY-MM-DD HH:MM:SS[.fraction] +0000 UTC` so ids
//!   stay comparable with the ones already present in existing audit logs
//! - Correlation only, never a secret

use chrono::{DateTime, Timelike, Utc};
use md5::{Digest, Md5};

/// Compute the operation id for an audit triple.
pub fn operation_id(client_ip: &str, host: &str, timestamp: &DateTime<Utc>) -> String {
    let mut hasher = Md5::new();
    hasher.update(client_ip.as_bytes());
    hasher.update(host.as_bytes());
    hasher.update(canonical_timestamp(timestamp).as_bytes());
    hex::encode(hasher.finalize())
}

/// Canonical string form of a timestamp used as hash input.
///
/// Fractional seconds are printed with trailing zeros removed and left out
/// entirely on whole seconds.
pub fn canonical_timestamp(timestamp: &DateTime<Utc>) -> String {
    let mut out = timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
    let nanos = timestamp.nanosecond() % 1_000_000_000;
    if nanos > 0 {
        let fraction = format!("{nanos:09}");
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out.push_str(" +0000 UTC");
    out
}
