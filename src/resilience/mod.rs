//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Call dispatch:
//!     → timeouts.rs (deadline derived from the configured timeout)
//!     → transport, deadline and cancel token race
//!     → On failure: failure.rs (classify, emit synthetic error item)
//! ```
//!
//! # Design Decisions
//! - Exactly one attempt per call; no retries, no backoff
//! - Timeout and cancellation are distinct from other transport errors
//! - Failures are absorbed into the envelope, never returned as errors

pub mod failure;
pub mod timeouts;

pub use failure::TransportFailure;
pub use timeouts::Deadline;
