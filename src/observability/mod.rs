//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Call executor produces:
//!     → tracing events (dispatch, completion, absorbed failures)
//!     → metrics.rs (per-call counters and latency)
//!
//! Consumers:
//!     → logging.rs subscriber (stdout) in the binary
//!     → any metrics recorder the embedding application installs
//! ```
//!
//! # Design Decisions
//! - Structured key/value fields on every event
//! - Operation id flows through all call events

pub mod logging;
pub mod metrics;
