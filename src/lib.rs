//! Single outbound HTTP calls reshaped into a uniform response envelope.
//!
//! ```no_run
//! # async fn run() -> Result<(), api_call::CallError> {
//! use std::time::Duration;
//!
//! let call = api_call::ApiCall::new()
//!     .with_base_url("https://api.example.com")
//!     .with_timeout(Duration::from_secs(7));
//!
//! let envelope = call.send("GET", "/todos", None).await?;
//! if !envelope.is_ok() {
//!     eprintln!("call failed: {}", envelope.errors_string());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod identity;
pub mod lifecycle;
pub mod observability;
pub mod resilience;

pub use config::ClientConfig;
pub use envelope::{AuditInfo, Envelope, Meta, MetaList};
pub use error::{CallError, DecodeError};
pub use http::ApiCall;
pub use identity::{FixedIdentity, HostIdentity, SystemIdentity};
pub use lifecycle::{CancelToken, Cancellation};
