//! HTTP call handling subsystem.
//!
//! # Data Flow
//! ```text
//! ApiCall::send(method, url, body)
//!     → client.rs (audit skeleton, deadline, cancel token)
//!     → request.rs (method, base_url + url, headers, credentials)
//!     → reqwest transport
//!     → client.rs (failure absorption or body decode)
//!     → Envelope
//! ```

pub mod client;
pub mod request;

pub use client::ApiCall;
pub use request::{build_request, CallRequest, Credentials, JSON_CONTENT_TYPE};
