//! Call lifecycle management.
//!
//! # Data Flow
//! ```text
//! caller owns Cancellation
//!     → token() handed to ApiCall::send_with_cancel
//!     → cancel() resolves every token
//!     → executor records a "Canceled" error item
//! ```
//!
//! # Design Decisions
//! - Built on a watch channel so late subscribers still observe the signal
//! - Dropping the owner without cancelling never fires the tokens

pub mod cancellation;

pub use cancellation::{CancelToken, Cancellation};
