//! Response envelope subsystem.
//!
//! # Data Flow
//! ```text
//! executor start
//!     → audit.rs (host, client IP, timestamp)
//!     → operation_id.rs (deterministic id from the three)
//!     → response.rs (skeleton Envelope)
//!
//! transport success:
//!     → response.rs absorb() (items, interfaceSettings, errors/info/warning, total)
//!
//! caller:
//!     → is_ok() / has_items() / get_items::<T>()
//!     → meta.rs rendering for logs
//! ```
//!
//! # Design Decisions
//! - Items stay raw JSON until the caller asks for a shape
//! - The `ok` verdict is derived on demand and only materialized when the
//!   envelope is serialized
//! - Locally observed audit fields win over whatever the server sends

pub mod audit;
pub mod meta;
pub mod operation_id;
pub mod response;

pub use audit::AuditInfo;
pub use meta::{Meta, MetaList};
pub use operation_id::operation_id;
pub use response::Envelope;
