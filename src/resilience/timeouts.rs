//! Deadline scope for a single call.
//!
//! # Design Decisions
//! - Uses Tokio's timer; a zero or unset timeout means no deadline
//! - The deadline covers the whole exchange, body read included

use std::time::Duration;

use tokio::time::{sleep_until, Instant};

/// Optional point in time after which the call is abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// Deadline starting now, `None` or zero meaning unbounded.
    pub fn after(timeout: Option<Duration>) -> Self {
        let at = timeout
            .filter(|t| !t.is_zero())
            .map(|t| Instant::now() + t);
        Self { at }
    }

    pub fn unbounded() -> Self {
        Self { at: None }
    }

    pub fn is_bounded(&self) -> bool {
        self.at.is_some()
    }

    /// Resolve when the deadline passes; pends forever when unbounded.
    pub async fn elapsed(&self) {
        match self.at {
            Some(at) => sleep_until(at).await,
            None => std::future::pending().await,
        }
    }
}
