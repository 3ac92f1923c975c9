//! Transport failure taxonomy.
//!
//! # Responsibilities
//! - Classify why a dispatch did not produce a response
//! - Map each class to the synthetic audit error item callers see
//!
//! # Codes
//! - `1` Timeout: the deadline elapsed first
//! - `2` Canceled: the caller's cancel token fired first
//! - `3` Unreachable: any other transport error (DNS, refused, reset, ...)

use thiserror::Error;

use crate::envelope::Meta;

/// Why the transport did not deliver a response.
#[derive(Debug, Error)]
pub enum TransportFailure {
    #[error("deadline exceeded")]
    Timeout,

    #[error("canceled by caller")]
    Canceled,

    #[error("transport error: {0}")]
    Unreachable(#[source] reqwest::Error),
}

impl TransportFailure {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Timeout => "1",
            Self::Canceled => "2",
            Self::Unreachable(_) => "3",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Timeout => "Timeout",
            Self::Canceled => "Canceled",
            Self::Unreachable(_) => "Unreachable",
        }
    }

    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Canceled => "canceled",
            Self::Unreachable(_) => "unreachable",
        }
    }

    /// Audit error item recorded for this failure.
    pub fn to_meta(&self) -> Meta {
        Meta::new(self.code(), self.description())
    }
}

impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        // A caller-supplied client may carry its own timeout.
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Unreachable(err)
        }
    }
}
