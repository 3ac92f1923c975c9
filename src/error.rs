//! Error types surfaced to callers.
//!
//! # Design Decisions
//! - Only configuration and decode problems are errors
//! - Transport failures never show up here; they become envelope error items
//!   (see [`crate::resilience::failure`])

use serde_json::error::Category;
use thiserror::Error;

/// Errors returned by [`crate::ApiCall::send`].
#[derive(Debug, Error)]
pub enum CallError {
    /// The HTTP method is not a valid token.
    #[error("invalid HTTP method {0:?}")]
    InvalidMethod(String),

    /// `base_url + url` does not parse as an absolute URL.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The URL parses but is not `http` or `https`.
    #[error("unsupported URL scheme {scheme:?} in {url:?}")]
    UnsupportedScheme { url: String, scheme: String },

    /// A header name or value cannot be sent.
    #[error("invalid header {name:?}: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// The transport succeeded but the body is not the envelope shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// JSON decode failure with the offending position resolved.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DecodeError {
    message: String,
    found: Option<char>,
    offset: usize,
    #[source]
    source: serde_json::Error,
}

impl DecodeError {
    /// Build from a serde_json error raised while decoding `input`.
    pub fn new(source: serde_json::Error, input: &[u8]) -> Self {
        let (found, offset, message) = match source.classify() {
            Category::Eof => (
                None,
                input.len(),
                format!("unexpected end of input at offset {}: {source}", input.len()),
            ),
            Category::Syntax => {
                let offset = byte_offset(input, source.line(), source.column());
                match input.get(offset).map(|b| char::from(*b)) {
                    Some(c) => (
                        Some(c),
                        offset,
                        format!("invalid character {c:?} at offset {offset}: {source}"),
                    ),
                    None => (
                        None,
                        offset,
                        format!("unexpected end of input at offset {offset}: {source}"),
                    ),
                }
            }
            Category::Data | Category::Io => {
                let offset = byte_offset(input, source.line(), source.column());
                (
                    None,
                    offset,
                    format!("unexpected value at offset {offset}: {source}"),
                )
            }
        };
        Self {
            message,
            found,
            offset,
            source,
        }
    }

    /// Offending byte of a syntax error.
    ///
    /// `None` when the input ended early or was well-formed JSON of the wrong
    /// shape.
    /// Non-ASCII input yields the raw lead byte as a `char`.
    pub fn found(&self) -> Option<char> {
        self.found
    }

    /// Zero-based byte offset of the failing position.
    ///
    /// Equals the input length when the input ended early.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// True when the input is well-formed JSON of the wrong shape.
    pub fn is_shape_mismatch(&self) -> bool {
        self.source.is_data()
    }
}

/// Translate serde_json's one-based line/column into a zero-based offset.
fn byte_offset(input: &[u8], line: usize, column: usize) -> usize {
    let line_start: usize = input
        .split(|b| *b == b'\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    (line_start + column.saturating_sub(1)).min(input.len())
}
