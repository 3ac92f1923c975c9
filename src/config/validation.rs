//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the base URL is absolute http/https when set
//! - Check header names and values can be sent
//! - Check Basic credentials can be encoded
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>

use reqwest::header::{HeaderName, HeaderValue};
use thiserror::Error;
use url::Url;

use crate::config::schema::ClientConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("base_url {0:?} is not an absolute URL")]
    InvalidBaseUrl(String),

    #[error("base_url {0:?} must use http or https")]
    UnsupportedScheme(String),

    #[error("header name {0:?} is invalid")]
    InvalidHeaderName(String),

    #[error("value of header {0:?} is invalid")]
    InvalidHeaderValue(String),

    #[error("auth username must be non-empty and must not contain ':'")]
    InvalidUsername,
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !config.base_url.is_empty() {
        match Url::parse(&config.base_url) {
            Ok(url) if !matches!(url.scheme(), "http" | "https") => {
                errors.push(ValidationError::UnsupportedScheme(config.base_url.clone()));
            }
            Ok(_) => {}
            Err(_) => errors.push(ValidationError::InvalidBaseUrl(config.base_url.clone())),
        }
    }

    for (name, value) in &config.headers {
        if HeaderName::from_bytes(name.as_bytes()).is_err() {
            errors.push(ValidationError::InvalidHeaderName(name.clone()));
        }
        if HeaderValue::from_str(value).is_err() {
            errors.push(ValidationError::InvalidHeaderValue(name.clone()));
        }
    }

    if let Some(auth) = &config.auth {
        if auth.username.is_empty() || auth.username.contains(':') {
            errors.push(ValidationError::InvalidUsername);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
