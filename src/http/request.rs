//! Outbound request construction.
//!
//! # Responsibilities
//! - Parse the method and `base_url + url` into a dispatchable request
//! - Attach caller headers, Basic credentials and the fixed JSON content type
//!
//! # Design Decisions
//! - Every problem here is a configuration error raised before any I/O
//! - `Content-Type: application/json; charset=UTF-8` is always sent and
//!   replaces a caller-supplied content type
//! - The body is passed through untouched

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use url::Url;

use crate::error::CallError;

/// Content type sent with every call.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// A fully validated request, ready for the transport.
#[derive(Debug, Clone)]
pub struct CallRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Username/password pair for Basic authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// `Authorization` header value: `"Basic " + base64(user:pass)`.
    pub fn header_value(&self) -> Result<HeaderValue, CallError> {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        let mut value =
            HeaderValue::from_str(&format!("Basic {encoded}")).map_err(|e| CallError::InvalidHeader {
                name: AUTHORIZATION.to_string(),
                reason: e.to_string(),
            })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Build the outbound request for one call.
///
/// An empty method defaults to `GET`.
pub fn build_request(
    method: &str,
    base_url: &str,
    url: &str,
    headers: &HeaderMap,
    credentials: Option<&Credentials>,
    body: Option<Vec<u8>>,
) -> Result<CallRequest, CallError> {
    let method = if method.is_empty() {
        Method::GET
    } else {
        Method::from_bytes(method.as_bytes())
            .map_err(|_| CallError::InvalidMethod(method.to_string()))?
    };

    let joined = format!("{base_url}{url}");
    let url = Url::parse(&joined).map_err(|source| CallError::InvalidUrl {
        url: joined.clone(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(CallError::UnsupportedScheme {
            scheme: url.scheme().to_string(),
            url: joined,
        });
    }

    let mut request_headers = headers.clone();
    if let Some(credentials) = credentials {
        request_headers.insert(AUTHORIZATION, credentials.header_value()?);
    }
    request_headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

    Ok(CallRequest {
        method,
        url,
        headers: request_headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_base_url_and_path() {
        let req = build_request("GET", "http://localhost:3000", "/todos?page=2", &HeaderMap::new(), None, None)
            .unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.url.as_str(), "http://localhost:3000/todos?page=2");
        assert_eq!(req.headers.get(CONTENT_TYPE).unwrap(), JSON_CONTENT_TYPE);
        assert!(req.body.is_none());
    }

    #[test]
    fn test_empty_base_url_uses_url_as_is() {
        let req = build_request("post", "", "https://example.com/x", &HeaderMap::new(), None, Some(b"{}".to_vec()))
            .unwrap();
        assert_eq!(req.method.as_str(), "post");
        assert_eq!(req.url.as_str(), "https://example.com/x");
        assert_eq!(req.body.as_deref(), Some(&b"{}"[..]));
    }

    #[test]
    fn test_empty_method_defaults_to_get() {
        let req = build_request("", "", "http://localhost/", &HeaderMap::new(), None, None).unwrap();
        assert_eq!(req.method, Method::GET);
    }

    #[test]
    fn test_invalid_method() {
        let err = build_request("GE T", "", "http://localhost/", &HeaderMap::new(), None, None).unwrap_err();
        assert!(matches!(err, CallError::InvalidMethod(m) if m == "GE T"));
    }

    #[test]
    fn test_invalid_url() {
        let err = build_request("GET", "", "/relative/only", &HeaderMap::new(), None, None).unwrap_err();
        assert!(matches!(err, CallError::InvalidUrl { url, .. } if url == "/relative/only"));
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        let err = build_request("GET", "ftp://files.example.com", "/a", &HeaderMap::new(), None, None)
            .unwrap_err();
        assert!(matches!(
            err,
            CallError::UnsupportedScheme { url, scheme } if url == "ftp://files.example.com/a" && scheme == "ftp"
        ));
    }

    #[test]
    fn test_caller_headers_and_fixed_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert("token", HeaderValue::from_static("abcdefghijk"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let req = build_request("GET", "http://h", "/", &headers, None, None).unwrap();
        assert_eq!(req.headers.get("Token").unwrap(), "abcdefghijk");
        assert_eq!(req.headers.get_all(CONTENT_TYPE).iter().count(), 1);
        assert_eq!(req.headers.get(CONTENT_TYPE).unwrap(), JSON_CONTENT_TYPE);
    }

    #[test]
    fn test_basic_authentication_header() {
        let credentials = Credentials::new("user", "pass");
        let req = build_request("GET", "http://h", "/", &HeaderMap::new(), Some(&credentials), None).unwrap();
        assert_eq!(req.headers.get(AUTHORIZATION).unwrap(), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let rendered = format!("{:?}", Credentials::new("user", "hunter2"));
        assert!(!rendered.contains("hunter2"));
    }
}
