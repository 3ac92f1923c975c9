//! Call executor.
//!
//! # Responsibilities
//! - Initialize audit metadata before dispatch
//! - Build the request and race it against the deadline and cancel token
//! - Absorb transport failures into the envelope as error items
//! - Decode successful responses into the envelope
//!
//! # Design Decisions
//! - Exactly one attempt; no retries
//! - Only configuration and decode problems are returned as errors
//! - The reqwest client is shared, so clones and concurrent calls reuse its
//!   connection pool

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::config::ClientConfig;
use crate::envelope::{AuditInfo, Envelope};
use crate::error::CallError;
use crate::http::request::{build_request, CallRequest, Credentials};
use crate::identity::{HostIdentity, SystemIdentity};
use crate::lifecycle::CancelToken;
use crate::observability::metrics;
use crate::resilience::{Deadline, TransportFailure};

/// Executes single HTTP calls and reshapes the outcome into an [`Envelope`].
#[derive(Clone)]
pub struct ApiCall {
    base_url: String,
    headers: HeaderMap,
    credentials: Option<Credentials>,
    timeout: Option<Duration>,
    client: reqwest::Client,
    identity: Arc<dyn HostIdentity>,
}

impl ApiCall {
    /// Executor with no base URL, no deadline and the system identity.
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
            headers: HeaderMap::new(),
            credentials: None,
            timeout: None,
            client: reqwest::Client::new(),
            identity: Arc::new(SystemIdentity),
        }
    }

    /// Executor configured from a validated [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, CallError> {
        let mut call = Self::new().with_base_url(&config.base_url);
        call.timeout = config.timeout();

        for (name, value) in &config.headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| CallError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| CallError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
            call.headers.insert(header_name, header_value);
        }

        if let Some(auth) = &config.auth {
            call = call.with_basic_auth(&auth.username, &auth.password);
        }
        Ok(call)
    }

    /// Prefix concatenated with every call's URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Per-call deadline. `Duration::ZERO` disables it.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Send `Authorization: Basic base64(username:password)` with every call.
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::new(username, password));
        self
    }

    /// Replace the transport client, e.g. to share a pool or disable proxies.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Replace the hostname / outbound IP provider.
    pub fn with_identity(mut self, identity: impl HostIdentity + 'static) -> Self {
        self.identity = Arc::new(identity);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Send one request to `base_url + url`.
    ///
    /// Transport failures are recorded in the envelope's `errors` list; only
    /// configuration problems and undecodable success responses are `Err`.
    pub async fn send(&self, method: &str, url: &str, body: Option<Vec<u8>>) -> Result<Envelope, CallError> {
        self.send_with_cancel(method, url, body, &CancelToken::never()).await
    }

    /// Like [`ApiCall::send`], abandoning the call when `cancel` fires.
    pub async fn send_with_cancel(
        &self,
        method: &str,
        url: &str,
        body: Option<Vec<u8>>,
        cancel: &CancelToken,
    ) -> Result<Envelope, CallError> {
        let mut envelope = Envelope::new(self.begin_audit());
        let start = Instant::now();
        let deadline = Deadline::after(self.timeout);

        let request = build_request(
            method,
            &self.base_url,
            url,
            &self.headers,
            self.credentials.as_ref(),
            body,
        )?;
        let method = request.method.to_string();

        tracing::debug!(
            operation_id = %envelope.audit().operation_id,
            method = %request.method,
            url = %request.url,
            bounded = deadline.is_bounded(),
            "Dispatching call"
        );

        let mut cancel = cancel.clone();
        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(TransportFailure::Canceled),
            _ = deadline.elapsed() => Err(TransportFailure::Timeout),
            result = self.exchange(request) => result,
        };

        let (status, body) = match outcome {
            Ok(response) => response,
            Err(failure) => {
                tracing::warn!(
                    operation_id = %envelope.audit().operation_id,
                    kind = failure.kind(),
                    error = %failure,
                    "Call failed before a response was read"
                );
                envelope.push_error(failure.to_meta());
                metrics::record_call(&method, failure.kind(), start);
                return Ok(envelope);
            }
        };

        let audit = envelope.audit_mut();
        audit.status_code = status;
        audit.duration = start.elapsed();

        if let Err(err) = envelope.absorb(&body) {
            tracing::warn!(
                operation_id = %envelope.audit().operation_id,
                status,
                error = %err,
                "Response body is not a valid envelope"
            );
            metrics::record_call(&method, "decode_error", start);
            return Err(err.into());
        }

        let ok = envelope.is_ok();
        tracing::info!(
            operation_id = %envelope.audit().operation_id,
            status,
            duration_ms = envelope.audit().duration.as_millis() as u64,
            ok,
            errors = %envelope.audit().errors,
            "Call completed"
        );
        metrics::record_call(&method, if ok { "ok" } else { "not_ok" }, start);

        Ok(envelope)
    }

    fn begin_audit(&self) -> AuditInfo {
        let host = self.identity.hostname().unwrap_or_default();
        let client_ip = match self.identity.client_ip() {
            Ok(ip) => ip.to_string(),
            Err(e) => {
                tracing::debug!(error = %e, "Outbound IPv4 not discovered");
                String::new()
            }
        };
        AuditInfo::begin(host, client_ip, Utc::now())
    }

    /// Dispatch and read the full body.
    async fn exchange(&self, request: CallRequest) -> Result<(u16, Vec<u8>), TransportFailure> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok((status, body.to_vec()))
    }
}

impl Default for ApiCall {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ApiCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCall")
            .field("base_url", &self.base_url)
            .field("headers", &self.headers)
            .field("credentials", &self.credentials)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
