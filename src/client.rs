//! # RAGLite Client
//!
//! This module provides [`Client`], the entry point for every API
//! operation, and the request pipeline shared by all of them: URL and query
//! construction, JSON serialization, bearer authentication, envelope
//! decoding, and error classification.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use raglite_sdk::Client;
//!
//! async fn check() -> Result<(), raglite_sdk::Error> {
//!     let client = Client::builder("http://localhost:8080")
//!         .api_key("rl_live_...")
//!         .build()?;
//!     let health = client.health_check().await?;
//!     println!("{}: {}", health.service, health.status);
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use log::debug;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Error};

/// Request timeout used when the builder is not given one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Marker for dispatching a request without a body.
pub(crate) const NO_BODY: Option<&()> = None;

// =============================================================================
// Client Construction
// =============================================================================

/// Client for the RAGLite API.
///
/// Holds the base URL, the optional API key, and the underlying `reqwest`
/// engine. All fields are fixed at construction, so one client can serve
/// any number of concurrent calls; the engine's connection pool is the only
/// shared state.
///
/// Dropping a call's future cancels the request. Cancellations and engine
/// timeouts surface as [`Error::Network`], never as an API error or a
/// partially decoded result.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    api_key: Option<String>,
    http: reqwest::Client,
}

/// Builder for [`Client`].
///
/// Options are applied in call order; when two calls touch the same field
/// the later one wins.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            http: None,
        }
    }

    /// API key sent as `Authorization: Bearer <key>` on every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Request timeout for the internally-built HTTP engine.
    ///
    /// Ignored when a custom engine is supplied with
    /// [`http_client`](Self::http_client): a built `reqwest::Client` is
    /// immutable and carries its own timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a caller-supplied `reqwest::Client` as the HTTP engine, replacing
    /// the internally-built one along with its timeout and pool settings.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Finalize the immutable client.
    pub fn build(self) -> Result<Client, Error> {
        if self.base_url.is_empty() {
            return Err(Error::Config {
                message: "base URL is required".to_string(),
            });
        }

        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| Error::Config {
                    message: format!("failed to build HTTP engine: {}", e),
                })?,
        };

        Ok(Client {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key: self.api_key,
            http,
        })
    }
}

// =============================================================================
// Response Envelope
// =============================================================================

/// Uniform wrapper around every JSON response body.
///
/// The caller's destination type is bound into the `data` slot so the
/// payload decodes in the same pass as the envelope itself.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: String,
    data: Option<T>,
}

/// Best-effort shape of a non-2xx response body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Decode a completed HTTP exchange into `T`, classifying every failure
/// mode.
///
/// Shared by the JSON dispatcher and the multipart upload path so the two
/// cannot drift apart.
pub(crate) fn decode_and_classify<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<T, Error> {
    if !status.is_success() {
        return Err(classify_failure(status, body));
    }

    let envelope: Envelope<T> = serde_json::from_slice(body).map_err(|e| Error::Decode {
        message: format!("failed to decode response envelope: {}", e),
    })?;

    if !envelope.success {
        return Err(Error::Api(ApiError {
            status_code: status.as_u16(),
            message: envelope.message,
        }));
    }

    envelope.data.ok_or_else(|| Error::Decode {
        message: "response envelope has no data field".to_string(),
    })
}

/// Map a non-2xx response to [`Error::Api`].
///
/// The body is parsed as a `{"message": ...}` object when possible;
/// otherwise the raw text is carried verbatim. The status code always comes
/// from the HTTP status line, never from the body.
pub(crate) fn classify_failure(status: StatusCode, body: &[u8]) -> Error {
    debug!(
        "[api] error response body: {}",
        String::from_utf8_lossy(body)
    );

    let message = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    };

    Error::Api(ApiError {
        status_code: status.as_u16(),
        message,
    })
}

/// Convert a reqwest error to the SDK's transport error.
pub(crate) fn to_network_error(err: reqwest::Error) -> Error {
    Error::Network {
        message: err.to_string(),
    }
}

// =============================================================================
// Request Dispatcher
// =============================================================================

impl Client {
    /// Create a client with the default configuration.
    ///
    /// Equivalent to `Client::builder(base_url).build()`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        Self::builder(base_url).build()
    }

    /// Start building a client against `base_url`.
    pub fn builder(base_url: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(base_url)
    }

    /// Base URL the client was built with, trailing slash trimmed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying HTTP engine, for request paths that bypass the JSON
    /// dispatcher.
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Build a full request URL from a server-relative path and optional
    /// query parameters.
    ///
    /// Parameters with empty values mean "not provided" and are omitted, so
    /// an explicitly empty filter cannot be expressed through this path.
    pub(crate) fn endpoint(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<reqwest::Url, Error> {
        let mut url =
            reqwest::Url::parse(&format!("{}{}", self.base_url, path)).map_err(|e| {
                Error::Config {
                    message: format!("invalid request URL: {}", e),
                }
            })?;

        if query.iter().any(|(_, value)| !value.is_empty()) {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                if !value.is_empty() {
                    pairs.append_pair(key, value);
                }
            }
        }

        Ok(url)
    }

    /// Attach the bearer authorization header when an API key is configured.
    pub(crate) fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", key),
            ),
            None => request,
        }
    }

    /// Execute a JSON request and decode the enveloped response into `T`.
    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (status, bytes) = self.execute(method, path, query, body).await?;
        decode_and_classify(status, &bytes)
    }

    /// Execute a JSON request where no payload is expected back.
    ///
    /// On a 2xx response the body is not inspected at all; delete-style
    /// endpoints succeed regardless of what the server wrote.
    pub(crate) async fn request_no_content<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        let (status, bytes) = self.execute(method, path, &[], body).await?;
        if status.is_success() {
            return Ok(());
        }
        Err(classify_failure(status, &bytes))
    }

    /// Serialize, authorize, send, and read the full response body.
    async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<(StatusCode, Vec<u8>), Error>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path, query)?;
        let mut request = self.http.request(method, url);

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(|e| Error::Encode {
                message: format!("failed to serialize request body: {}", e),
            })?;
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(payload);
        }

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(to_network_error)?;

        let status = response.status();
        debug!(
            "[api] response status: {} ({})",
            status.as_u16(),
            status.canonical_reason().unwrap_or("unknown")
        );

        let bytes = response.bytes().await.map_err(to_network_error)?;
        Ok((status, bytes.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new("http://localhost:8080").unwrap()
    }

    #[test]
    fn build_rejects_empty_base_url() {
        let result = Client::new("");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn build_trims_trailing_slash() {
        let client = Client::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn endpoint_omits_empty_query_values() {
        let url = client().endpoint("/api/v1/models", &[("status", "")]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v1/models");
        assert!(url.query().is_none());
    }

    #[test]
    fn endpoint_keeps_non_empty_query_values() {
        let url = client()
            .endpoint("/api/v1/models", &[("status", "active")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/v1/models?status=active"
        );
    }

    #[test]
    fn endpoint_mixes_present_and_absent_values() {
        let url = client()
            .endpoint(
                "/api/v1/models",
                &[("model_type", "chat"), ("provider", ""), ("status", "active")],
            )
            .unwrap();
        assert_eq!(url.query(), Some("model_type=chat&status=active"));
    }

    #[test]
    fn endpoint_encodes_reserved_characters() {
        let url = client()
            .endpoint("/api/v1/models", &[("status", "a b&c")])
            .unwrap();
        assert_eq!(url.query(), Some("status=a+b%26c"));
    }

    #[test]
    fn decode_unwraps_success_envelope() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Payload {
            answer: String,
        }

        let body = br#"{"success": true, "message": "ok", "data": {"answer": "42"}}"#;
        let payload: Payload = decode_and_classify(StatusCode::OK, body).unwrap();
        assert_eq!(payload.answer, "42");
    }

    #[test]
    fn decode_surfaces_business_failure_on_2xx() {
        let body = br#"{"success": false, "message": "dataset is busy", "data": null}"#;
        let result: Result<serde_json::Value, Error> = decode_and_classify(StatusCode::OK, body);

        match result {
            Err(Error::Api(err)) => {
                assert_eq!(err.status_code, 200);
                assert_eq!(err.message, "dataset is busy");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn decode_rejects_malformed_envelope() {
        let result: Result<serde_json::Value, Error> =
            decode_and_classify(StatusCode::OK, b"not json at all");
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[test]
    fn decode_rejects_success_without_data() {
        #[derive(Debug, Deserialize)]
        struct Payload {
            #[allow(dead_code)]
            answer: String,
        }

        let body = br#"{"success": true, "message": "ok"}"#;
        let result: Result<Payload, Error> = decode_and_classify(StatusCode::OK, body);
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[test]
    fn classify_parses_json_error_body() {
        let err = classify_failure(StatusCode::NOT_FOUND, br#"{"message": "no such model"}"#);
        match err {
            Error::Api(err) => {
                assert_eq!(err.status_code, 404);
                assert_eq!(err.message, "no such model");
                assert!(err.is_not_found());
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn classify_falls_back_to_raw_body_text() {
        let err = classify_failure(StatusCode::BAD_GATEWAY, b"upstream exploded");
        match err {
            Error::Api(err) => {
                assert_eq!(err.status_code, 502);
                assert_eq!(err.message, "upstream exploded");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn classify_keeps_status_from_the_status_line() {
        // A body that happens to be a JSON object without a message still
        // produces the HTTP status, not anything body-derived.
        let err = classify_failure(StatusCode::INTERNAL_SERVER_ERROR, br#"{"code": 404}"#);
        match err {
            Error::Api(err) => {
                assert_eq!(err.status_code, 500);
                assert_eq!(err.message, "");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }
}
