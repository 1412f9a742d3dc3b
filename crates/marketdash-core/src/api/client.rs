//! API client for the marketplace backend.
//!
//! `ApiClient` issues one request per call with a hard timeout, an optional
//! bearer token and an optional JSON or form body. No retries are attempted.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, Url};
use serde_json::Value;
use tracing::debug;

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Default hard timeout for a single request.
pub const DEFAULT_TIMEOUT_MS: u64 = 9000;

/// Request body. JSON bodies are serialized and labeled as JSON; form bodies
/// go out as-is.
#[derive(Debug, Clone)]
pub enum Body {
    Json(Value),
    Form(Vec<(String, String)>),
}

/// Per-request options for `ApiClient::request`.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Body>,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            token: None,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl RequestOptions {
    pub fn get(token: Option<&str>) -> Self {
        Self {
            token: token.map(str::to_string),
            ..Self::default()
        }
    }
}

/// Anything the dashboard can fetch JSON resources through.
#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// GET `path`, returning `Ok(None)` for empty successes.
    async fn get_json(&self, path: &str, token: Option<&str>) -> Result<Option<Value>, ApiError>;
}

/// HTTP client for the marketplace API.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Arc<str>,
    timeout: Duration,
}

impl ApiClient {
    /// Create a new API client rooted at `base_url` (e.g. `https://host/api`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url: String = base_url.into();
        Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        })
    }

    /// Override the timeout used by `ResourceSource::get_json`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> Result<Url, ApiError> {
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&joined).map_err(|e| ApiError::InvalidUrl(format!("{joined}: {e}")))
    }

    /// Issue one request.
    ///
    /// - 204 yields `Ok(None)`; a success body that is not JSON also yields `Ok(None)`
    /// - non-success statuses yield `ApiError::RequestFailed` with the parsed error body
    /// - exceeding `options.timeout` yields `ApiError::Timeout`
    pub async fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, ApiError> {
        let url = self.url_for(path)?;
        debug!(method = %options.method, %url, "Sending request");

        let mut builder = self
            .client
            .request(options.method, url.clone())
            .timeout(options.timeout);

        if let Some(ref token) = options.token {
            builder = builder.bearer_auth(token);
        }

        builder = match options.body {
            Some(Body::Json(ref value)) => builder.json(value),
            Some(Body::Form(ref fields)) => builder.form(fields),
            None => builder,
        };

        let response = builder.send().await.map_err(ApiError::from_reqwest)?;
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let text = response.text().await.map_err(ApiError::from_reqwest)?;

        if !status.is_success() {
            return Err(ApiError::from_status(status, &text));
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Null) => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                debug!(%url, error = %e, "Success response was not JSON");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl ResourceSource for ApiClient {
    async fn get_json(&self, path: &str, token: Option<&str>) -> Result<Option<Value>, ApiError> {
        let options = RequestOptions {
            timeout: self.timeout,
            ..RequestOptions::get(token)
        };
        self.request(path, options).await
    }
}
