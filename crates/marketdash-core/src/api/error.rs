use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request timed out")]
    Timeout,

    #[error("Request failed with status {status}: {}", body_preview(.body))]
    RequestFailed { status: u16, body: Value },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

fn body_preview(body: &Value) -> String {
    ApiError::truncate_body(&body.to_string())
}

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let cut = (0..=MAX_ERROR_BODY_LENGTH)
                .rev()
                .find(|&i| body.is_char_boundary(i))
                .unwrap_or(0);
            format!("{}... (truncated, {} total bytes)", &body[..cut], body.len())
        }
    }

    /// Build a `RequestFailed` from a status and the raw response body.
    /// Bodies that are not JSON fall back to `{"error":"http","status":<code>}`.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let parsed = serde_json::from_str::<Value>(body)
            .ok()
            .filter(|v| !v.is_null());
        let body = parsed.unwrap_or_else(|| {
            serde_json::json!({ "error": "http", "status": status.as_u16() })
        });
        ApiError::RequestFailed {
            status: status.as_u16(),
            body,
        }
    }

    /// Map a reqwest failure, keeping timeouts distinct from transport errors.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Transport(err)
        }
    }
}
