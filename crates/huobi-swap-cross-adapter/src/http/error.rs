/*
[INPUT]:  Error sources (transport, exchange envelope, malformed bodies, construction)
[OUTPUT]: Structured error types with classification helpers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::fmt;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main error type for the swap adapter
#[derive(Error, Debug)]
pub enum HuobiError {
    /// Connection failure or timeout reported by the transport
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport completed with a non-2xx status
    #[error("HTTP status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Exchange answered with `status != "ok"`
    #[error("{0}")]
    Api(ApiErrorResponse),

    /// Success body could not be decoded as JSON
    #[error("Malformed response body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Request arguments could not be assembled into a body
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HuobiError {
    /// Network failure, timeout or non-2xx status
    pub fn is_transport(&self) -> bool {
        matches!(self, HuobiError::Http(_) | HuobiError::Status { .. })
    }

    /// Exchange error envelope
    pub fn is_protocol(&self) -> bool {
        matches!(self, HuobiError::Api(_))
    }

    /// Transport succeeded but the body was not JSON
    pub fn is_malformed(&self) -> bool {
        matches!(self, HuobiError::Serialization(_))
    }

    /// Check if the failure is transient. Retrying is left to the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            HuobiError::Http(err) => err.is_timeout() || err.is_connect(),
            HuobiError::Status { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            _ => false,
        }
    }

    /// The exchange envelope, if this is a protocol error
    pub fn api_error(&self) -> Option<&ApiErrorResponse> {
        match self {
            HuobiError::Api(response) => Some(response),
            _ => None,
        }
    }
}

/// Decoded body of a response whose `status` field is not `"ok"`.
///
/// The whole payload is kept; `err_code`/`err_msg` read the common envelope fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiErrorResponse {
    payload: Value,
}

impl ApiErrorResponse {
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn into_payload(self) -> Value {
        self.payload
    }

    pub fn status(&self) -> Option<&str> {
        self.payload.get("status").and_then(Value::as_str)
    }

    /// `err_code` (swap API), `err-code` (spot API) or `code` (v2 API)
    pub fn err_code(&self) -> Option<i64> {
        ["err_code", "err-code", "code"]
            .iter()
            .filter_map(|key| self.payload.get(*key))
            .find_map(|value| match value {
                Value::Number(number) => number.as_i64(),
                Value::String(text) => text.parse().ok(),
                _ => None,
            })
    }

    pub fn err_msg(&self) -> Option<&str> {
        ["err_msg", "err-msg", "message"]
            .iter()
            .find_map(|key| self.payload.get(*key).and_then(Value::as_str))
    }
}

impl fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.err_code(), self.err_msg()) {
            (Some(code), Some(message)) => write!(f, "API error (code {code}): {message}"),
            (Some(code), None) => write!(f, "API error (code {code})"),
            (None, Some(message)) => write!(f, "API error: {message}"),
            (None, None) => write!(f, "API error: {}", self.payload),
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, HuobiError>;
