//! Structured errors for the backend REST client.

use std::fmt;

use serde_json::Value;

/// Categories of backend errors for consistent handling at the UI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendErrorKind {
    /// HTTP status error (4xx, 5xx)
    HttpStatus,
    /// Connection timeout or request timeout
    Timeout,
    /// Could not reach the backend at all
    Network,
    /// Failed to parse the response body
    Parse,
    /// Application-level error returned by the backend
    Api,
}

impl fmt::Display for BackendErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendErrorKind::HttpStatus => write!(f, "http_status"),
            BackendErrorKind::Timeout => write!(f, "timeout"),
            BackendErrorKind::Network => write!(f, "network"),
            BackendErrorKind::Parse => write!(f, "parse"),
            BackendErrorKind::Api => write!(f, "api_error"),
        }
    }
}

/// Structured error from the backend with kind and details.
#[derive(Debug, Clone)]
pub struct BackendError {
    pub kind: BackendErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// Optional additional details (e.g. raw error body)
    pub details: Option<String>,
}

impl BackendError {
    pub fn new(kind: BackendErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Creates an HTTP status error, folding a JSON error body into the
    /// message when the backend sent one (`{"error": {"message": ...}}` or
    /// FastAPI-style `{"detail": ...}`).
    pub fn http_status(status: u16, body: &str) -> Self {
        let mut message = format!("HTTP {status}");
        if let Ok(json) = serde_json::from_str::<Value>(body) {
            let api_message = json
                .get("error")
                .and_then(|e| e.get("message"))
                .or_else(|| json.get("detail"))
                .or_else(|| json.get("message"))
                .and_then(Value::as_str);
            if let Some(api_message) = api_message {
                message = format!("HTTP {status}: {api_message}");
            }
        }
        Self {
            kind: BackendErrorKind::HttpStatus,
            message,
            details: (!body.is_empty()).then(|| body.to_string()),
        }
    }

    /// Creates an application-level error (HTTP 200 with an error payload).
    pub fn api(message: impl Into<String>) -> Self {
        Self::new(BackendErrorKind::Api, message)
    }

    /// Classifies a transport error from reqwest.
    pub fn transport(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::new(BackendErrorKind::Timeout, "Request timed out")
        } else if error.is_connect() {
            Self::new(
                BackendErrorKind::Network,
                "Could not connect to the backend",
            )
        } else {
            Self::new(BackendErrorKind::Network, error.to_string())
        }
    }

    pub fn parse(error: impl fmt::Display) -> Self {
        Self::new(BackendErrorKind::Parse, format!("Invalid response: {error}"))
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for BackendError {}

/// Result type for backend operations.
pub type BackendResult<T> = std::result::Result<T, BackendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_extracts_nested_message() {
        let error = BackendError::http_status(500, r#"{"error":{"message":"agent crashed"}}"#);
        assert_eq!(error.message, "HTTP 500: agent crashed");
        assert_eq!(error.kind, BackendErrorKind::HttpStatus);
        assert!(error.details.is_some());
    }

    #[test]
    fn test_http_status_extracts_fastapi_detail() {
        let error = BackendError::http_status(404, r#"{"detail":"No orders found"}"#);
        assert_eq!(error.message, "HTTP 404: No orders found");
    }

    #[test]
    fn test_http_status_plain_body() {
        let error = BackendError::http_status(502, "bad gateway");
        assert_eq!(error.message, "HTTP 502");
        assert_eq!(error.details.as_deref(), Some("bad gateway"));
    }
}
