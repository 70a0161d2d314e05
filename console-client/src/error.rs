//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Fallback notification text when the backend provides no detail.
pub const UNKNOWN_ERROR: &str = "Something went wrong, please try again";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource already exists
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other backend rejection
    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// No group identifier configured for a group-scoped call
    #[error("No group configured")]
    MissingGroup,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Map a non-success status and its body to an error variant.
    pub(crate) fn from_status(status: StatusCode, body: &str) -> Self {
        let detail = extract_detail(body);
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden(detail),
            StatusCode::NOT_FOUND => ClientError::NotFound(detail),
            StatusCode::BAD_REQUEST => ClientError::Validation(detail),
            StatusCode::CONFLICT => ClientError::Conflict(detail),
            _ => ClientError::Api {
                status: status.as_u16(),
                detail,
            },
        }
    }

    /// Human-readable text for a transient notification. Never panics;
    /// anything without a usable detail falls back to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Unauthorized => "Please log in first".to_string(),
            ClientError::MissingGroup => "No group is configured".to_string(),
            ClientError::Forbidden(detail)
            | ClientError::NotFound(detail)
            | ClientError::Validation(detail)
            | ClientError::Conflict(detail)
            | ClientError::Api { detail, .. }
                if !detail.is_empty() =>
            {
                detail.clone()
            }
            ClientError::Http(err) if err.is_timeout() => {
                "The server took too long to respond".to_string()
            }
            ClientError::Http(err) if err.is_connect() => {
                "Could not reach the server".to_string()
            }
            _ => UNKNOWN_ERROR.to_string(),
        }
    }
}

/// Error bodies carry a `detail` field; fall back to the raw body, then
/// to the generic message.
fn extract_detail(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(detail) = value.get("detail")
    {
        return match detail {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        };
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let err = ClientError::from_status(StatusCode::NOT_FOUND, r#"{"detail": "Post not found"}"#);
        assert!(matches!(err, ClientError::NotFound(ref d) if d == "Post not found"));

        let err = ClientError::from_status(StatusCode::BAD_REQUEST, r#"{"detail": "Unknown status_code: XX"}"#);
        assert!(matches!(err, ClientError::Validation(_)));

        let err = ClientError::from_status(StatusCode::UNAUTHORIZED, "");
        assert!(matches!(err, ClientError::Unauthorized));

        let err = ClientError::from_status(StatusCode::BAD_GATEWAY, "");
        assert!(matches!(err, ClientError::Api { status: 502, .. }));
    }

    #[test]
    fn detail_extraction_falls_back() {
        assert_eq!(extract_detail(r#"{"detail": "nope"}"#), "nope");
        assert_eq!(extract_detail("plain text"), "plain text");
        assert_eq!(extract_detail("  "), UNKNOWN_ERROR);
        // structured details are kept as JSON text
        assert_eq!(extract_detail(r#"{"detail": {"field": "qty"}}"#), r#"{"field":"qty"}"#);
    }

    #[test]
    fn user_message_prefers_backend_detail() {
        let err = ClientError::from_status(StatusCode::CONFLICT, r#"{"detail": "status_code already exists"}"#);
        assert_eq!(err.user_message(), "status_code already exists");

        let err = ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(err.user_message(), UNKNOWN_ERROR);

        assert_eq!(ClientError::Unauthorized.user_message(), "Please log in first");
    }
}
