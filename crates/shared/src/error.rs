//! Shared error types including RFC7807 Problem Details.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RFC7807 Problem Details (application/problem+json)
///
/// The console backend answers failed `/api/*` calls with this envelope, so
/// the client can show the server's own explanation instead of a bare status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type", default)]
    pub type_url: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// HTTP status code.
    pub status: u16,
    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// A URI reference that identifies the specific occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

/// Attempt to parse an RFC7807 (or RFC7807-ish) JSON body into a user-facing message.
/// Prefers `detail`, falls back to `title`.
pub fn try_problem_detail(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ProblemDetails>(body).ok()?;
    if let Some(detail) = parsed.detail {
        if !detail.trim().is_empty() {
            return Some(detail);
        }
    }
    if !parsed.title.trim().is_empty() {
        return Some(parsed.title);
    }
    None
}

/// API error type for client-side use
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The message shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { body, .. } => try_problem_detail(body).unwrap_or_else(|| self.to_string()),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_detail_prefers_detail_over_title() {
        let body = r#"{"type":"about:blank","title":"Conflict","status":409,"detail":"conflict"}"#;
        assert_eq!(try_problem_detail(body).as_deref(), Some("conflict"));
    }

    #[test]
    fn problem_detail_falls_back_to_title() {
        let body = r#"{"title":"Forbidden","status":403,"detail":"   "}"#;
        assert_eq!(try_problem_detail(body).as_deref(), Some("Forbidden"));
    }

    #[test]
    fn non_problem_bodies_are_ignored() {
        assert_eq!(try_problem_detail("<html>bad gateway</html>"), None);
    }

    #[test]
    fn user_message_uses_problem_detail_for_http_errors() {
        let err = ApiError::Http {
            status: 409,
            body: r#"{"title":"Conflict","status":409,"detail":"conflict"}"#.to_string(),
        };
        assert_eq!(err.user_message(), "conflict");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn user_message_falls_back_to_display() {
        let http = ApiError::Http {
            status: 502,
            body: "upstream down".to_string(),
        };
        assert_eq!(http.user_message(), "HTTP 502: upstream down");

        let net = ApiError::Network("connection refused".to_string());
        assert_eq!(net.user_message(), "Network error: connection refused");
        assert_eq!(net.status(), None);
    }
}
