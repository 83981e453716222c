//! Structured error body returned by the backend on any failed request.
//!
//! Shape: `{success: false, message, errorSources: [{path, message}]}`.
//! `errorSources` carries backend validation detail; the first entry is the
//! one surfaced to the user.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorSource {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "errorSources", default)]
    pub error_sources: Vec<ErrorSource>,
}

impl ApiErrorBody {
    /// Reduce the body to one toast line: first error source as
    /// `"path: message"`, else the top-level message, else the caller's
    /// fallback.
    pub fn toast_message(&self, fallback: &str) -> String {
        if let Some(source) = self.error_sources.first() {
            return format!("{}: {}", source.path, source.message);
        }
        match &self.message {
            Some(msg) if !msg.trim().is_empty() => msg.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Parse a raw response body and reduce it in one step. Non-JSON bodies
    /// (proxy error pages, empty responses) collapse to the fallback.
    pub fn extract(raw: &str, fallback: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(raw) {
            Ok(body) => body.toast_message(fallback),
            Err(_) => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "Failed to create doc. Please try again.";

    #[test]
    fn first_error_source_wins() {
        let raw = r#"{"success":false,"message":"Validation Error","errorSources":[{"path":"title","message":"too short"},{"path":"excerpt","message":"missing"}]}"#;
        assert_eq!(ApiErrorBody::extract(raw, FALLBACK), "title: too short");
    }

    #[test]
    fn message_used_when_no_sources() {
        let raw = r#"{"success":false,"message":"Doc not found"}"#;
        assert_eq!(ApiErrorBody::extract(raw, FALLBACK), "Doc not found");
    }

    #[test]
    fn fallback_on_empty_or_garbage_body() {
        assert_eq!(ApiErrorBody::extract("", FALLBACK), FALLBACK);
        assert_eq!(ApiErrorBody::extract("<html>502</html>", FALLBACK), FALLBACK);
        let raw = r#"{"success":false,"message":"   "}"#;
        assert_eq!(ApiErrorBody::extract(raw, FALLBACK), FALLBACK);
    }
}
