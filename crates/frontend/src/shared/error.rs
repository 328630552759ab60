//! Transport errors and their user-facing text.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response (connection refused, CORS, abort)
    #[error("Network error: {0}")]
    Network(String),

    /// Response arrived with a non-2xx status
    #[error("HTTP {status}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Human-readable message for a failed request.
///
/// A JSON body of the form `{"error": "..."}` wins, then a plain-text body,
/// then a generic status line. The result is never empty.
pub fn error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { status, body } => {
            let body = body.trim();
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
                if let Some(msg) = value
                    .get("error")
                    .or_else(|| value.get("message"))
                    .and_then(|v| v.as_str())
                    .filter(|s| !s.trim().is_empty())
                {
                    return msg.to_string();
                }
            } else if !body.is_empty() && !body.starts_with('<') {
                return body.to_string();
            }
            format!("Request failed with status code {}", status)
        }
        ApiError::Network(msg) if msg.trim().is_empty() => "Network Error".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16, body: &str) -> ApiError {
        ApiError::Status {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_json_error_field_wins() {
        let err = status(400, r#"{"error":"Integration is in use"}"#);
        assert_eq!(error_message(&err), "Integration is in use");
    }

    #[test]
    fn test_plain_text_body() {
        let err = status(403, "forbidden\n");
        assert_eq!(error_message(&err), "forbidden");
    }

    #[test]
    fn test_falls_back_to_status_line() {
        assert_eq!(
            error_message(&status(500, "")),
            "Request failed with status code 500"
        );
        assert_eq!(
            error_message(&status(502, "<html>Bad gateway</html>")),
            "Request failed with status code 502"
        );
        assert_eq!(
            error_message(&status(500, r#"{"error":""}"#)),
            "Request failed with status code 500"
        );
    }

    #[test]
    fn test_transport_errors() {
        assert_eq!(
            error_message(&ApiError::Network(String::new())),
            "Network Error"
        );
        assert_eq!(
            error_message(&ApiError::Network("connection refused".into())),
            "Network error: connection refused"
        );
        assert!(!error_message(&ApiError::Decode("eof".into())).is_empty());
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(status(404, "").status(), Some(404));
        assert_eq!(ApiError::Network("x".into()).status(), None);
    }
}
