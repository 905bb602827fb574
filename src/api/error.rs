use serde_json::Value;
use std::fmt;

/// Errors surfaced by the API client.
///
/// Non-2xx responses carry the parsed JSON error body so callers can render
/// field-level validation messages. Network failures are not distinguished
/// beyond the variant.
#[derive(Clone, Debug)]
pub enum ApiError {
    Network(String),
    Api { status: u16, details: Value },
    Parse(String),
}

impl ApiError {
    /// HTTP status of the failing response, if the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The backend's `{"details": "..."}` message, when present.
    #[must_use]
    pub fn details_message(&self) -> Option<&str> {
        match self {
            ApiError::Api { details, .. } => details.get("details").and_then(Value::as_str),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(message) => write!(formatter, "Network error: {message}"),
            ApiError::Api { status, details } => {
                if let Some(message) = details.get("details").and_then(Value::as_str) {
                    write!(formatter, "Request failed ({status}): {message}")
                } else {
                    write!(formatter, "Request failed ({status}): {details}")
                }
            }
            ApiError::Parse(message) => write!(formatter, "Response error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_renders_details_message() {
        let err = ApiError::Api {
            status: 400,
            details: json!({"details": "Invalid password"}),
        };
        assert_eq!(err.to_string(), "Request failed (400): Invalid password");
        assert_eq!(err.details_message(), Some("Invalid password"));
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn display_falls_back_to_raw_payload() {
        let err = ApiError::Api {
            status: 400,
            details: json!({"email": ["Enter a valid email address."]}),
        };
        assert!(err.to_string().contains("email"));
        assert_eq!(err.details_message(), None);
    }

    #[test]
    fn network_errors_have_no_status() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("connection refused"));
    }
}
