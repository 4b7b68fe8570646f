/*
[INPUT]:  Error sources (transport, API status, decoding, caller misuse)
[OUTPUT]: Structured error types with status context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use serde_json::Value;
use thiserror::Error;

/// Main error type for the Firi adapter
#[derive(Error, Debug)]
pub enum FiriError {
    /// Client was constructed with unusable input
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller-supplied parameter rejected before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Network-level failure (DNS, connect, timeout); no HTTP status
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// API returned a non-success HTTP status
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        /// Parsed JSON error body, when the API sent one
        payload: Option<Value>,
    },

    /// Successful round trip but the response body was not valid JSON
    #[error("Invalid JSON in response (status {status})")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// Base URL or endpoint path could not be parsed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl FiriError {
    /// HTTP status attached to the error, when one exists
    pub fn status(&self) -> Option<u16> {
        match self {
            FiriError::Api { status, .. } | FiriError::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the error is retryable by a caller-side retry policy.
    /// The adapter itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            FiriError::Transport(_) => true,
            FiriError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Server/transport errors may be converted into the structured error
    /// value when `raise_on_error` is disabled. Validation, configuration and
    /// URL errors are caller misuse and always propagate.
    pub(crate) fn is_suppressible(&self) -> bool {
        matches!(
            self,
            FiriError::Transport(_) | FiriError::Api { .. } | FiriError::Decode { .. }
        )
    }

    /// Render the error as the `{"error": ..., "status": ...}` payload
    /// returned in suppression mode. `status` is omitted when the failure
    /// carried no HTTP status.
    pub(crate) fn to_error_value(&self) -> Value {
        let message = match self {
            FiriError::Api { message, .. } => message.clone(),
            FiriError::Decode { .. } => "Invalid JSON in response".to_string(),
            other => other.to_string(),
        };
        let mut map = serde_json::Map::new();
        map.insert("error".to_string(), Value::from(message));
        if let Some(status) = self.status() {
            map.insert("status".to_string(), Value::from(status));
        }
        Value::Object(map)
    }
}

/// Result type alias for Firi operations
pub type Result<T> = std::result::Result<T, FiriError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status() {
        let err = FiriError::Api {
            status: 404,
            message: "not found".to_string(),
            payload: None,
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(FiriError::Validation("bad count".to_string()).status(), None);
    }

    #[test]
    fn test_error_retryable() {
        let err = FiriError::Api {
            status: 503,
            message: "unavailable".to_string(),
            payload: None,
        };
        assert!(err.is_retryable());

        let err = FiriError::Api {
            status: 400,
            message: "bad request".to_string(),
            payload: None,
        };
        assert!(!err.is_retryable());
        assert!(!FiriError::Config("empty token".to_string()).is_retryable());
    }

    #[test]
    fn test_suppressible_classes() {
        let api = FiriError::Api {
            status: 404,
            message: "not found".to_string(),
            payload: None,
        };
        assert!(api.is_suppressible());
        assert!(!FiriError::Validation("empty market".to_string()).is_suppressible());
        assert!(!FiriError::Config("empty token".to_string()).is_suppressible());
    }

    #[test]
    fn test_error_value_shape() {
        let api = FiriError::Api {
            status: 404,
            message: "not found".to_string(),
            payload: None,
        };
        let value = api.to_error_value();
        assert_eq!(value["error"], "not found");
        assert_eq!(value["status"], 404);
    }

    #[test]
    fn test_error_value_omits_missing_status() {
        let err = FiriError::Validation("unused".to_string());
        // Validation never reaches suppression, but the renderer must still
        // omit `status` for statusless errors.
        let value = err.to_error_value();
        assert!(value.get("status").is_none());
        assert!(value.get("error").is_some());
    }
}
