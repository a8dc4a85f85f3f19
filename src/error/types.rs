//! Error types for the Advantage connector.

use thiserror::Error;

/// Coarse classification used by callers that only care about the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The client is not configured, or configured with values that cannot be used.
    Configuration,
    /// The request never produced a readable response.
    Transport,
    /// The remote API answered with a non-success status (strict status policy only).
    Api,
    /// JSON could not be produced or mapped onto a typed view.
    Parsing,
}

/// Errors returned by the connector.
///
/// A response body that is not valid JSON is *not* an error: dispatch returns
/// an empty object instead.
#[derive(Debug, Error)]
pub enum AdvantageError {
    /// Missing or unusable configuration. Raised before any network I/O.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Connection, timeout or body-read failure.
    #[error("Transport error: {0}")]
    TransportError(String),

    /// Non-2xx response when the client runs with `StatusPolicy::Strict`.
    #[error("API error {code}: {message}")]
    ApiError {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// JSON serialization or typed decoding failure.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl AdvantageError {
    /// Shorthand for an `ApiError` without details.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// The error used whenever an accessor runs without credentials.
    pub fn not_configured() -> Self {
        Self::ConfigurationError(
            "API key and endpoint must be configured before making calls".to_string(),
        )
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError(_) => ErrorCategory::Configuration,
            Self::TransportError(_) => ErrorCategory::Transport,
            Self::ApiError { .. } => ErrorCategory::Api,
            Self::JsonError(_) => ErrorCategory::Parsing,
        }
    }

    /// HTTP status carried by the error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::ConfigurationError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AdvantageError::ConfigurationError("missing key".into());
        assert_eq!(error.to_string(), "Configuration error: missing key");

        let error = AdvantageError::api_error(502, "Bad Gateway");
        assert_eq!(error.to_string(), "API error 502: Bad Gateway");
    }

    #[test]
    fn test_categories() {
        assert_eq!(
            AdvantageError::not_configured().category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            AdvantageError::TransportError("refused".into()).category(),
            ErrorCategory::Transport
        );
        assert_eq!(
            AdvantageError::JsonError("eof".into()).category(),
            ErrorCategory::Parsing
        );
        assert!(AdvantageError::not_configured().is_configuration_error());
    }

    #[test]
    fn test_status_code_only_for_api_errors() {
        assert_eq!(AdvantageError::api_error(404, "nope").status_code(), Some(404));
        assert_eq!(
            AdvantageError::TransportError("timeout".into()).status_code(),
            None
        );
    }
}
