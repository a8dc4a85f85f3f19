//! Type Conversions for AdvantageError

use super::types::AdvantageError;

impl From<reqwest::Error> for AdvantageError {
    fn from(err: reqwest::Error) -> Self {
        Self::TransportError(err.to_string())
    }
}

impl From<serde_json::Error> for AdvantageError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}
