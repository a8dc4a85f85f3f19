//! HTTP header building for Advantage requests.

use crate::defaults::http::API_KEY_HEADER;
use crate::error::AdvantageError;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

/// HTTP header builder for API requests
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }

    /// Add the `X-Api-Key` header. The value is marked sensitive so it is
    /// hidden from `Debug` output.
    pub fn with_api_key(mut self, api_key: &str) -> Result<Self, AdvantageError> {
        let mut value = HeaderValue::from_str(api_key).map_err(|e| {
            AdvantageError::ConfigurationError(format!("Invalid API key format: {e}"))
        })?;
        value.set_sensitive(true);
        self.headers
            .insert(HeaderName::from_static(API_KEY_HEADER), value);
        Ok(self)
    }

    /// Add JSON content type
    pub fn with_json_content_type(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self
    }

    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

impl Default for HttpHeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
