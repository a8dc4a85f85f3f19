//! HTTP client builder utilities

use crate::error::AdvantageError;
use crate::types::HttpConfig;

/// Build a `reqwest::Client` from `HttpConfig`.
///
/// # Example
/// ```rust,ignore
/// use advantage::types::HttpConfig;
/// use advantage::execution::http::client::build_http_client_from_config;
///
/// let client = build_http_client_from_config(&HttpConfig::default())?;
/// ```
pub fn build_http_client_from_config(
    config: &HttpConfig,
) -> Result<reqwest::Client, AdvantageError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    if let Some(proxy_url) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| AdvantageError::ConfigurationError(format!("Invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }

    if !config.headers.is_empty() {
        let mut headers = reqwest::header::HeaderMap::new();
        for (k, v) in &config.headers {
            let name = reqwest::header::HeaderName::from_bytes(k.as_bytes()).map_err(|e| {
                AdvantageError::ConfigurationError(format!("Invalid header name '{k}': {e}"))
            })?;
            let value = reqwest::header::HeaderValue::from_str(v).map_err(|e| {
                AdvantageError::ConfigurationError(format!("Invalid header value for '{k}': {e}"))
            })?;
            headers.insert(name, value);
        }
        builder = builder.default_headers(headers);
    }

    builder.build().map_err(|e| {
        AdvantageError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
    })
}
