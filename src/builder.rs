//! `AdvantageClient` builder.

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use crate::client::AdvantageClient;
use crate::config::AdvantageConfig;
use crate::error::AdvantageError;
use crate::execution::http::client::build_http_client_from_config;
use crate::execution::http::interceptor::{HttpInterceptor, LoggingInterceptor};
use crate::execution::http::transport::{HttpTransport, ReqwestTransport};
use crate::types::{SegmentOrder, StatusPolicy};

/// Builder for `AdvantageClient`.
///
/// ```rust,ignore
/// let client = AdvantageClient::builder()
///     .api_key("key")
///     .endpoint("https://api.example.test")
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
#[derive(Clone)]
pub struct AdvantageBuilder {
    config: AdvantageConfig,
    http_client: Option<reqwest::Client>,
    http_transport: Option<Arc<dyn HttpTransport>>,
    http_interceptors: Vec<Arc<dyn HttpInterceptor>>,
    http_debug: bool,
}

impl AdvantageBuilder {
    pub fn new() -> Self {
        Self::from_config(AdvantageConfig::new("", ""))
    }

    pub fn from_config(config: AdvantageConfig) -> Self {
        Self {
            config,
            http_client: None,
            http_transport: None,
            http_interceptors: Vec::new(),
            http_debug: false,
        }
    }

    /// Set the API key sent as `X-Api-Key`
    pub fn api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.config.api_key = SecretString::from(api_key.into());
        self
    }

    /// Set the endpoint base URL (no trailing slash)
    pub fn endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    // === HTTP Configuration ===

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.http_config.timeout = Some(timeout);
        self
    }

    /// Set connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.http_config.connect_timeout = Some(timeout);
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.config.http_config.user_agent = Some(user_agent.into());
        self
    }

    pub fn proxy<S: Into<String>>(mut self, proxy: S) -> Self {
        self.config.http_config.proxy = Some(proxy.into());
        self
    }

    /// Add a default header sent with every request
    pub fn header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.config
            .http_config
            .headers
            .insert(name.into(), value.into());
        self
    }

    /// Use a custom HTTP client (takes precedence over the HTTP settings above)
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Use a custom transport instead of `reqwest`
    pub fn with_http_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.http_transport = Some(transport);
        self
    }

    pub fn with_http_interceptor(mut self, interceptor: Arc<dyn HttpInterceptor>) -> Self {
        self.http_interceptors.push(interceptor);
        self
    }

    /// Enable a built-in logging interceptor for HTTP debugging (no sensitive data).
    pub fn http_debug(mut self, enabled: bool) -> Self {
        self.http_debug = enabled;
        self
    }

    // === Behaviour ===

    /// Path segment order for `get_users`
    pub fn users_segment_order(mut self, order: SegmentOrder) -> Self {
        self.config.users_segment_order = order;
        self
    }

    pub fn status_policy(mut self, policy: StatusPolicy) -> Self {
        self.config.status_policy = policy;
        self
    }

    pub fn build(self) -> Result<AdvantageClient, AdvantageError> {
        let transport: Arc<dyn HttpTransport> = match self.http_transport {
            Some(transport) => transport,
            None => {
                let http_client = match self.http_client {
                    Some(client) => client,
                    None => build_http_client_from_config(&self.config.http_config)?,
                };
                Arc::new(ReqwestTransport::new(http_client))
            }
        };

        let mut interceptors = self.http_interceptors;
        if self.http_debug {
            interceptors.push(Arc::new(LoggingInterceptor));
        }

        Ok(AdvantageClient::from_parts(
            &self.config,
            transport,
            interceptors,
        ))
    }
}

impl Default for AdvantageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_creates_configured_client() {
        let client = AdvantageBuilder::new()
            .api_key("k")
            .endpoint("https://api.example.test")
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .user_agent("billing-sync/1.0")
            .header("X-Source", "tests")
            .build()
            .unwrap();
        assert!(client.is_configured());
        assert_eq!(client.endpoint(), "https://api.example.test");
    }

    #[test]
    fn builder_without_credentials_is_unconfigured() {
        let client = AdvantageBuilder::default().build().unwrap();
        assert!(!client.is_configured());
    }

    #[test]
    fn builder_rejects_invalid_proxy() {
        let err = AdvantageBuilder::new()
            .api_key("k")
            .endpoint("https://api.example.test")
            .proxy("::not a proxy::")
            .build()
            .unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn custom_client_skips_http_config() {
        // The invalid proxy is never applied because a client is supplied.
        let result = AdvantageBuilder::new()
            .proxy("::not a proxy::")
            .with_http_client(reqwest::Client::new())
            .build();
        assert!(result.is_ok());
    }
}
