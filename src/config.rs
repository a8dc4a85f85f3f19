//! Connector configuration.

use crate::defaults;
use crate::error::AdvantageError;
use crate::types::{HttpConfig, SegmentOrder, StatusPolicy};
use secrecy::{ExposeSecret, SecretString};

/// Everything needed to talk to one Advantage deployment.
#[derive(Debug, Clone)]
pub struct AdvantageConfig {
    /// Value of the `X-Api-Key` header
    pub api_key: SecretString,
    /// Base URL, without a trailing slash (e.g. `https://api.example.test`)
    pub endpoint: String,
    pub http_config: HttpConfig,
    pub users_segment_order: SegmentOrder,
    pub status_policy: StatusPolicy,
}

impl AdvantageConfig {
    pub fn new<K: Into<String>, E: Into<String>>(api_key: K, endpoint: E) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            endpoint: endpoint.into(),
            http_config: HttpConfig::default(),
            users_segment_order: SegmentOrder::default(),
            status_policy: StatusPolicy::default(),
        }
    }

    /// Read the key and endpoint from `AC_KEY` / `AC_ENDPOINT`.
    pub fn from_env() -> Result<Self, AdvantageError> {
        let read = |name: &str| {
            std::env::var(name).map_err(|_| {
                AdvantageError::ConfigurationError(format!(
                    "environment variable {name} is not set"
                ))
            })
        };
        Ok(Self::new(
            read(defaults::env::API_KEY)?,
            read(defaults::env::ENDPOINT)?,
        ))
    }

    pub fn with_http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    pub fn with_users_segment_order(mut self, order: SegmentOrder) -> Self {
        self.users_segment_order = order;
        self
    }

    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.status_policy = policy;
        self
    }

    pub(crate) fn credentials(&self) -> Credentials {
        Credentials {
            api_key: self.api_key.clone(),
            endpoint: self.endpoint.clone(),
        }
    }
}

/// The key/endpoint pair. Always replaced as a unit.
#[derive(Debug, Clone)]
pub(crate) struct Credentials {
    pub(crate) api_key: SecretString,
    pub(crate) endpoint: String,
}

impl Credentials {
    pub(crate) fn empty() -> Self {
        Self {
            api_key: SecretString::from(String::new()),
            endpoint: String::new(),
        }
    }

    pub(crate) fn is_complete(&self) -> bool {
        !self.api_key.expose_secret().is_empty() && !self.endpoint.is_empty()
    }
}
