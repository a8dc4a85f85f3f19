//! The Advantage connector client.
//!
//! `AdvantageClient` is built once with its configuration and passed by
//! reference (or cloned; clones share state) to every call site. The
//! accessor methods live in `crate::api`.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use secrecy::SecretString;
use serde_json::Value;

use crate::builder::AdvantageBuilder;
use crate::config::{AdvantageConfig, Credentials};
use crate::error::AdvantageError;
use crate::execution::Request;
use crate::execution::dispatch::{self, DispatchConfig};
use crate::execution::http::interceptor::HttpInterceptor;
use crate::execution::http::transport::HttpTransport;
use crate::types::{SegmentOrder, StatusPolicy};

/// Client for the Advantage subscription-management API.
#[derive(Clone)]
pub struct AdvantageClient {
    credentials: Arc<RwLock<Arc<Credentials>>>,
    transport: Arc<dyn HttpTransport>,
    interceptors: Vec<Arc<dyn HttpInterceptor>>,
    users_segment_order: SegmentOrder,
    status_policy: StatusPolicy,
}

impl AdvantageClient {
    pub fn builder() -> AdvantageBuilder {
        AdvantageBuilder::new()
    }

    /// Client with default HTTP settings. Neither value is validated here;
    /// empty values make every call fail with `ConfigurationError`.
    pub fn new<K: Into<String>, E: Into<String>>(
        api_key: K,
        endpoint: E,
    ) -> Result<Self, AdvantageError> {
        Self::builder().api_key(api_key).endpoint(endpoint).build()
    }

    pub fn with_config(config: AdvantageConfig) -> Result<Self, AdvantageError> {
        AdvantageBuilder::from_config(config).build()
    }

    /// Client without credentials; call `configure` before using it.
    pub fn unconfigured() -> Result<Self, AdvantageError> {
        Self::builder().build()
    }

    pub(crate) fn from_parts(
        config: &AdvantageConfig,
        transport: Arc<dyn HttpTransport>,
        interceptors: Vec<Arc<dyn HttpInterceptor>>,
    ) -> Self {
        Self {
            credentials: Arc::new(RwLock::new(Arc::new(config.credentials()))),
            transport,
            interceptors,
            users_segment_order: config.users_segment_order,
            status_policy: config.status_policy,
        }
    }

    /// Replace the API key and endpoint together. Last call wins.
    ///
    /// Clones of this client see the new pair. A call already in flight keeps
    /// the pair it started with.
    pub fn configure<K: Into<String>, E: Into<String>>(&self, api_key: K, endpoint: E) {
        let next = Arc::new(Credentials {
            api_key: SecretString::from(api_key.into()),
            endpoint: endpoint.into(),
        });
        *self
            .credentials
            .write()
            .unwrap_or_else(PoisonError::into_inner) = next;
        tracing::debug!("connector reconfigured");
    }

    pub fn is_configured(&self) -> bool {
        self.credentials_snapshot().is_complete()
    }

    /// The configured endpoint base URL.
    pub fn endpoint(&self) -> String {
        self.credentials_snapshot().endpoint.clone()
    }

    pub(crate) fn users_segment_order(&self) -> SegmentOrder {
        self.users_segment_order
    }

    fn credentials_snapshot(&self) -> Arc<Credentials> {
        self.credentials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Run one request through the dispatch primitive.
    pub(crate) async fn dispatch(&self, request: Request) -> Result<Value, AdvantageError> {
        let credentials = self.credentials_snapshot();
        dispatch::execute(
            DispatchConfig {
                credentials: &credentials,
                transport: self.transport.as_ref(),
                interceptors: &self.interceptors,
                status_policy: self.status_policy,
            },
            request,
        )
        .await
    }
}

impl fmt::Debug for AdvantageClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvantageClient")
            .field("endpoint", &self.endpoint())
            .field("configured", &self.is_configured())
            .field("interceptors", &self.interceptors.len())
            .field("users_segment_order", &self.users_segment_order)
            .field("status_policy", &self.status_policy)
            .finish()
    }
}
