//! HTTP transport abstraction.
//!
//! Dispatch hands a fully built request (final URL, headers, optional JSON
//! body) to an `HttpTransport`. The default transport is `reqwest`; tests and
//! callers can inject their own to observe requests or return synthetic
//! responses without touching the network.

use crate::error::AdvantageError;
use crate::execution::http::interceptor::HttpRequestContext;
use async_trait::async_trait;
use reqwest::header::HeaderMap;

/// Transport-level request data.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    pub ctx: HttpRequestContext,
    pub method: reqwest::Method,
    pub url: String,
    pub headers: HeaderMap,
    /// JSON body; `None` for GET.
    pub body: Option<serde_json::Value>,
}

/// Transport-level response data: the status and the raw body bytes.
#[derive(Debug, Clone)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpTransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the raw response.
///
/// Implementations must not retry and must not interpret the status code:
/// any response that arrives is returned as `Ok`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, AdvantageError>;
}

/// `HttpTransport` backed by a `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, AdvantageError> {
        let mut rb = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = &request.body {
            rb = rb.json(body);
        }

        let response = rb.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(HttpTransportResponse {
            status,
            body,
        })
    }
}
