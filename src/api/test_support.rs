//! Recording transport for accessor tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::AdvantageClient;
use crate::error::AdvantageError;
use crate::execution::http::transport::{
    HttpTransport, HttpTransportRequest, HttpTransportResponse,
};
use crate::types::SegmentOrder;

pub(crate) const ENDPOINT: &str = "https://api.example.test";

/// Captures every request and answers with a fixed body.
pub(crate) struct RecordingTransport {
    pub requests: Mutex<Vec<HttpTransportRequest>>,
    body: Vec<u8>,
}

impl RecordingTransport {
    pub fn responding(body: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            body: body.as_bytes().to_vec(),
        })
    }

    pub fn last(&self) -> HttpTransportRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, AdvantageError> {
        self.requests.lock().unwrap().push(request);
        Ok(HttpTransportResponse {
            status: 200,
            body: self.body.clone(),
        })
    }
}

pub(crate) fn client_with(transport: Arc<RecordingTransport>) -> AdvantageClient {
    client_with_order(transport, SegmentOrder::default())
}

pub(crate) fn client_with_order(
    transport: Arc<RecordingTransport>,
    order: SegmentOrder,
) -> AdvantageClient {
    AdvantageClient::builder()
        .api_key("k")
        .endpoint(ENDPOINT)
        .users_segment_order(order)
        .with_http_transport(transport)
        .build()
        .unwrap()
}

/// URL relative to the test endpoint.
pub(crate) fn relative(request: &HttpTransportRequest) -> &str {
    request.url.strip_prefix(ENDPOINT).unwrap_or(&request.url)
}
