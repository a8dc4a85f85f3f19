//! Coupon accessors.

use serde_json::Value;

use crate::client::AdvantageClient;
use crate::error::AdvantageError;
use crate::execution::Request;

impl AdvantageClient {
    /// `GET /advantage/coupon/{name}`
    pub async fn get_coupon(&self, name: &str) -> Result<Value, AdvantageError> {
        self.dispatch(Request::get(format!("/advantage/coupon/{name}")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{RecordingTransport, client_with, relative};
    use serde_json::json;

    #[tokio::test]
    async fn get_coupon_path_and_key() {
        let transport = RecordingTransport::responding(r#"{"name":"SPRING","discount":10}"#);
        let client = client_with(transport.clone());

        let value = client.get_coupon("SPRING").await.unwrap();

        let request = transport.last();
        assert_eq!(relative(&request), "/advantage/coupon/SPRING");
        assert_eq!(request.headers.get("x-api-key").unwrap(), "k");
        assert_eq!(value, json!({"name": "SPRING", "discount": 10}));
    }

    #[tokio::test]
    async fn get_coupon_soft_decode_failure() {
        let transport = RecordingTransport::responding("Coupon service unavailable");
        let client = client_with(transport.clone());

        let value = client.get_coupon("SPRING").await.unwrap();

        assert_eq!(value, json!({}));
        assert!(value.get("discount").is_none());
    }
}
