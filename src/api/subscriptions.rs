//! Subscription accessors.

use chrono::NaiveDate;
use serde_json::{Value, json};

use crate::client::AdvantageClient;
use crate::defaults::accessors;
use crate::error::AdvantageError;
use crate::execution::Request;
use crate::types::{DateType, SubscriptionQuery};

/// Today's local date, used when a `bydate` lookup has no date.
fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl AdvantageClient {
    /// `GET /advantage/subscription/bydate/{date}/{kind}`
    ///
    /// `date` defaults to today (local time).
    pub async fn get_subscriptions_by_date(
        &self,
        date: Option<NaiveDate>,
        kind: DateType,
    ) -> Result<Value, AdvantageError> {
        let date = date.unwrap_or_else(today);
        self.dispatch(Request::get(format!(
            "/advantage/subscription/bydate/{}/{kind}",
            date.format(accessors::DATE_FORMAT)
        )))
        .await
    }

    /// `GET /advantage/subscription/{publication}/{customer_number}?offset=..&count=..&active=..`
    ///
    /// The publication code is percent-encoded, so the `*` wildcard goes out as `%2A`.
    pub async fn get_subscriptions(
        &self,
        customer_number: &str,
        query: SubscriptionQuery,
    ) -> Result<Value, AdvantageError> {
        let request = Request::get(format!(
            "/advantage/subscription/{}/{customer_number}",
            urlencoding::encode(&query.publication_code)
        ))
        .query("offset", query.offset)
        .query("count", query.count)
        .query("active", query.active);

        self.dispatch(request).await
    }

    /// `GET /advantage/subscription/{publication}/{customer_number}`
    ///
    /// `publication_code` defaults to `WNG` and is sent as given.
    pub async fn get_subscriptions_for_customer(
        &self,
        customer_number: &str,
        publication_code: Option<&str>,
    ) -> Result<Value, AdvantageError> {
        let publication = publication_code.unwrap_or(accessors::DEFAULT_PUBLICATION);
        self.dispatch(Request::get(format!(
            "/advantage/subscription/{publication}/{customer_number}"
        )))
        .await
    }

    /// `POST /advantage/subscription/adjust-bill-to` with
    /// `{"AddressCode": .., "CustomerNumber": ..}`.
    #[deprecated(note = "the remote adjust-bill-to endpoint is not functional")]
    pub async fn change_address_code(
        &self,
        customer_number: &str,
        address_code: &str,
    ) -> Result<Value, AdvantageError> {
        let body = json!({
            "AddressCode": address_code,
            "CustomerNumber": customer_number,
        });
        self.dispatch(Request::post("/advantage/subscription/adjust-bill-to", body))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::today;
    use crate::api::test_support::{RecordingTransport, client_with, relative};
    use crate::types::{DateType, SubscriptionQuery};
    use chrono::NaiveDate;
    use serde_json::json;

    #[tokio::test]
    async fn by_date_with_explicit_date() {
        let transport = RecordingTransport::responding("{}");
        let client = client_with(transport.clone());

        let date = NaiveDate::from_ymd_opt(2023, 6, 6).unwrap();
        client
            .get_subscriptions_by_date(Some(date), DateType::Expiration)
            .await
            .unwrap();

        assert_eq!(
            relative(&transport.last()),
            "/advantage/subscription/bydate/2023-06-06/expiration"
        );
    }

    #[tokio::test]
    async fn by_date_defaults_to_today() {
        let transport = RecordingTransport::responding(r#"{"count":0,"returned":0,"items":[]}"#);
        let client = client_with(transport.clone());

        let value = client
            .get_subscriptions_by_date(None, DateType::default())
            .await
            .unwrap();

        let expected = format!(
            "/advantage/subscription/bydate/{}/created",
            today().format("%Y-%m-%d")
        );
        assert_eq!(relative(&transport.last()), expected);
        assert_eq!(value, json!({"count": 0, "returned": 0, "items": []}));
    }

    #[tokio::test]
    async fn get_subscriptions_with_filters() {
        let transport = RecordingTransport::responding("{}");
        let client = client_with(transport.clone());

        let query = SubscriptionQuery::new()
            .publication("ABC")
            .offset(5)
            .count(10)
            .active(true);
        client.get_subscriptions("000123", query).await.unwrap();

        assert_eq!(
            relative(&transport.last()),
            "/advantage/subscription/ABC/000123?offset=5&count=10&active=true"
        );
    }

    #[tokio::test]
    async fn get_subscriptions_defaults_encode_wildcard() {
        let transport = RecordingTransport::responding("{}");
        let client = client_with(transport.clone());

        client
            .get_subscriptions("000123", SubscriptionQuery::default())
            .await
            .unwrap();

        assert_eq!(
            relative(&transport.last()),
            "/advantage/subscription/%2A/000123?offset=0&count=100&active=false"
        );
    }

    #[tokio::test]
    async fn publication_code_uses_rfc3986_encoding() {
        let transport = RecordingTransport::responding("{}");
        let client = client_with(transport.clone());

        client
            .get_subscriptions("000123", SubscriptionQuery::new().publication("A B~*"))
            .await
            .unwrap();

        assert_eq!(
            relative(&transport.last()),
            "/advantage/subscription/A%20B~%2A/000123?offset=0&count=100&active=false"
        );
    }

    #[tokio::test]
    async fn for_customer_uses_default_publication() {
        let transport = RecordingTransport::responding("{}");
        let client = client_with(transport.clone());

        client
            .get_subscriptions_for_customer("000123", None)
            .await
            .unwrap();
        assert_eq!(
            relative(&transport.last()),
            "/advantage/subscription/WNG/000123"
        );

        client
            .get_subscriptions_for_customer("000123", Some("XYZ"))
            .await
            .unwrap();
        assert_eq!(
            relative(&transport.last()),
            "/advantage/subscription/XYZ/000123"
        );
    }

    #[tokio::test]
    #[allow(deprecated)]
    async fn change_address_code_posts_json_body() {
        let transport = RecordingTransport::responding(r#"{"status":"ok"}"#);
        let client = client_with(transport.clone());

        client.change_address_code("000123", "HOME").await.unwrap();

        let request = transport.last();
        assert_eq!(request.method, reqwest::Method::POST);
        assert_eq!(
            relative(&request),
            "/advantage/subscription/adjust-bill-to"
        );
        assert_eq!(
            request.body,
            Some(json!({"AddressCode": "HOME", "CustomerNumber": "000123"}))
        );
        assert_eq!(
            request.headers.get("content-type").unwrap(),
            "application/json"
        );
    }
}
