//! User accessors.

use serde_json::Value;

use crate::client::AdvantageClient;
use crate::error::AdvantageError;
use crate::execution::Request;
use crate::types::{ListOptions, SegmentOrder};

impl AdvantageClient {
    /// `GET /advantage/user/{customer_number}`
    pub async fn get_user(&self, customer_number: &str) -> Result<Value, AdvantageError> {
        self.dispatch(Request::get(format!("/advantage/user/{customer_number}")))
            .await
    }

    /// `GET /advantage/user/email/{email}`
    pub async fn get_user_by_email(&self, email: &str) -> Result<Value, AdvantageError> {
        self.dispatch(Request::get(format!("/advantage/user/email/{email}")))
            .await
    }

    /// `GET /advantage/users/{count}/{offset}?order_direction=..&order_by=..`
    ///
    /// The paging segments are `{count}/{offset}`, the reverse of
    /// [`get_customers`](Self::get_customers), unless the client was built
    /// with `SegmentOrder::OffsetCount`.
    pub async fn get_users(&self, options: ListOptions) -> Result<Value, AdvantageError> {
        let (first, second) = match self.users_segment_order() {
            SegmentOrder::CountOffset => (options.count, options.offset),
            SegmentOrder::OffsetCount => (options.offset, options.count),
        };
        let request = Request::get(format!("/advantage/users/{first}/{second}"))
            .query("order_direction", options.order_direction)
            .query_opt("order_by", options.order_by);

        self.dispatch(request).await
    }
}
