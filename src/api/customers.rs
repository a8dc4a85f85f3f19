//! Customer accessors.

use serde_json::Value;

use crate::client::AdvantageClient;
use crate::error::AdvantageError;
use crate::execution::Request;
use crate::types::ListOptions;

impl AdvantageClient {
    /// `GET /advantage/customer/{customer_number}`
    pub async fn get_customer(&self, customer_number: &str) -> Result<Value, AdvantageError> {
        self.dispatch(Request::get(format!("/advantage/customer/{customer_number}")))
            .await
    }

    /// `GET /advantage/customers/{offset}/{count}?order_direction=..&order_by=..`
    ///
    /// `order_by` is left out entirely when `options.order_by` is `None`.
    pub async fn get_customers(&self, options: ListOptions) -> Result<Value, AdvantageError> {
        let request = Request::get(format!(
            "/advantage/customers/{}/{}",
            options.offset, options.count
        ))
        .query("order_direction", options.order_direction)
        .query_opt("order_by", options.order_by);

        self.dispatch(request).await
    }

    /// `GET /advantage/user/{customer_number}`, the record that carries the
    /// customer's login credentials (`AUTH_VAL`, `PASS_WD`).
    ///
    /// Same endpoint as [`get_user`](Self::get_user).
    pub async fn get_customer_password(
        &self,
        customer_number: &str,
    ) -> Result<Value, AdvantageError> {
        self.dispatch(Request::get(format!("/advantage/user/{customer_number}")))
            .await
    }

    /// Alias of [`get_user_by_email`](Self::get_user_by_email).
    #[deprecated(note = "use get_user_by_email")]
    pub async fn get_customer_by_email(&self, email: &str) -> Result<Value, AdvantageError> {
        self.get_user_by_email(email).await
    }
}
