//! Optional typed views over the JSON the API returns.
//!
//! Accessors always hand back `serde_json::Value`; these types are for callers
//! that want to map a known response shape onto a struct.

use crate::error::AdvantageError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Decode a returned value into a typed view.
pub fn decode_as<T: DeserializeOwned>(value: &Value) -> Result<T, AdvantageError> {
    Ok(T::deserialize(value)?)
}

/// A listing envelope: `{"count": .., "returned": .., "items": [..]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T = Value> {
    /// Total matches on the server.
    pub count: u64,
    /// Number of entries in `items`.
    pub returned: u64,
    #[serde(default)]
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the server reports more matches than were returned.
    pub fn has_more(&self) -> bool {
        self.returned < self.count
    }
}

/// The user record returned by `get_user` and `get_customer_password`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "CTM_NBR")]
    pub customer_number: Option<String>,
    #[serde(rename = "CVI_NBR", default)]
    pub cvi_number: Option<Value>,
    #[serde(rename = "AUTH_VAL", default)]
    pub auth_value: Option<String>,
    #[serde(rename = "PASS_WD", default)]
    pub password: Option<String>,
    /// Every other field, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("customer_number", &self.customer_number)
            .field("cvi_number", &self.cvi_number)
            .field("auth_value", &self.auth_value)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("extra", &self.extra)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_from_listing() {
        let value = json!({"count": 3, "returned": 2, "items": [{"id": 1}, {"id": 2}]});
        let page: Page = decode_as(&value).unwrap();
        assert_eq!(page.items.len(), 2);
        assert!(page.has_more());

        let empty: Page = decode_as(&json!({"count": 0, "returned": 0, "items": []})).unwrap();
        assert!(empty.is_empty());
        assert!(!empty.has_more());
    }

    #[test]
    fn page_from_soft_failure_is_an_error() {
        let err = decode_as::<Page>(&json!({})).unwrap_err();
        assert!(matches!(err, AdvantageError::JsonError(_)));
    }

    #[test]
    fn user_record_keeps_unknown_fields_and_redacts_password() {
        let value = json!({
            "CTM_NBR": "000123",
            "CVI_NBR": 7,
            "AUTH_VAL": "reader@example.test",
            "PASS_WD": "hunter2",
            "NAME": "Reader"
        });
        let user: UserRecord = decode_as(&value).unwrap();
        assert_eq!(user.customer_number.as_deref(), Some("000123"));
        assert_eq!(user.extra.get("NAME"), Some(&json!("Reader")));

        let debug = format!("{user:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }
}
