//! Request descriptor built by accessors and consumed by dispatch.

use reqwest::Method;
use serde_json::Value;

/// One API call: a resource path, a method, ordered query pairs and an
/// optional JSON body. Built fresh per accessor call.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub(crate) path: String,
    pub(crate) method: Method,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: Option<Value>,
}

impl Request {
    /// `path` must start with `/` and is used verbatim.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::GET,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            path: path.into(),
            method: Method::POST,
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Append a query pair. Pairs are rendered in insertion order.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Append a query pair only when `value` is present.
    pub fn query_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Path plus `?k=v&...`, with keys and values percent-encoded.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }

    /// Full URL against `endpoint`. No slash is inserted or removed.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{endpoint}{}", self.path_and_query())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_get_has_no_query() {
        let req = Request::get("/advantage/customer/42");
        assert_eq!(req.path_and_query(), "/advantage/customer/42");
        assert_eq!(
            req.url("https://api.example.test"),
            "https://api.example.test/advantage/customer/42"
        );
        assert_eq!(req.method(), &Method::GET);
        assert!(req.body().is_none());
    }

    #[test]
    fn query_pairs_keep_order_and_are_encoded() {
        let req = Request::get("/advantage/customers/0/50")
            .query("order_direction", "ASC")
            .query_opt("order_by", Some("last name"))
            .query_opt("missing", None::<&str>);
        assert_eq!(
            req.path_and_query(),
            "/advantage/customers/0/50?order_direction=ASC&order_by=last%20name"
        );
    }

    #[test]
    fn post_carries_body() {
        let req = Request::post("/advantage/subscription/adjust-bill-to", json!({"a": 1}));
        assert_eq!(req.method(), &Method::POST);
        assert_eq!(req.body(), Some(&json!({"a": 1})));
        assert_eq!(req.path_and_query(), "/advantage/subscription/adjust-bill-to");
    }
}
