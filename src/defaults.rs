//! Default Configuration Values
//!
//! Centralizes the defaults used by the connector and its accessors.

/// HTTP client defaults
pub mod http {
    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = concat!("advantage-connector/", env!("CARGO_PKG_VERSION"));

    /// Header carrying the API key on every request (sent as `X-Api-Key`)
    pub const API_KEY_HEADER: &str = "x-api-key";
}

/// Environment variables read by `AdvantageConfig::from_env`
pub mod env {
    pub const API_KEY: &str = "AC_KEY";
    pub const ENDPOINT: &str = "AC_ENDPOINT";
}

/// Accessor argument defaults
pub mod accessors {
    /// Page size for the customer and user listings
    pub const LIST_COUNT: u32 = 50;

    /// Page size for a customer's subscriptions
    pub const SUBSCRIPTION_COUNT: u32 = 100;

    /// Publication wildcard matching every publication
    pub const ALL_PUBLICATIONS: &str = "*";

    /// Publication used by `get_subscriptions_for_customer` when none is given
    pub const DEFAULT_PUBLICATION: &str = "WNG";

    /// Date format used in `bydate` paths
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}
