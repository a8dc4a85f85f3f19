//! Types shared across the connector.

pub mod http;
pub mod params;
pub mod records;

pub use http::{HttpConfig, HttpConfigBuilder};
pub use params::{
    DateType, ListOptions, OrderDirection, SegmentOrder, StatusPolicy, SubscriptionQuery,
};
pub use records::{Page, UserRecord, decode_as};
