//! # advantage
//!
//! Async client for the Advantage subscription-management REST API.
//!
//! Build a client once with the API key and endpoint, then call the accessor
//! for the resource you need. Every accessor sends one request carrying the
//! `X-Api-Key` header and returns the decoded JSON as a `serde_json::Value`.
//! A body that is empty or not JSON comes back as an empty object, so indexing
//! into the result is always safe.
//!
//! ```rust,ignore
//! use advantage::prelude::*;
//!
//! let client = AdvantageClient::new("api-key", "https://api.example.test")?;
//!
//! let customer = client.get_customer("000123").await?;
//! println!("{}", customer["CTM_NBR"]);
//!
//! let subs = client
//!     .get_subscriptions("000123", SubscriptionQuery::new().active(true))
//!     .await?;
//! let page: Page = decode_as(&subs)?;
//! ```
//!
//! ## Errors
//!
//! - `ConfigurationError`: no key or endpoint; raised before any network I/O
//! - `TransportError`: the request did not complete
//! - `ApiError`: non-2xx status, only with `StatusPolicy::Strict`
//! - `JsonError`: request body or typed view could not be (de)serialized
#![deny(unsafe_code)]

mod api;
pub mod builder;
pub mod client;
pub mod config;
pub mod defaults;
pub mod error;
pub mod execution;
pub mod telemetry;
pub mod types;

pub use builder::AdvantageBuilder;
pub use client::AdvantageClient;
pub use config::AdvantageConfig;
pub use error::{AdvantageError, ErrorCategory};

/// Common imports
pub mod prelude {
    pub use crate::builder::AdvantageBuilder;
    pub use crate::client::AdvantageClient;
    pub use crate::config::AdvantageConfig;
    pub use crate::error::{AdvantageError, ErrorCategory};
    pub use crate::types::{
        DateType, ListOptions, OrderDirection, Page, SegmentOrder, StatusPolicy,
        SubscriptionQuery, UserRecord, decode_as,
    };
}
