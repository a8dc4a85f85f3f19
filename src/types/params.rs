//! Accessor parameter types.

use crate::defaults::accessors;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which date a `bydate` subscription lookup matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateType {
    #[default]
    Created,
    Expiration,
    Started,
}

impl DateType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Expiration => "expiration",
            Self::Started => "started",
        }
    }
}

impl fmt::Display for DateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction for listings, sent as `order_direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paging and ordering for `get_customers` / `get_users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    pub offset: u32,
    pub count: u32,
    pub order_direction: OrderDirection,
    /// Field to sort by; `None` leaves `order_by` out of the query entirely.
    pub order_by: Option<String>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            offset: 0,
            count: accessors::LIST_COUNT,
            order_direction: OrderDirection::Asc,
            order_by: None,
        }
    }
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(offset: u32, count: u32) -> Self {
        Self {
            offset,
            count,
            ..Self::default()
        }
    }

    pub fn with_order_direction(mut self, direction: OrderDirection) -> Self {
        self.order_direction = direction;
        self
    }

    pub fn with_order_by<S: Into<String>>(mut self, field: S) -> Self {
        self.order_by = Some(field.into());
        self
    }
}

/// Filters for `get_subscriptions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionQuery {
    /// Publication code; `*` matches all publications.
    pub publication_code: String,
    pub offset: u32,
    pub count: u32,
    /// Only return active subscriptions.
    pub active: bool,
}

impl Default for SubscriptionQuery {
    fn default() -> Self {
        Self {
            publication_code: accessors::ALL_PUBLICATIONS.to_string(),
            offset: 0,
            count: accessors::SUBSCRIPTION_COUNT,
            active: false,
        }
    }
}

impl SubscriptionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publication<S: Into<String>>(mut self, code: S) -> Self {
        self.publication_code = code.into();
        self
    }

    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub const fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub const fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Order of the paging segments in the `/advantage/users/...` path.
///
/// The remote users listing historically takes `{count}/{offset}`, the
/// reverse of the customers listing. `CountOffset` keeps that shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SegmentOrder {
    #[default]
    CountOffset,
    OffsetCount,
}

/// How dispatch treats non-2xx responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusPolicy {
    /// Decode whatever body came back, regardless of status.
    #[default]
    Lenient,
    /// Turn non-2xx responses into `AdvantageError::ApiError`.
    Strict,
}
