//! Accessors for the Advantage API.
//!
//! Each accessor maps to exactly one remote endpoint: it builds the resource
//! path and query, then hands the request to the dispatch primitive. Inputs
//! are not validated; identifiers are sent as given and the remote API decides
//! whether they are valid.

mod coupons;
mod customers;
mod subscriptions;
mod users;

#[cfg(test)]
pub(crate) mod test_support;
