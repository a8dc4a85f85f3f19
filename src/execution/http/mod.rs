//! HTTP Utilities
//!
//! - HTTP client construction from `HttpConfig`
//! - Header building
//! - HTTP interceptors
//! - Pluggable transport

pub mod client;
pub mod headers;
pub mod interceptor;
pub mod transport;

pub use client::*;
pub use headers::*;
pub use interceptor::*;
pub use transport::*;
