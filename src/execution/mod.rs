//! Request execution: descriptors, dispatch and HTTP plumbing.

pub(crate) mod dispatch;
pub mod http;
pub mod request;

pub use request::Request;
