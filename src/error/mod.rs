//! Error Handling Module
//!
//! - Core error type (`AdvantageError`) and its coarse `ErrorCategory`
//! - Conversions from `reqwest` and `serde_json` errors
//!
//! # Example
//!
//! ```rust,ignore
//! use advantage::error::{AdvantageError, ErrorCategory};
//!
//! let error = AdvantageError::api_error(404, "Not found");
//! assert_eq!(error.category(), ErrorCategory::Api);
//! assert_eq!(error.status_code(), Some(404));
//! ```

mod conversions;
pub mod types;

pub use types::*;
