//! HTTP Interceptor interfaces
//!
//! Interceptors can add headers before a request is sent, observe the
//! response status, and be notified of errors. Hooks are best-effort and
//! should avoid expensive work.

use crate::error::AdvantageError;
use reqwest::header::HeaderMap;
use uuid::Uuid;

/// Context passed to interceptors describing the request.
#[derive(Clone, Debug)]
pub struct HttpRequestContext {
    pub request_id: String,
    pub method: reqwest::Method,
    /// Resource path including the rendered query string.
    pub path: String,
    pub url: String,
}

/// Generate an opaque request id (`req_` followed by a v4 UUID).
pub fn generate_request_id() -> String {
    format!("req_{}", Uuid::new_v4())
}

/// HTTP interceptor trait
pub trait HttpInterceptor: Send + Sync {
    /// Called before sending a request. Interceptors may add headers, or
    /// return an error to short-circuit the request.
    fn on_before_send(
        &self,
        _ctx: &HttpRequestContext,
        _headers: &mut HeaderMap,
    ) -> Result<(), AdvantageError> {
        Ok(())
    }

    /// Called after a response is received, whatever its status.
    fn on_response(&self, _ctx: &HttpRequestContext, _status: u16) -> Result<(), AdvantageError> {
        Ok(())
    }

    /// Called when an error occurs during sending or status classification.
    fn on_error(&self, _ctx: &HttpRequestContext, _error: &AdvantageError) {}
}

/// A simple logging interceptor backed by `tracing` (no sensitive data).
#[derive(Clone, Default)]
pub struct LoggingInterceptor;

impl HttpInterceptor for LoggingInterceptor {
    fn on_before_send(
        &self,
        ctx: &HttpRequestContext,
        _headers: &mut HeaderMap,
    ) -> Result<(), AdvantageError> {
        tracing::debug!(target: "advantage::http", request_id=%ctx.request_id, method=%ctx.method, path=%ctx.path, "sending request");
        Ok(())
    }

    fn on_response(&self, ctx: &HttpRequestContext, status: u16) -> Result<(), AdvantageError> {
        tracing::debug!(target: "advantage::http", request_id=%ctx.request_id, path=%ctx.path, status=%status, "response received");
        Ok(())
    }

    fn on_error(&self, ctx: &HttpRequestContext, error: &AdvantageError) {
        tracing::debug!(target: "advantage::http", request_id=%ctx.request_id, path=%ctx.path, error=%error, "request failed");
    }
}
