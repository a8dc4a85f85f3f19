//! The dispatch primitive: one request, one response, one decode.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde_json::{Map, Value};
use tracing::Instrument;

use crate::config::Credentials;
use crate::error::AdvantageError;
use crate::execution::http::headers::HttpHeaderBuilder;
use crate::execution::http::interceptor::{
    HttpInterceptor, HttpRequestContext, generate_request_id,
};
use crate::execution::http::transport::{
    HttpTransport, HttpTransportRequest, HttpTransportResponse,
};
use crate::execution::request::Request;
use crate::types::StatusPolicy;

/// What dispatch needs from the client for a single call.
pub(crate) struct DispatchConfig<'a> {
    pub credentials: &'a Credentials,
    pub transport: &'a dyn HttpTransport,
    pub interceptors: &'a [Arc<dyn HttpInterceptor>],
    pub status_policy: StatusPolicy,
}

/// Send `request` and decode the response body.
///
/// Fails with `ConfigurationError` before any I/O when the key or endpoint is
/// empty. A body that is empty or not JSON decodes to an empty object.
pub(crate) async fn execute(
    config: DispatchConfig<'_>,
    request: Request,
) -> Result<Value, AdvantageError> {
    if !config.credentials.is_complete() {
        return Err(AdvantageError::not_configured());
    }

    let path = request.path_and_query();
    let url = request.url(&config.credentials.endpoint);

    let mut header_builder =
        HttpHeaderBuilder::new().with_api_key(config.credentials.api_key.expose_secret())?;
    if request.body.is_some() {
        header_builder = header_builder.with_json_content_type();
    }
    let mut headers = header_builder.build();

    let ctx = HttpRequestContext {
        request_id: generate_request_id(),
        method: request.method.clone(),
        path,
        url: url.clone(),
    };

    let span = tracing::debug_span!(
        "advantage.dispatch",
        request_id = %ctx.request_id,
        method = %ctx.method,
        path = %ctx.path,
    );

    async move {
        for interceptor in config.interceptors {
            interceptor.on_before_send(&ctx, &mut headers)?;
        }

        tracing::debug!(target: "advantage::http", "sending request");
        let sent = config
            .transport
            .execute(HttpTransportRequest {
                ctx: ctx.clone(),
                method: request.method,
                url,
                headers,
                body: request.body,
            })
            .await;

        let response = match sent {
            Ok(response) => response,
            Err(err) => {
                notify_error(config.interceptors, &ctx, &err);
                return Err(err);
            }
        };

        tracing::debug!(target: "advantage::http", status = response.status, bytes = response.body.len(), "response received");
        for interceptor in config.interceptors {
            interceptor.on_response(&ctx, response.status)?;
        }

        if config.status_policy == StatusPolicy::Strict && !response.is_success() {
            let err = api_error_from(&response);
            notify_error(config.interceptors, &ctx, &err);
            return Err(err);
        }

        Ok::<Value, AdvantageError>(decode_body(&response.body))
    }
    .instrument(span)
    .await
}

fn notify_error(
    interceptors: &[Arc<dyn HttpInterceptor>],
    ctx: &HttpRequestContext,
    err: &AdvantageError,
) {
    for interceptor in interceptors {
        interceptor.on_error(ctx, err);
    }
}

/// Decode a response body, falling back to `{}` when there is nothing usable.
pub(crate) fn decode_body(body: &[u8]) -> Value {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Null) => Value::Object(Map::new()),
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, bytes = body.len(), "response body is not JSON, returning an empty object");
            Value::Object(Map::new())
        }
    }
}

fn api_error_from(response: &HttpTransportResponse) -> AdvantageError {
    let details = serde_json::from_slice::<Value>(&response.body).ok();
    let message = details
        .as_ref()
        .and_then(|d| d.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| {
            reqwest::StatusCode::from_u16(response.status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("HTTP {}", response.status));

    AdvantageError::ApiError {
        code: response.status,
        message,
        details,
    }
}
