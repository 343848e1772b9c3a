//! The action proxy endpoint
//!
//! `/api/gemini` accepts every method so that anything other than POST gets
//! the JSON 405 envelope instead of the router's default response.

use crate::core::dispatch::RequestEnvelope;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, web};
use futures::StreamExt;
use tracing::debug;

/// Path of the proxy endpoint
pub const GEMINI_PATH: &str = "/api/gemini";

/// Configure proxy routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(GEMINI_PATH, web::route().to(gemini_proxy));
}

/// Dispatch one `{action, payload}` envelope
pub async fn gemini_proxy(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if req.method() != Method::POST {
        debug!(method = %req.method(), "Rejected non-POST proxy request");
        return Err(GatewayError::method_not_allowed(req.method().as_str()));
    }

    let body = read_body(payload, state.config.server().max_body_size).await?;
    let envelope = RequestEnvelope::from_body(&body);
    let output = state.dispatcher.dispatch(envelope).await?;

    Ok(HttpResponse::Ok().json(output.into_envelope()))
}

async fn read_body(mut payload: web::Payload, limit: usize) -> Result<web::BytesMut> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk
            .map_err(|e| GatewayError::validation(format!("Failed to read request body: {}", e)))?;
        if body.len() + chunk.len() > limit {
            return Err(GatewayError::PayloadTooLarge(limit));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
