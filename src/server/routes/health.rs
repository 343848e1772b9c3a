//! Health check and version endpoints

use crate::BuildInfo;
use crate::core::providers::gemini::GeminiModels;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/version", web::get().to(version_info));
}

/// Liveness probe
///
/// Always 200 while the process serves requests. `status` is `degraded`
/// when no upstream credential is configured.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let configured = state.dispatcher.is_configured();
    let health_status = HealthStatus {
        status: Cow::Borrowed(if configured { "healthy" } else { "degraded" }),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        uptime_seconds: state.uptime_seconds(),
        upstream: UpstreamStatus {
            credential_configured: configured,
            models: state.dispatcher.models(),
        },
    };

    HttpResponse::Ok().json(health_status)
}

/// Version information endpoint
pub async fn version_info() -> HttpResponse {
    debug!("Version info requested");
    HttpResponse::Ok().json(BuildInfo::current())
}

/// Basic health status
#[derive(Debug, Serialize)]
struct HealthStatus<'a> {
    status: Cow<'static, str>,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: Cow<'static, str>,
    uptime_seconds: u64,
    upstream: UpstreamStatus<'a>,
}

#[derive(Debug, Serialize)]
struct UpstreamStatus<'a> {
    credential_configured: bool,
    models: &'a GeminiModels,
}
