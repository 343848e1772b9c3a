//! HTTP route modules

pub mod gemini;
pub mod health;

use actix_web::web;

/// Register every route of the service
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(gemini::configure_routes)
        .configure(health::configure_routes);
}
