/// HTTP handlers for adder-service
///
/// - `arithmetic`: `GET /?number=<int>`
/// - `health`: liveness and summary probes under `/api/v1/health`
pub mod arithmetic;
pub mod health;

pub use arithmetic::add_two;
pub use health::{health_summary, liveness_check};

use actix_web::web;

/// Register every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(arithmetic::add_two))
        .route("/metrics", web::get().to(crate::metrics::serve_metrics))
        .route("/api/v1/health", web::get().to(health::health_summary))
        .route("/api/v1/health/live", web::get().to(health::liveness_check));
}
