//! # Actix Middleware Library
//!
//! Request-level middleware shared by Nova Actix services
//!
//! ## Modules
//! - `correlation_id`: `X-Correlation-ID` propagation
//! - `logging`: tracing request/response events
//! - `metrics`: Prometheus request metrics

pub mod correlation_id;
pub mod logging;
pub mod metrics;

pub use correlation_id::{get_correlation_id, CorrelationIdMiddleware, CORRELATION_ID_HEADER};
pub use logging::Logging;
pub use metrics::MetricsMiddleware;
