/// Adder Service Library
///
/// Serves `GET /?number=<int>` and answers `{"result": number + 2}` to a single
/// browser frontend allowed through CORS.
///
/// # Modules
///
/// - `app`: application assembly shared by the binary and tests
/// - `handlers`: HTTP request handlers and route registration
/// - `services`: the arithmetic itself
/// - `models`: response types
/// - `cors`: the static CORS policy
/// - `error`: error types and their HTTP rendering
/// - `config`: configuration management
/// - `logging`: tracing subscriber setup
/// - `metrics`: Prometheus exposition
pub mod app;
pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;

pub use app::build_app;
pub use config::Config;
pub use error::{AppError, Result};
