use actix_web::HttpResponse;
use prometheus::{Encoder, TextEncoder};

use crate::error::{AppError, Result};

/// Expose the default Prometheus registry in text format.
pub async fn serve_metrics() -> Result<HttpResponse> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|err| AppError::Internal(format!("metrics encoding failed: {}", err)))?;

    Ok(HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer))
}
