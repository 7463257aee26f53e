//! Access log middleware
//!
//! Runs each request inside an `http_request` span and emits one event when it
//! finishes. The event level follows the status class: 5xx is `error`, 4xx is
//! `warn`, everything else `info`. When [`CorrelationIdMiddleware`] runs inside
//! this one, its id is attached to the event.
//!
//! [`CorrelationIdMiddleware`]: crate::CorrelationIdMiddleware

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::{header, StatusCode},
    Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::time::Instant;
use tracing::Instrument;

use crate::correlation_id::CorrelationId;

/// Middleware that logs one event per completed HTTP request
#[derive(Clone, Default)]
pub struct Logging;

impl<S, B> Transform<S, ServiceRequest> for Logging
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = LoggingService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LoggingService { service }))
    }
}

pub struct LoggingService<S> {
    service: S,
}

/// Request facts captured before the inner service consumes the request
struct AccessRecord {
    method: String,
    path: String,
    origin: Option<String>,
    started: Instant,
}

impl AccessRecord {
    fn capture(req: &ServiceRequest) -> Self {
        Self {
            method: req.method().to_string(),
            path: req.path().to_string(),
            origin: req
                .headers()
                .get(header::ORIGIN)
                .and_then(|h| h.to_str().ok())
                .map(str::to_string),
            started: Instant::now(),
        }
    }

    fn emit(&self, status: StatusCode, correlation_id: Option<&str>) {
        let duration_ms = self.started.elapsed().as_millis() as u64;
        let status = status.as_u16();
        let origin = self.origin.as_deref().unwrap_or("-");
        let correlation_id = correlation_id.unwrap_or("-");
        let method = self.method.as_str();
        let path = self.path.as_str();

        macro_rules! access_event {
            ($level:ident) => {
                tracing::$level!(
                    method,
                    path,
                    status,
                    duration_ms,
                    origin,
                    correlation_id,
                    "HTTP request finished"
                )
            };
        }

        match status {
            500.. => access_event!(error),
            400..=499 => access_event!(warn),
            _ => access_event!(info),
        }
    }
}

impl<S, B> Service<ServiceRequest> for LoggingService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let record = AccessRecord::capture(&req);
        let span = tracing::info_span!(
            "http_request",
            method = %record.method,
            path = %record.path
        );
        let fut = self.service.call(req);

        Box::pin(
            async move {
                match fut.await {
                    Ok(res) => {
                        let correlation_id = res
                            .request()
                            .extensions()
                            .get::<CorrelationId>()
                            .map(|id| id.0.clone());
                        record.emit(res.status(), correlation_id.as_deref());
                        Ok(res)
                    }
                    Err(err) => {
                        record.emit(err.as_response_error().status_code(), None);
                        Err(err)
                    }
                }
            }
            .instrument(span),
        )
    }
}
