//! Prometheus request metrics
//!
//! Series are keyed by route pattern (`/items/{id}`), never by raw path, so
//! arbitrary URLs cannot grow the label set. Requests that matched no route
//! share the `unmatched` label.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::StatusCode,
    Error,
};
use futures::future::{ready, Ready};
use prometheus::{HistogramVec, IntCounterVec, IntGauge};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::time::Instant;

pub const UNMATCHED_ROUTE: &str = "unmatched";

lazy_static::lazy_static! {
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = prometheus::register_int_counter_vec!(
        "http_requests_total",
        "Total HTTP requests",
        &["method", "route", "status"]
    ).expect("http_requests_total registers once");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = prometheus::register_histogram_vec!(
        "http_request_duration_seconds",
        "HTTP request latency",
        &["method", "route"],
        vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]
    ).expect("http_request_duration_seconds registers once");

    pub static ref HTTP_REQUESTS_IN_FLIGHT: IntGauge = prometheus::register_int_gauge!(
        "http_requests_in_flight",
        "HTTP requests currently being served"
    ).expect("http_requests_in_flight registers once");
}

/// Decrements the in-flight gauge however the request future ends, including
/// when it is dropped mid-flight.
struct InFlight;

impl InFlight {
    fn enter() -> Self {
        HTTP_REQUESTS_IN_FLIGHT.inc();
        InFlight
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        HTTP_REQUESTS_IN_FLIGHT.dec();
    }
}

fn observe(method: &str, route: &str, status: StatusCode, started: Instant) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, route, status.as_str()])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, route])
        .observe(started.elapsed().as_secs_f64());
}

/// Prometheus Metrics Middleware
#[derive(Clone, Default)]
pub struct MetricsMiddleware;

impl<S, B> Transform<S, ServiceRequest> for MetricsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = MetricsMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MetricsMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct MetricsMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for MetricsMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let started = Instant::now();
        let method = req.method().to_string();
        let route = req
            .match_pattern()
            .unwrap_or_else(|| UNMATCHED_ROUTE.to_string());

        Box::pin(async move {
            let _in_flight = InFlight::enter();
            let result = service.call(req).await;

            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            observe(&method, &route, status, started);

            result
        })
    }
}
