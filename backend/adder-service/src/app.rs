use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    App, Error,
};

use crate::config::CorsConfig;
use crate::cors::build_cors;
use crate::handlers;

/// The full application: routes plus the middleware stack, outermost first:
/// request span, access log, metrics, correlation id, CORS.
pub fn build_app(
    cors: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(build_cors(cors))
        .wrap(actix_middleware::CorrelationIdMiddleware)
        .wrap(actix_middleware::MetricsMiddleware)
        .wrap(actix_middleware::Logging)
        .wrap(tracing_actix_web::TracingLogger::default())
        .configure(handlers::configure)
}
