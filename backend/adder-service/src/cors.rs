//! CORS policy for the frontend
//!
//! Exactly one origin may read responses, with any method, any header and
//! credentials. Requests from other origins are still served; they just do not
//! get an `Access-Control-Allow-Origin` header, leaving enforcement to the
//! browser.

use actix_cors::Cors;

use crate::config::CorsConfig;

/// Build actix-cors middleware from the static policy
pub fn build_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default();

    for origin in &config.allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    cors = cors
        .allow_any_method()
        .allow_any_header()
        .max_age(config.max_age)
        .block_on_origin_mismatch(false);

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
