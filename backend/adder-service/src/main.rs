use actix_web::HttpServer;
use adder_service::build_app;
use adder_service::config::Config;
use adder_service::logging::init_tracing;
use std::io;

const HEALTH_PATH: &str = "/api/v1/health";

async fn run_healthcheck(port: u16) -> io::Result<()> {
    let url = format!("http://127.0.0.1:{}{}", port, HEALTH_PATH);
    match reqwest::Client::new().get(&url).send().await {
        Ok(resp) if resp.status().is_success() => Ok(()),
        Ok(resp) => {
            eprintln!("healthcheck HTTP status: {}", resp.status());
            Err(io::Error::new(io::ErrorKind::Other, "healthcheck failed"))
        }
        Err(e) => {
            eprintln!("healthcheck HTTP error: {}", e);
            Err(io::Error::new(io::ErrorKind::Other, "healthcheck error"))
        }
    }
}

/// Adder Service
///
/// Answers `GET /?number=<int>` with `{"result": number + 2}` for the browser
/// frontend at http://localhost:3000.
///
/// # Routes
///
/// - `/` - add two to the `number` query parameter
/// - `/api/v1/health`, `/api/v1/health/live` - probes
/// - `/metrics` - Prometheus metrics
///
/// Runs on port 8000 by default (ADDER_SERVICE_PORT).
#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Support container healthchecks via CLI subcommand: `healthcheck-http` or legacy `healthcheck`
    if let Some(cmd) = std::env::args().nth(1) {
        if cmd == "healthcheck" || cmd == "healthcheck-http" {
            return run_healthcheck(config.app.port).await;
        }
    }

    init_tracing(config.log.format);

    tracing::info!("Starting adder-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        origins = ?config.cors.allowed_origins,
        allow_credentials = config.cors.allow_credentials,
        max_age = config.cors.max_age,
        "CORS policy loaded"
    );

    let bind_address = config.bind_address();
    tracing::info!("Starting HTTP server at {}", bind_address);

    let cors_config = config.cors.clone();
    let mut server = HttpServer::new(move || build_app(&cors_config))
        .bind(&bind_address)?
        .shutdown_timeout(30);

    if let Some(workers) = config.app.workers {
        server = server.workers(workers);
    }

    server.run().await?;

    tracing::info!("adder-service shut down");
    Ok(())
}
