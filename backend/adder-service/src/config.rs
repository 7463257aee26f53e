/// Configuration management for Adder Service
///
/// Server settings are read from environment variables (optionally seeded from a
/// `.env` file). The CORS policy is not configurable at runtime; see [`CorsConfig`].
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// The single frontend origin allowed to read responses from this service.
pub const FRONTEND_ORIGIN: &str = "http://localhost:3000";

/// Preflight cache duration in seconds.
pub const CORS_MAX_AGE_SECS: usize = 600;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Logging configuration
    pub log: LogConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
    /// Number of HTTP workers; `None` keeps the actix-web default
    pub workers: Option<usize>,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsConfig {
    /// Exact origins allowed to read responses
    pub allowed_origins: Vec<String>,
    /// Allow credentials (cookies, authorization headers)
    pub allow_credentials: bool,
    /// Max age for preflight cache (seconds)
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![FRONTEND_ORIGIN.to_string()],
            allow_credentials: true,
            max_age: CORS_MAX_AGE_SECS,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogConfig {
    pub format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let port = parse_env_or_default("ADDER_SERVICE_PORT", DEFAULT_PORT)?;
        if port == 0 {
            return Err(AppError::Configuration(
                "ADDER_SERVICE_PORT must be greater than 0".to_string(),
            ));
        }

        let workers = match std::env::var("ADDER_SERVICE_WORKERS") {
            Ok(val) => {
                let workers: usize = val.parse().map_err(|e| {
                    AppError::Configuration(format!(
                        "Failed to parse ADDER_SERVICE_WORKERS='{}': {}",
                        val, e
                    ))
                })?;
                if workers == 0 {
                    return Err(AppError::Configuration(
                        "ADDER_SERVICE_WORKERS must be greater than 0".to_string(),
                    ));
                }
                Some(workers)
            }
            Err(_) => None,
        };

        let format = match std::env::var("LOG_FORMAT") {
            Ok(val) if val.eq_ignore_ascii_case("json") => LogFormat::Json,
            Ok(val) if val.eq_ignore_ascii_case("text") => LogFormat::Text,
            Ok(val) => {
                return Err(AppError::Configuration(format!(
                    "LOG_FORMAT must be 'text' or 'json', got '{}'",
                    val
                )))
            }
            Err(_) => LogFormat::default(),
        };

        Ok(Config {
            app: AppConfig {
                env: app_env,
                host: std::env::var("ADDER_SERVICE_HOST")
                    .unwrap_or_else(|_| DEFAULT_HOST.to_string()),
                port,
                workers,
            },
            cors: CorsConfig::default(),
            log: LogConfig { format },
        })
    }

    /// `host:port` string suitable for `HttpServer::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

fn parse_env_or_default<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val.parse().map_err(|e| {
            AppError::Configuration(format!("Failed to parse {}='{}': {}", key, val, e))
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "APP_ENV",
        "ADDER_SERVICE_HOST",
        "ADDER_SERVICE_PORT",
        "ADDER_SERVICE_WORKERS",
        "LOG_FORMAT",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.app.env, "development");
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.app.workers, None);
        assert_eq!(config.log.format, LogFormat::Text);
        assert_eq!(config.cors, CorsConfig::default());
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("ADDER_SERVICE_HOST", "127.0.0.1");
        std::env::set_var("ADDER_SERVICE_PORT", "9090");
        std::env::set_var("ADDER_SERVICE_WORKERS", "2");
        std::env::set_var("LOG_FORMAT", "JSON");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.bind_address(), "127.0.0.1:9090");
        assert_eq!(config.app.workers, Some(2));
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    #[serial]
    fn test_invalid_port_rejected() {
        clear_env();
        std::env::set_var("ADDER_SERVICE_PORT", "eighty");
        let err = Config::from_env().unwrap_err();
        std::env::set_var("ADDER_SERVICE_PORT", "0");
        let zero = Config::from_env().unwrap_err();
        clear_env();

        assert!(matches!(err, AppError::Configuration(_)));
        assert!(err.to_string().contains("ADDER_SERVICE_PORT"));
        assert!(matches!(zero, AppError::Configuration(_)));
    }

    #[test]
    #[serial]
    fn test_invalid_log_format_rejected() {
        clear_env();
        std::env::set_var("LOG_FORMAT", "xml");
        let result = Config::from_env();
        clear_env();

        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    #[serial]
    fn test_cors_ignores_environment() {
        clear_env();
        std::env::set_var("CORS_ALLOWED_ORIGINS", "http://evil.example");
        let config = Config::from_env().unwrap();
        std::env::remove_var("CORS_ALLOWED_ORIGINS");

        assert_eq!(config.cors.allowed_origins, vec![FRONTEND_ORIGIN.to_string()]);
        assert!(config.cors.allow_credentials);
        assert_eq!(config.cors.max_age, 600);
    }
}
