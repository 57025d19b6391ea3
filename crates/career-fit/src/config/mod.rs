use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::assessment::ScoringConfig;

const DEFAULT_SNAPSHOT_PATH: &str = ".career-fit/assessment-results.json";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub storage: StorageConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let snapshot_path = env::var("APP_SNAPSHOT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SNAPSHOT_PATH));

        let defaults = ScoringConfig::default();
        let scoring = ScoringConfig {
            strong_fit_threshold: threshold_var(
                "APP_STRONG_FIT_THRESHOLD",
                defaults.strong_fit_threshold,
            )?,
            moderate_fit_threshold: threshold_var(
                "APP_MODERATE_FIT_THRESHOLD",
                defaults.moderate_fit_threshold,
            )?,
        };
        if scoring.moderate_fit_threshold > scoring.strong_fit_threshold {
            return Err(ConfigError::ThresholdOrder {
                strong: scoring.strong_fit_threshold,
                moderate: scoring.moderate_fit_threshold,
            });
        }

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            storage: StorageConfig { snapshot_path },
            scoring,
        })
    }
}

fn threshold_var(name: &'static str, default: u8) -> Result<u8, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|value| *value <= 100)
            .ok_or(ConfigError::InvalidThreshold { name }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the results snapshot lives.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub snapshot_path: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidThreshold { name: &'static str },
    ThresholdOrder { strong: u8, moderate: u8 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidThreshold { name } => {
                write!(f, "{name} must be an integer between 0 and 100")
            }
            ConfigError::ThresholdOrder { strong, moderate } => write!(
                f,
                "APP_MODERATE_FIT_THRESHOLD ({moderate}) must not exceed APP_STRONG_FIT_THRESHOLD ({strong})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidThreshold { .. }
            | ConfigError::ThresholdOrder { .. } => None,
        }
    }
}
