use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::interview::voice::VoiceBackendKind;

const DEFAULT_LISTEN_TIMEOUT_SECS: u64 = 15;
const MAX_LISTEN_TIMEOUT_SECS: u64 = 120;

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
    pub interview: InterviewSettings,
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

        let interview = InterviewSettings::from_env()?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            interview,
        })
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

/// Interview runtime knobs: voice backend, listen window, report output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewSettings {
    pub listen_timeout: Duration,
    pub voice_backend: VoiceBackendKind,
    pub report_dir: PathBuf,
}

impl Default for InterviewSettings {
    fn default() -> Self {
        Self {
            listen_timeout: Duration::from_secs(DEFAULT_LISTEN_TIMEOUT_SECS),
            voice_backend: VoiceBackendKind::Console,
            report_dir: PathBuf::from("reports"),
        }
    }
}

impl InterviewSettings {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let listen_timeout = match env::var("INTERVIEW_LISTEN_TIMEOUT_SECS") {
            Ok(raw) => parse_listen_timeout(&raw)?,
            Err(_) => defaults.listen_timeout,
        };

        let voice_backend = match env::var("INTERVIEW_VOICE_BACKEND") {
            Ok(raw) => raw
                .parse::<VoiceBackendKind>()
                .map_err(|_| ConfigError::InvalidVoiceBackend(raw))?,
            Err(_) => defaults.voice_backend,
        };

        let report_dir = env::var("INTERVIEW_REPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.report_dir);

        Ok(Self {
            listen_timeout,
            voice_backend,
            report_dir,
        })
    }
}

/// Parses a listen window in whole seconds, rejecting zero and anything past two minutes.
pub fn parse_listen_timeout(raw: &str) -> Result<Duration, ConfigError> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidListenTimeout(raw.to_string()))?;

    if secs == 0 || secs > MAX_LISTEN_TIMEOUT_SECS {
        return Err(ConfigError::InvalidListenTimeout(raw.to_string()));
    }

    Ok(Duration::from_secs(secs))
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidListenTimeout(String),
    InvalidVoiceBackend(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidListenTimeout(value) => write!(
                f,
                "INTERVIEW_LISTEN_TIMEOUT_SECS must be between 1 and {MAX_LISTEN_TIMEOUT_SECS} (got '{value}')"
            ),
            ConfigError::InvalidVoiceBackend(value) => write!(
                f,
                "INTERVIEW_VOICE_BACKEND must be 'console' or 'silent' (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidListenTimeout(_)
            | ConfigError::InvalidVoiceBackend(_) => None,
        }
    }
}
