use crate::holland::report::DEFAULT_MAJOR_DISPLAY_LIMIT;
use crate::holland::MatchOptions;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

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
    pub advisor: AdvisorConfig,
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

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            advisor: AdvisorConfig::from_env()?,
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

/// Catalog source and recommendation presentation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Directory holding `questions.csv`, `majors.json` and `exam_groups.json`.
    /// The built-in catalog is used when unset.
    pub catalog_dir: Option<PathBuf>,
    pub major_display_limit: usize,
    pub rank_majors_by_overlap: bool,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            catalog_dir: None,
            major_display_limit: DEFAULT_MAJOR_DISPLAY_LIMIT,
            rank_majors_by_overlap: false,
        }
    }
}

impl AdvisorConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let catalog_dir = env::var("APP_CATALOG_DIR")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let major_display_limit = match env::var("APP_MAJOR_DISPLAY_LIMIT") {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(limit) if limit >= 1 => limit,
                _ => return Err(ConfigError::InvalidDisplayLimit { value: raw }),
            },
            Err(_) => DEFAULT_MAJOR_DISPLAY_LIMIT,
        };

        let rank_majors_by_overlap = match env::var("APP_RANK_MAJORS_BY_OVERLAP") {
            Ok(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag {
                name: "APP_RANK_MAJORS_BY_OVERLAP",
                value: raw,
            })?,
            Err(_) => false,
        };

        Ok(Self {
            catalog_dir,
            major_display_limit,
            rank_majors_by_overlap,
        })
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            rank_by_overlap: self.rank_majors_by_overlap,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidDisplayLimit { value: String },
    InvalidFlag { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidDisplayLimit { value } => write!(
                f,
                "APP_MAJOR_DISPLAY_LIMIT must be a positive integer, got '{}'",
                value
            ),
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{} must be true or false, got '{}'", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidDisplayLimit { .. }
            | ConfigError::InvalidFlag { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "APP_CATALOG_DIR",
            "APP_MAJOR_DISPLAY_LIMIT",
            "APP_RANK_MAJORS_BY_OVERLAP",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.advisor, AdvisorConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn reads_advisor_settings() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_CATALOG_DIR", "/srv/catalog");
        env::set_var("APP_MAJOR_DISPLAY_LIMIT", "8");
        env::set_var("APP_RANK_MAJORS_BY_OVERLAP", "yes");

        let config = AppConfig::load().expect("config loads");

        assert_eq!(config.advisor.catalog_dir, Some(PathBuf::from("/srv/catalog")));
        assert_eq!(config.advisor.major_display_limit, 8);
        assert!(config.advisor.match_options().rank_by_overlap);
        reset_env();
    }

    #[test]
    fn rejects_zero_display_limit_and_bad_flags() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_MAJOR_DISPLAY_LIMIT", "0");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidDisplayLimit { .. })
        ));

        reset_env();
        env::set_var("APP_RANK_MAJORS_BY_OVERLAP", "sometimes");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidFlag { .. })
        ));
        reset_env();
    }
}
