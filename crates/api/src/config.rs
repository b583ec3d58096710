use std::str::FromStr;

use fabmon_core::classification::{
    ClassifierThresholds, DEFAULT_FAIL_TEMP, DEFAULT_FAIL_VIBRATION, DEFAULT_HIGH_PRESSURE,
    DEFAULT_LOW_PRESSURE, DEFAULT_WARN_TEMP, DEFAULT_WARN_VIBRATION,
};
use fabmon_core::health::{DEFAULT_HEALTH_WINDOW, MAX_HEALTH_WINDOW};
use fabmon_core::status::DEFAULT_STALE_AFTER_SECS;

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}' (expected pretty or json)")),
        }
    }
}

/// Monitoring policy: classifier thresholds, staleness, and health window.
#[derive(Debug, Clone)]
pub struct MonitoringConfig {
    pub thresholds: ClassifierThresholds,
    /// Seconds without a report before equipment is DOWN (default: `30`).
    pub stale_after_secs: i64,
    /// Default window for health and dashboard queries (default: `50`).
    pub health_window: i64,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            thresholds: ClassifierThresholds::default(),
            stale_after_secs: DEFAULT_STALE_AFTER_SECS,
            health_window: DEFAULT_HEALTH_WINDOW,
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Database pool size (default: `20`).
    pub db_max_connections: u32,
    pub log_format: LogFormat,
    pub monitoring: MonitoringConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    /// | `LOG_FORMAT`           | `pretty`                   |
    /// | `WARN_TEMP`            | `85.0`                     |
    /// | `FAIL_TEMP`            | `95.0`                     |
    /// | `WARN_VIBRATION`       | `0.7`                      |
    /// | `FAIL_VIBRATION`       | `0.9`                      |
    /// | `LOW_PRESSURE`         | `0.8`                      |
    /// | `HIGH_PRESSURE`        | `1.3`                      |
    /// | `STALE_AFTER_SECS`     | `30`                       |
    /// | `HEALTH_WINDOW`        | `50`                       |
    ///
    /// Panics on unparseable values or inconsistent thresholds; bad
    /// configuration should stop the server at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = env_or("PORT", 8000);

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", 30);
        let db_max_connections: u32 = env_or("DB_MAX_CONNECTIONS", 20);
        let log_format: LogFormat = env_or("LOG_FORMAT", LogFormat::Pretty);

        let thresholds = ClassifierThresholds {
            warn_temp: env_or("WARN_TEMP", DEFAULT_WARN_TEMP),
            fail_temp: env_or("FAIL_TEMP", DEFAULT_FAIL_TEMP),
            warn_vibration: env_or("WARN_VIBRATION", DEFAULT_WARN_VIBRATION),
            fail_vibration: env_or("FAIL_VIBRATION", DEFAULT_FAIL_VIBRATION),
            low_pressure: env_or("LOW_PRESSURE", DEFAULT_LOW_PRESSURE),
            high_pressure: env_or("HIGH_PRESSURE", DEFAULT_HIGH_PRESSURE),
        };
        if let Err(e) = thresholds.validate() {
            panic!("Invalid classifier thresholds: {e}");
        }

        let stale_after_secs: i64 = env_or("STALE_AFTER_SECS", DEFAULT_STALE_AFTER_SECS);
        if stale_after_secs < 0 {
            panic!("STALE_AFTER_SECS must not be negative");
        }

        let health_window: i64 = env_or("HEALTH_WINDOW", DEFAULT_HEALTH_WINDOW);
        if !(1..=MAX_HEALTH_WINDOW).contains(&health_window) {
            panic!("HEALTH_WINDOW must be between 1 and {MAX_HEALTH_WINDOW}");
        }

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            log_format,
            monitoring: MonitoringConfig {
                thresholds,
                stale_after_secs,
                health_window,
            },
        }
    }
}

/// Read and parse `key`, falling back to `default` when unset.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} has an invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}
