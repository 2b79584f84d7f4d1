use crate::core::{AppError, Result};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

pub mod api;
pub mod report;

pub use api::ApiConfig;
pub use report::ReportConfig;

/// Variable lookup; `Config::from_env` reads the process environment
pub type Lookup = dyn Fn(&str) -> Option<String>;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    pub fn from_lookup(lookup: &Lookup) -> Result<Self> {
        Ok(Config {
            app: AppConfig {
                env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_format: parse_var(lookup, "LOG_FORMAT", LogFormat::Pretty)?,
            },
            api: ApiConfig::from_lookup(lookup)?,
            report: ReportConfig::from_lookup(lookup)?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.report.validate()?;
        Ok(())
    }
}

/// Parse an optional variable, falling back to `default` when unset or blank
pub(crate) fn parse_var<T>(lookup: &Lookup, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Configuration(format!("Invalid {}: {}", key, e))),
        _ => Ok(default),
    }
}
