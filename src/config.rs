//! Configuration: settings file, environment secrets, logging setup.
//!
//! Non-secret settings (endpoint, poll interval, logging) come from an
//! optional TOML file. The three credentials come from the process
//! environment and are validated once, before the poll loop starts.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::{fmt as subscriber_fmt, EnvFilter};

use crate::error::ConfigError;

/// Default review API endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default pause between poll cycles, in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

/// Full runtime configuration: file-backed settings plus environment
/// secrets.
pub struct Config {
    pub settings: Settings,
    pub secrets: Secrets,
}

/// Non-secret settings, loadable from `config.toml`.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Review API endpoint URL.
    pub endpoint: String,
    /// Pause between poll cycles, in seconds.
    pub poll_interval_secs: u64,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let settings: Settings = toml::from_str(&content).map_err(ConfigError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file if it exists, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.endpoint.is_empty() {
            return Err(ConfigError::MissingField { field: "endpoint" });
        }
        if self.api.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_secs",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Initialize the tracing subscriber with this configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                subscriber_fmt().json().with_env_filter(filter).init();
            }
            _ => {
                subscriber_fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".into(),
            format: "pretty".into(),
        }
    }
}

/// The three required credentials.
///
/// All three must be present and non-empty; a missing one is fatal at
/// startup and never retried.
#[derive(Clone)]
pub struct Secrets {
    /// Bearer token for the review API.
    pub practicum_token: String,
    /// Telegram bot token from @BotFather.
    pub telegram_token: String,
    /// Telegram chat to deliver notifications to.
    pub telegram_chat_id: i64,
}

impl Secrets {
    /// Read and validate the credentials from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let practicum_token = require_var("PRACTICUM_TOKEN")?;
        let telegram_token = require_var("TELEGRAM_TOKEN")?;
        let chat_id = require_var("TELEGRAM_CHAT_ID")?;
        let telegram_chat_id = chat_id.parse().map_err(|_| ConfigError::InvalidValue {
            field: "TELEGRAM_CHAT_ID",
            reason: format!("expected an integer chat id, got {chat_id:?}"),
        })?;

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
        })
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("practicum_token", &mask(&self.practicum_token))
            .field("telegram_token", &mask(&self.telegram_token))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

fn require_var(field: &'static str) -> Result<String, ConfigError> {
    match std::env::var(field) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingField { field }),
    }
}

/// Mask a token for operator-facing output, keeping enough to recognize it.
pub fn mask(token: &str) -> String {
    if token.len() >= 15 {
        format!("{}...{}", &token[..10], &token[token.len() - 5..])
    } else {
        format!("{}...", &token[..token.len().min(10)])
    }
}
