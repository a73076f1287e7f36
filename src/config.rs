use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::models::RecommendationSettings;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub openai: OpenAiSettings,
    #[serde(default)]
    pub recommendation: RecommendationConfig,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8001 }

/// Which event store backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    #[serde(default = "default_backend")]
    pub backend: StorageBackend,
    #[serde(default = "default_true")]
    pub seed_sample_events: bool,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            seed_sample_events: true,
        }
    }
}

fn default_backend() -> StorageBackend { StorageBackend::Postgres }
fn default_true() -> bool { true }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default)]
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_snapshot_ttl")]
    pub snapshot_ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            snapshot_ttl_secs: default_snapshot_ttl(),
        }
    }
}

fn default_snapshot_ttl() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            base_url: default_openai_base_url(),
            api_key: String::new(),
            model: default_model(),
            temperature: default_temperature(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_openai_base_url() -> String { "https://api.openai.com/v1".to_string() }
fn default_model() -> String { "gpt-4o-mini".to_string() }
fn default_temperature() -> f32 { 0.7 }
fn default_request_timeout() -> u64 { 60 }

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    #[serde(default = "default_chat_radius")]
    pub chat_radius_km: f64,
    #[serde(default = "default_nearby_radius")]
    pub nearby_default_radius_km: f64,
    #[serde(default = "default_context_window")]
    pub context_window: usize,
    #[serde(default = "default_returned_events")]
    pub returned_events: usize,
    #[serde(default = "default_generation_timeout")]
    pub generation_timeout_secs: u64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            chat_radius_km: default_chat_radius(),
            nearby_default_radius_km: default_nearby_radius(),
            context_window: default_context_window(),
            returned_events: default_returned_events(),
            generation_timeout_secs: default_generation_timeout(),
        }
    }
}

impl From<&RecommendationConfig> for RecommendationSettings {
    fn from(config: &RecommendationConfig) -> Self {
        Self {
            chat_radius_km: config.chat_radius_km,
            nearby_default_radius_km: config.nearby_default_radius_km,
            context_window: config.context_window,
            returned_events: config.returned_events,
            generation_timeout: Duration::from_secs(config.generation_timeout_secs),
        }
    }
}

fn default_chat_radius() -> f64 { 15.0 }
fn default_nearby_radius() -> f64 { 10.0 }
fn default_context_window() -> usize { 10 }
fn default_returned_events() -> usize { 5 }
fn default_generation_timeout() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingSettings {
    /// Apply `LOG_LEVEL` / `LOG_FORMAT` style overrides on top of the file values
    pub fn with_overrides(mut self, level: Option<String>, format: Option<String>) -> Self {
        if let Some(level) = level.filter(|l| !l.is_empty()) {
            self.level = level;
        }
        if let Some(format) = format.filter(|f| !f.is_empty()) {
            self.format = format;
        }
        self
    }

    pub fn is_pretty(&self) -> bool {
        self.format.eq_ignore_ascii_case("pretty")
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HYPERLOCAL__)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HYPERLOCAL__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HYPERLOCAL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HYPERLOCAL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the conventional unprefixed variables on top of loaded config
///
/// `DATABASE_URL` and `OPENAI_API_KEY` win over their prefixed forms.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let database_url = env::var("DATABASE_URL").ok();
    let openai_api_key = env::var("OPENAI_API_KEY").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = database_url {
        builder = builder.set_override("database.url", url)?;
    }
    if let Some(api_key) = openai_api_key {
        builder = builder.set_override("openai.api_key", api_key)?;
    }

    builder.build()
}
