use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use crate::core::{matcher::DEFAULT_PARALLEL_THRESHOLD, MatcherOptions, DEFAULT_SIMILAR_LIMIT};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
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
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
    #[serde(default = "default_similar_limit")]
    pub default_similar_limit: usize,
    #[serde(default = "default_max_similar_limit")]
    pub max_similar_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            parallel_threshold: default_parallel_threshold(),
            max_candidates: default_max_candidates(),
            default_similar_limit: default_similar_limit(),
            max_similar_limit: default_max_similar_limit(),
        }
    }
}

impl MatchingSettings {
    pub fn matcher_options(&self) -> MatcherOptions {
        MatcherOptions {
            parallel_threshold: self.parallel_threshold,
        }
    }

    /// Resolve a requested similar-professionals limit against the configured bounds
    pub fn similar_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_similar_limit)
            .min(self.max_similar_limit)
    }
}

fn default_parallel_threshold() -> usize { DEFAULT_PARALLEL_THRESHOLD }
fn default_max_candidates() -> usize { 10_000 }
fn default_similar_limit() -> usize { DEFAULT_SIMILAR_LIMIT }
fn default_max_similar_limit() -> usize { 50 }

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

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PRO_MATCH)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_layered(env_source())
    }

    fn load_layered(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PRO_MATCH__SERVER__PORT -> server.port
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("PRO_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
