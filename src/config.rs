//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::dataset::{DatasetConfig as GeneratorConfig, DEFAULT_SEED, DEFAULT_SIZE};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_request_timeout() -> u64 {
    30
}

/// Shortest request timeout the server will apply
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Largest synthetic dataset the server will generate
pub const MAX_DATASET_SIZE: usize = 100_000;

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Synthetic dataset configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default = "default_size")]
    pub size: usize,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            size: default_size(),
        }
    }
}

impl ApiConfig {
    /// Per-request timeout, raised to `MIN_REQUEST_TIMEOUT_SECS` when zero
    pub fn request_timeout(&self) -> Duration {
        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS {
            tracing::warn!(
                "request_timeout_secs = {} would time out every request, using {}",
                self.request_timeout_secs,
                MIN_REQUEST_TIMEOUT_SECS
            );
            return Duration::from_secs(MIN_REQUEST_TIMEOUT_SECS);
        }
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl DatasetConfig {
    /// Parameters for `Dataset::generate`, size capped at `MAX_DATASET_SIZE`
    pub fn generator(&self) -> GeneratorConfig {
        let size = if self.size > MAX_DATASET_SIZE {
            tracing::warn!(
                "Dataset size {} exceeds {}, clamping",
                self.size,
                MAX_DATASET_SIZE
            );
            MAX_DATASET_SIZE
        } else {
            self.size
        };

        GeneratorConfig::new(self.seed, size)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Install the global tracing subscriber.
    ///
    /// `RUST_LOG` wins over the configured level. Safe to call more than once;
    /// later calls are ignored.
    pub fn init(&self) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| {
                format!("healthbot={},tower_http=debug", self.level).into()
            });

        let registry = tracing_subscriber::registry().with(filter);

        let result = if self.format == "json" {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()
        } else {
            registry.with(tracing_subscriber::fmt::layer()).try_init()
        };

        if result.is_err() {
            tracing::debug!("Tracing subscriber already installed");
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("healthbot").join("config.toml")),
            Some(PathBuf::from("/etc/healthbot/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // API overrides
        if let Some(host) = lookup("HEALTHBOT_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("HEALTHBOT_API_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => tracing::warn!("Ignoring invalid HEALTHBOT_API_PORT: {}", port),
            }
        }

        // Dataset overrides
        if let Some(seed) = lookup("HEALTHBOT_DATASET_SEED") {
            match seed.parse() {
                Ok(s) => self.dataset.seed = s,
                Err(_) => tracing::warn!("Ignoring invalid HEALTHBOT_DATASET_SEED: {}", seed),
            }
        }
        if let Some(size) = lookup("HEALTHBOT_DATASET_SIZE") {
            match size.parse() {
                Ok(s) => self.dataset.size = s,
                Err(_) => tracing::warn!("Ignoring invalid HEALTHBOT_DATASET_SIZE: {}", size),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("HEALTHBOT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("HEALTHBOT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# HealthBot Configuration
#
# Environment variables override these settings:
# - HEALTHBOT_API_HOST
# - HEALTHBOT_API_PORT
# - HEALTHBOT_DATASET_SEED
# - HEALTHBOT_DATASET_SIZE
# - HEALTHBOT_LOG_LEVEL
# - HEALTHBOT_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8082

# Allowed CORS origins (empty = allow any)
cors_origins = []

# Request timeout in seconds
request_timeout_secs = 30

[dataset]
# Seed for the synthetic health dataset
seed = 42

# Number of synthetic people
size = 50

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
