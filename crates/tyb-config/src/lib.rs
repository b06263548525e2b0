use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration for the board proxy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub redaction: RedactionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Exact origins allowed by CORS, in addition to localhost variants
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Path or name of the board CLI
    #[serde(default = "default_program")]
    pub program: String,

    /// HOME for the child process; inherited when unset
    #[serde(default)]
    pub home: Option<PathBuf>,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_health_timeout_ms")]
    pub health_timeout_ms: u64,

    #[serde(default = "default_max_output_bytes")]
    pub max_output_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_board_ttl_ms")]
    pub board_ttl_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Appended after the built-in patterns
    #[serde(default)]
    pub extra_patterns: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            home: None,
            timeout_ms: default_timeout_ms(),
            health_timeout_ms: default_health_timeout_ms(),
            max_output_bytes: default_max_output_bytes(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            board_ttl_ms: default_board_ttl_ms(),
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_millis(self.health_timeout_ms)
    }
}

impl CacheConfig {
    pub fn board_ttl(&self) -> Duration {
        Duration::from_millis(self.board_ttl_ms)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3080
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "https://rexmarksthespot.com".to_string(),
        "https://www.rexmarksthespot.com".to_string(),
        "http://rexmarksthespot.com".to_string(),
        "http://www.rexmarksthespot.com".to_string(),
    ]
}

fn default_program() -> String {
    "ty".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_health_timeout_ms() -> u64 {
    5_000
}

fn default_max_output_bytes() -> usize {
    1024 * 1024
}

fn default_board_ttl_ms() -> u64 {
    1_000
}

impl Config {
    /// Load config from the default location, or defaults if there is no file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Load config from an explicit file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get config file path
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tyb", "tyb")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
