use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `source.api_key`
pub const API_KEY_ENV: &str = "PAYROLL_SOURCE_API_KEY";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub source: SourceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Hosted relational backend exposing a PostgREST API
    Postgrest,
    /// Two JSON arrays on disk
    File,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// REST base URL, e.g. "https://<project>.supabase.co/rest/v1"
    pub url: Option<String>,
    pub api_key: Option<String>,
    #[serde(default = "default_employees_table")]
    pub employees_table: String,
    #[serde(default = "default_levels_table")]
    pub levels_table: String,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    pub employees_path: Option<String>,
    pub levels_path: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_employees_table() -> String {
    "rf_servidores".to_string()
}

fn default_levels_table() -> String {
    "rf_niveis".to_string()
}

fn default_batch_size() -> usize {
    1000
}

fn default_timeout_secs() -> u64 {
    30
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 3000

[source]
kind = "file"
employees_path = "data/rf_servidores.json"
levels_path = "data/rf_niveis.json"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `PAYROLL_SOURCE_API_KEY` replaces `source.api_key` when set.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;

    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            tracing::info!("Using source API key from {}", API_KEY_ENV);
            config.source.api_key = Some(key);
        }
    }

    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolves a data file path from configuration.
///
/// Absolute paths are used as is. Relative paths are looked up next to the
/// executable first, then relative to the current directory.
pub fn resolve_data_path(path: &str) -> PathBuf {
    let candidate = Path::new(path);

    if candidate.is_absolute() {
        return candidate.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(candidate);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    PathBuf::from(path)
}
