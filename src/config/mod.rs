//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "MOON_CONFIG";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Document title
    #[serde(default = "default_title")]
    pub title: String,

    /// Directory holding the wasm-bindgen client bundle, served at `/assets`
    #[serde(default = "default_client_dir")]
    pub client_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            title: default_title(),
            client_dir: default_client_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_title() -> String {
    "Nike da best".to_string()
}

fn default_client_dir() -> String {
    "public".to_string()
}

/// Config file location (without extension): `$MOON_CONFIG` if set,
/// otherwise `config` in the platform config directory.
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    directories::ProjectDirs::from("com", "moon-shell", "moon-shell")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config")
}

/// Load from the config file (if any) and the environment.
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path().to_string_lossy())
}

pub fn load_config_from(path: &str) -> Result<Config> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("port", i64::from(default_port()))?
        // Load from config file if it exists
        .add_source(::config::File::with_name(path).required(false))
        // Override with environment variables (MOON_PORT, MOON_TITLE, etc.)
        .add_source(
            ::config::Environment::with_prefix("MOON")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}
