//! TOML configuration for the `shelf` binary.
//!
//! ```toml
//! [data]
//! path = "data/websites.json"
//!
//! [site]
//! title = "小古资源库"
//! tagline = "发现更好的网络世界"
//!
//! [server]
//! bind = "127.0.0.1:7341"
//!
//! [preferences]
//! path = "data/preferences.json"
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Relative paths are resolved against the directory holding the config
//! file, so a checkout can be served from anywhere.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub data: DataConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// JSON file holding the website entries.
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    /// Optional link shown as a "community" button in the page header.
    #[serde(default)]
    pub community_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: default_tagline(),
            community_url: None,
        }
    }
}

fn default_title() -> String {
    "Link Shelf".to_string()
}
fn default_tagline() -> String {
    "Curated websites, newest first".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:7341".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct PreferencesConfig {
    /// JSON file holding the persisted theme choice.
    #[serde(default = "default_preferences_path")]
    pub path: PathBuf,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            path: default_preferences_path(),
        }
    }
}

fn default_preferences_path() -> PathBuf {
    PathBuf::from("preferences.json")
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let mut config = parse_config(&content)?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    config.data.path = resolve(base, &config.data.path);
    config.preferences.path = resolve(base, &config.preferences.path);

    Ok(config)
}

/// Parse and validate config text without touching the filesystem.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;

    if config.data.path.as_os_str().is_empty() {
        anyhow::bail!("data.path must not be empty");
    }

    if config.preferences.path.as_os_str().is_empty() {
        anyhow::bail!("preferences.path must not be empty");
    }

    config
        .server
        .bind
        .parse::<SocketAddr>()
        .with_context(|| format!("server.bind is not a valid address: '{}'", config.server.bind))?;

    if config.site.title.trim().is_empty() {
        anyhow::bail!("site.title must not be empty");
    }

    Ok(config)
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
