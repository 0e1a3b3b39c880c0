//! Configuration loading from TOML files

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use riksnet_graph::PartyPalette;
use serde::Deserialize;

/// Global configuration for riksnet
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub http: HttpSettings,
    pub search: SearchConfig,
    /// Extra or replacement party colours, code → colour
    pub palette: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: riksnet_riksdagen::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Timeouts in seconds
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub connect_timeout: u64,
    pub request_timeout: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        let defaults = riksnet_core::HttpConfig::default();
        Self {
            connect_timeout: defaults.connect_timeout.as_secs(),
            request_timeout: defaults.request_timeout.as_secs(),
        }
    }
}

impl HttpSettings {
    pub fn to_http_config(self) -> riksnet_core::HttpConfig {
        riksnet_core::HttpConfig {
            connect_timeout: Duration::from_secs(self.connect_timeout),
            request_timeout: Duration::from_secs(self.request_timeout),
        }
    }
}

/// Defaults for `riksnet search`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub limit: usize,
    pub sort: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: riksnet_riksdagen::query::DEFAULT_LIMIT,
            sort: riksnet_riksdagen::query::DEFAULT_SORT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./riksnet.toml (current directory)
    /// 2. ~/.config/riksnet/config.toml
    ///
    /// If no config file found, returns default config.
    pub fn load() -> Result<Self> {
        let local_config = PathBuf::from("riksnet.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = directories::ProjectDirs::from("", "", "riksnet") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Default palette with this config's overrides applied
    pub fn party_palette(&self) -> PartyPalette {
        PartyPalette::default().with_overrides(&self.palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://data.riksdagen.se/dokumentlista/");
        assert_eq!(config.search.limit, 100);
        assert_eq!(config.search.sort, "datum");
        assert_eq!(config.http.connect_timeout, 30);
        assert!(config.palette.is_empty());
    }

    #[test]
    fn parse_config_toml() {
        let toml = r##"
[api]
base_url = "http://localhost:8080/dokumentlista/"

[http]
request_timeout = 5

[search]
limit = 20

[palette]
zz = "#123456"
"##;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080/dokumentlista/");
        assert_eq!(config.http.request_timeout, 5);
        // Unset keys keep their defaults
        assert_eq!(config.http.connect_timeout, 30);
        assert_eq!(config.search.limit, 20);
        assert_eq!(config.search.sort, "datum");
        assert_eq!(config.party_palette().color("ZZ").unwrap(), "#123456");
    }

    #[test]
    fn http_settings_convert_to_durations() {
        let http = HttpSettings {
            connect_timeout: 2,
            request_timeout: 9,
        }
        .to_http_config();
        assert_eq!(http.connect_timeout, Duration::from_secs(2));
        assert_eq!(http.request_timeout, Duration::from_secs(9));
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("riksnet.toml");
        std::fs::write(&path, "[search]\nlimit = 7\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.search.limit, 7);
    }

    #[test]
    fn from_file_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[search\nlimit = ").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(format!("{err}").contains("Failed to parse config file"));
    }
}
