use gemtext_html_engine::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "GEMTEXT_HTML_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderOptions,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    /// `$GEMTEXT_HTML_CONFIG` when set, else `~/.config/gemtext-html/config.toml`.
    pub fn config_path() -> PathBuf {
        Self::resolve_config_path(std::env::var(CONFIG_PATH_ENV).ok())
    }

    fn resolve_config_path(override_path: Option<String>) -> PathBuf {
        match override_path.filter(|p| !p.is_empty()) {
            Some(path) => {
                let path = PathBuf::from(path);
                Self::expand_path(&path).unwrap_or(path)
            }
            None => {
                let config_dir = shellexpand::tilde("~/.config/gemtext-html");
                PathBuf::from(config_dir.as_ref()).join("config.toml")
            }
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
