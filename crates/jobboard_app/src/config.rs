use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use jobboard_core::DEFAULT_PAGE_SIZE;
use jobboard_engine::{ApiSettings, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "jobboard.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("failed to write {path:?}: {message}")]
    Write { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub page_size: u32,
    /// Directory holding persisted favorites.
    pub data_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub log_to_file: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            data_dir: PathBuf::from("./jobboard_data"),
            request_timeout_secs: 30,
            log_to_file: false,
        }
    }
}

impl AppConfig {
    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.base_url.clone(),
            page_size: self.page_size,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..ApiSettings::default()
        }
    }
}

/// Reads the config file; `Ok(None)` if it does not exist.
pub fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
}

pub fn write_config(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    let pretty = ron::ser::PrettyConfig::new();
    let content = ron::ser::to_string_pretty(config, pretty).map_err(|err| ConfigError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    fs::write(path, content).map_err(|err| ConfigError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_none() {
        let temp = TempDir::new().unwrap();
        let result = read_config(&temp.path().join("absent.ron")).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn written_config_reads_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        let config = AppConfig {
            page_size: 12,
            log_to_file: true,
            ..AppConfig::default()
        };

        write_config(&path, &config).unwrap();
        assert_eq!(read_config(&path).unwrap(), Some(config));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "(page_size: 5)").unwrap();

        let config = read_config(&path).unwrap().unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "(page_size: \"many\")").unwrap();

        assert!(matches!(read_config(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn api_settings_carry_timeout_and_page_size() {
        let config = AppConfig {
            request_timeout_secs: 3,
            page_size: 7,
            ..AppConfig::default()
        };
        let settings = config.api_settings();
        assert_eq!(settings.request_timeout, Duration::from_secs(3));
        assert_eq!(settings.page_size, 7);
    }
}
