//! User settings, read from a JSON file in the config directory.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use artic_lib::api::DEFAULT_BASE_URL;
use artic_lib::table::DEFAULT_PAGE_LINK_SIZE;
use serde::Deserialize;
use serde::Serialize;
use simplelog::LevelFilter;
use thiserror::Error;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("read error: {0}")]
    Io(#[from] io::Error),
    #[error("deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

/// Frontend settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// API base URL.
    pub base_url: String,
    /// Per-request timeout in seconds. Zero disables it.
    pub timeout_secs: u64,
    /// Pages fetched ahead by the cross-page selection.
    pub select_concurrency: usize,
    /// Page links shown in the paginator.
    pub page_link_size: usize,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            select_concurrency: 1,
            page_link_size: DEFAULT_PAGE_LINK_SIZE,
            log_level: "debug".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Parsed log level; unknown names fall back to `Debug`.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Debug)
    }
}
