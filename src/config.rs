//! Configuration for folder-pager
//!
//! Settings are read from a YAML file and may be overridden from the
//! command line.
//!
//! ```yaml
//! source:
//!   type: http
//!   url: https://folders.example.com/folders.json
//! page_size: 25
//! http:
//!   timeout_secs: 10
//!   max_retries: 2
//!   backoff: linear
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::http::HttpClientConfig;
use crate::pagination::validate_page_size;
use crate::source::{FolderSource, HttpSource, JsonFileSource};
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Top-Level Settings
// ============================================================================

/// Complete settings loaded from YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Where folder records come from
    #[serde(default)]
    pub source: Option<SourceConfig>,

    /// Default number of folders per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// HTTP client settings for remote sources
    #[serde(default)]
    pub http: HttpSettings,
}

fn default_page_size() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: None,
            page_size: default_page_size(),
            http: HttpSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read settings file '{}': {e}",
                    path.display()
                ))
            }
        })?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid settings file '{}'", path.display()))
    }

    /// Parse settings from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings values
    pub fn validate(&self) -> Result<()> {
        validate_page_size(self.page_size)?;

        match &self.source {
            Some(SourceConfig::File { path }) if path.as_os_str().is_empty() => {
                return Err(Error::invalid_value("source.path", "path cannot be empty"));
            }
            Some(SourceConfig::Http { url }) => {
                url::Url::parse(url).map_err(|e| {
                    Error::invalid_value("source.url", format!("invalid URL '{url}': {e}"))
                })?;
            }
            _ => {}
        }

        if self.http.timeout_secs == 0 {
            return Err(Error::invalid_value(
                "http.timeout_secs",
                "timeout must be at least 1 second",
            ));
        }

        Ok(())
    }

    /// Build the record source these settings describe
    pub fn build_source(&self) -> Result<Box<dyn FolderSource>> {
        match &self.source {
            Some(SourceConfig::File { path }) => Ok(Box::new(JsonFileSource::new(path))),
            Some(SourceConfig::Http { url }) => Ok(Box::new(HttpSource::new(
                url,
                self.http.client_config(),
            )?)),
            None => Err(Error::config(
                "No record source configured (use --data, --url or a settings file)",
            )),
        }
    }
}

// ============================================================================
// Source
// ============================================================================

/// Record source selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceConfig {
    /// JSON file on disk
    File {
        /// Path to the JSON document
        path: PathBuf,
    },
    /// JSON document served over HTTP
    Http {
        /// URL of the JSON document
        url: String,
    },
}

// ============================================================================
// HTTP
// ============================================================================

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Backoff strategy between retries
    #[serde(default)]
    pub backoff: BackoffType,

    /// Initial backoff in milliseconds
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Upper bound on backoff in milliseconds
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_initial_backoff_ms() -> u64 {
    100
}

fn default_max_backoff_ms() -> u64 {
    60_000
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            backoff: BackoffType::default(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
        }
    }
}

impl HttpSettings {
    /// Convert into an HTTP client config
    pub fn client_config(&self) -> HttpClientConfig {
        HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .max_retries(self.max_retries)
            .backoff(
                self.backoff,
                Duration::from_millis(self.initial_backoff_ms),
                Duration::from_millis(self.max_backoff_ms),
            )
            .build()
    }
}
