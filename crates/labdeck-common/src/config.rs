//! Configuration model for the admin UI.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LabdeckError, Result};

/// Language of every user-facing string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Italian.
    It,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::It => write!(f, "it"),
        }
    }
}

impl FromStr for Locale {
    type Err = LabdeckError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "it" => Ok(Self::It),
            other => Err(LabdeckError::Config {
                message: format!("unsupported locale: {other}"),
            }),
        }
    }
}

/// Root configuration for the admin UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Base URL of the container backend.
    pub base_url: String,
    /// Host used in links derived from port bindings.
    pub public_host: String,
    /// Count prefilled in the create form.
    pub default_count: u32,
    /// Language of banners and labels.
    pub locale: Locale,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            base_url: crate::constants::DEFAULT_BASE_URL.to_string(),
            public_host: crate::constants::DEFAULT_PUBLIC_HOST.to_string(),
            default_count: crate::constants::DEFAULT_CREATE_COUNT,
            locale: Locale::default(),
        }
    }
}

impl AdminConfig {
    /// Loads a configuration from a JSON file. Missing keys take their
    /// default value.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LabdeckError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `LabdeckError::Config` if the base URL is not an http(s) URL,
    /// the public host is empty, or the default count is zero.
    pub fn validate(&self) -> Result<()> {
        let scheme_ok = ["http://", "https://"].iter().any(|scheme| {
            self.base_url
                .strip_prefix(scheme)
                .is_some_and(|rest| !rest.is_empty())
        });
        if !scheme_ok {
            return Err(LabdeckError::Config {
                message: format!("base_url must be an http(s) URL: {}", self.base_url),
            });
        }
        if self.public_host.trim().is_empty() {
            return Err(LabdeckError::Config {
                message: "public_host must not be empty".to_string(),
            });
        }
        if self.default_count == 0 {
            return Err(LabdeckError::Config {
                message: "default_count must be >= 1".to_string(),
            });
        }
        Ok(())
    }
}
