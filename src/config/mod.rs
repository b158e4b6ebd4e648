#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::DEFAULT_USER_AGENT;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{RentalError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Resolved backend connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    pub api_url: String,
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientSettings {
    /// Reads `VHS_API_URL` and `VHS_TIMEOUT_SECONDS` on top of the defaults.
    pub fn from_env() -> Result<Self> {
        let timeout_seconds = match env::var("VHS_TIMEOUT_SECONDS") {
            Ok(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                RentalError::InvalidConfigValueError {
                    field: "VHS_TIMEOUT_SECONDS".to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?),
            Err(_) => None,
        };

        Ok(Self::default().with_overrides(env::var("VHS_API_URL").ok(), timeout_seconds))
    }

    pub fn with_file(mut self, file: &TomlConfig) -> Self {
        if let Some(base_url) = &file.backend.base_url {
            self.api_url = base_url.clone();
        }
        if let Some(timeout) = file.backend.timeout_seconds {
            self.timeout_seconds = Some(timeout);
        }
        if let Some(user_agent) = &file.backend.user_agent {
            self.user_agent = user_agent.clone();
        }
        self
    }

    pub fn with_overrides(mut self, api_url: Option<String>, timeout_seconds: Option<u64>) -> Self {
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        if timeout_seconds.is_some() {
            self.timeout_seconds = timeout_seconds;
        }
        self
    }
}

impl ConfigProvider for ClientSettings {
    fn api_base_url(&self) -> &str {
        &self.api_url
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_url", &self.api_url)?;

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_range("timeout_seconds", timeout, 1, 300)?;
        }

        validation::validate_non_empty_string("user_agent", &self.user_agent)?;
        Ok(())
    }
}
