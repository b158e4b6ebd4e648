use crate::utils::error::{RentalError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub backend: BackendSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSection {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// Loads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RentalError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RentalError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RentalError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.backend.base_url {
            validation::validate_url("backend.base_url", base_url)?;
        }

        if let Some(timeout) = self.backend.timeout_seconds {
            validation::validate_range("backend.timeout_seconds", timeout, 1, 300)?;
        }

        if let Some(user_agent) = &self.backend.user_agent {
            validation::validate_non_empty_string("backend.user_agent", user_agent)?;
        }

        if let Some(level) = &self.logging.level {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(RentalError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[backend]
base_url = "https://rental.example.com/api"
timeout_seconds = 15
user_agent = "front-desk/1.0"

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.backend.base_url.as_deref(),
            Some("https://rental.example.com/api")
        );
        assert_eq!(config.backend.timeout_seconds, Some(15));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VHS_TEST_BACKEND_URL", "http://backend.test:9000");

        let config = TomlConfig::from_toml_str(
            r#"
[backend]
base_url = "${VHS_TEST_BACKEND_URL}/api"
"#,
        )
        .unwrap();
        assert_eq!(
            config.backend.base_url.as_deref(),
            Some("http://backend.test:9000/api")
        );

        std::env::remove_var("VHS_TEST_BACKEND_URL");
    }

    #[test]
    fn test_unset_variable_is_left_in_place_and_rejected() {
        let config = TomlConfig::from_toml_str(
            r#"
[backend]
base_url = "${VHS_TEST_UNSET_VARIABLE}"
"#,
        )
        .unwrap();

        assert_eq!(
            config.backend.base_url.as_deref(),
            Some("${VHS_TEST_UNSET_VARIABLE}")
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[backend]
base_url = "http://localhost:8000"
timeout_seconds = 0
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[logging]
level = "loud"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = TomlConfig::from_toml_str("[backend\nbase_url = 1").unwrap_err();
        assert!(matches!(err, RentalError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[backend]\nbase_url = \"http://localhost:8000/api\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.backend.base_url.as_deref(),
            Some("http://localhost:8000/api")
        );
    }

    #[test]
    fn test_missing_file() {
        let err = TomlConfig::from_file("/nonexistent/vhs-rental.toml").unwrap_err();
        assert!(matches!(err, RentalError::IoError(_)));
    }
}
