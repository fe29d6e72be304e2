mod defaults;
mod env;
mod secret;
pub mod types;
mod validation;

use std::path::Path;

pub use secret::Secret;
pub use types::*;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Missing environment variables: {0:?}")]
    MissingEnvVars(Vec<String>),

    #[error("Invalid base URL '{0}': {1}")]
    InvalidBaseUrl(String, String),

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ErpConfig {
    /// Parse an ERP configuration from a YAML string.
    /// Environment variables in the format `${VAR_NAME}` will be interpolated.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // First, interpolate environment variables
        let interpolated = env::interpolate_env(yaml)?;

        // Then parse the YAML
        let mut config: ErpConfig = serde_yaml::from_str(&interpolated)?;
        config.apply_defaults();

        Ok(config)
    }

    /// Load an ERP configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let yaml = r#"
name: my-erp
base_url: https://erp.example.com/api.Dragonfish
credentials:
  client_id: CLI-123
  token: jwt-token-value
"#;

        let config = ErpConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name, Some("my-erp".to_string()));
        assert_eq!(config.base_url, "https://erp.example.com/api.Dragonfish");
        assert_eq!(config.credentials.client_id, "CLI-123");
        assert_eq!(config.credentials.token.expose(), "jwt-token-value");
    }

    #[test]
    fn test_parse_with_env_vars() {
        std::env::set_var("TEST_DF_TOKEN", "secret-jwt");

        let yaml = r#"
base_url: https://erp.example.com/api
credentials:
  client_id: CLI-123
  token: ${TEST_DF_TOKEN}
"#;

        let config = ErpConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.credentials.token.expose(), "secret-jwt");
    }

    #[test]
    fn test_default_database() {
        let yaml = r#"
base_url: https://erp.example.com/api
credentials:
  client_id: CLI-123
  token: t
"#;

        let config = ErpConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.default_database, "ECOMMECS");
    }

    #[test]
    fn test_validation() {
        let yaml = r#"
base_url: https://erp.example.com/api
credentials:
  client_id: CLI-123
  token: t
"#;

        let config = ErpConfig::from_yaml(yaml).unwrap();
        let errors = config.validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_missing_env_var() {
        let yaml = r#"
base_url: https://erp.example.com/api
credentials:
  client_id: CLI-123
  token: ${DF_MISSING_VAR_98765}
"#;

        let result = ErpConfig::from_yaml(yaml);
        assert!(matches!(result, Err(ConfigError::MissingEnvVars(_))));
    }
}
