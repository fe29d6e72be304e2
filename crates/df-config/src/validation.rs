use crate::types::ErpConfig;
use crate::ConfigError;

impl ErpConfig {
    /// Validate the configuration and return a list of errors.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.base_url.is_empty() {
            errors.push(ConfigError::InvalidBaseUrl(
                self.base_url.clone(),
                "base_url must not be empty".to_string(),
            ));
        } else if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            errors.push(ConfigError::InvalidBaseUrl(
                self.base_url.clone(),
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        if self.credentials.client_id.is_empty() {
            errors.push(ConfigError::MissingCredential("client_id".to_string()));
        }
        if self.credentials.token.is_empty() {
            errors.push(ConfigError::MissingCredential("token".to_string()));
        }

        if self.default_database.is_empty() {
            errors.push(ConfigError::InvalidConfig(
                "default_database must not be empty".to_string(),
            ));
        }

        for (name, value) in [
            ("articles", self.limits.articles),
            ("stock", self.limits.stock),
            ("catalog", self.limits.catalog),
            ("equivalences", self.limits.equivalences),
        ] {
            if value == 0 {
                errors.push(ConfigError::InvalidConfig(format!(
                    "limits.{} must be greater than zero",
                    name
                )));
            }
        }

        errors
    }

    /// Validate and return Ok(()) if valid, or Err with the first error.
    pub fn validate_or_err(&self) -> Result<(), ConfigError> {
        let errors = self.validate();
        match errors.into_iter().next() {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}
