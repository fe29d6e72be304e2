use crate::types::ErpConfig;

/// Database queried when neither the config nor the tool call names one.
pub const DEFAULT_DATABASE: &str = "ECOMMECS";

impl ErpConfig {
    /// Apply default inference rules to the configuration.
    /// This mutates the config in place.
    pub fn apply_defaults(&mut self) {
        if self.default_database.is_empty() {
            self.default_database = DEFAULT_DATABASE.to_string();
        }

        // Base URL is used by simple concatenation; normalize the trailing slash.
        while self.base_url.ends_with('/') {
            self.base_url.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Credentials, ExportConfig, LimitsConfig};
    use crate::Secret;

    fn base_config() -> ErpConfig {
        ErpConfig {
            name: None,
            base_url: "https://erp.example.com/api/".to_string(),
            credentials: Credentials {
                client_id: "CLI".to_string(),
                token: Secret::new("jwt"),
            },
            default_database: String::new(),
            limits: LimitsConfig::default(),
            export: ExportConfig::default(),
        }
    }

    #[test]
    fn test_default_database_filled_in() {
        let mut config = base_config();
        config.apply_defaults();
        assert_eq!(config.default_database, DEFAULT_DATABASE);
    }

    #[test]
    fn test_explicit_database_kept() {
        let mut config = base_config();
        config.default_database = "TESTDB".to_string();
        config.apply_defaults();
        assert_eq!(config.default_database, "TESTDB");
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let mut config = base_config();
        config.apply_defaults();
        assert_eq!(config.base_url, "https://erp.example.com/api");
    }
}
