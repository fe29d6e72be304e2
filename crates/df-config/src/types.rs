use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Secret;

/// Credentials for the Dragonfish API.
///
/// Both values travel as request headers: `IdCliente` and `Authorization`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    pub token: Secret,
}

/// Default page sizes per endpoint family.
///
/// The API caps responses at `limit`; these match the sizes the server is
/// known to handle for each family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_articles_limit")]
    pub articles: u32,
    #[serde(default = "default_stock_limit")]
    pub stock: u32,
    #[serde(default = "default_catalog_limit")]
    pub catalog: u32,
    #[serde(default = "default_equivalences_limit")]
    pub equivalences: u32,
}

fn default_articles_limit() -> u32 {
    10_000
}

fn default_stock_limit() -> u32 {
    5_000
}

fn default_catalog_limit() -> u32 {
    1_000
}

fn default_equivalences_limit() -> u32 {
    1_000
}

impl Default for LimitsConfig {
    fn default() -> Self {
        LimitsConfig {
            articles: default_articles_limit(),
            stock: default_stock_limit(),
            catalog: default_catalog_limit(),
            equivalences: default_equivalences_limit(),
        }
    }
}

/// Spreadsheet export settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExportConfig {
    /// Directory where exported files are written.
    /// Defaults to the user's Downloads directory when unset.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

/// Top-level configuration for the Dragonfish MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErpConfig {
    #[serde(default)]
    pub name: Option<String>,
    /// Base URL of the Dragonfish REST API, without a trailing slash.
    pub base_url: String,
    pub credentials: Credentials,
    /// Database selected via the `BaseDeDatos` header when a tool call does
    /// not specify one.
    #[serde(default)]
    pub default_database: String,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_defaults() {
        let limits = LimitsConfig::default();
        assert_eq!(limits.articles, 10_000);
        assert_eq!(limits.stock, 5_000);
        assert_eq!(limits.catalog, 1_000);
        assert_eq!(limits.equivalences, 1_000);
    }

    #[test]
    fn test_partial_limits_from_yaml() {
        let yaml = "articles: 50\n";
        let limits: LimitsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(limits.articles, 50);
        assert_eq!(limits.stock, 5_000);
    }

    #[test]
    fn test_config_serializes_without_token() {
        let config = ErpConfig {
            name: None,
            base_url: "https://erp.example.com".to_string(),
            credentials: Credentials {
                client_id: "CLI".to_string(),
                token: Secret::new("jwt"),
            },
            default_database: "ECOMMECS".to_string(),
            limits: LimitsConfig::default(),
            export: ExportConfig::default(),
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(!yaml.contains("jwt"));
        assert!(yaml.contains("****"));
    }
}
