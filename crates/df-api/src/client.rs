use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::debug;

use df_config::{ErpConfig, LimitsConfig};

use crate::error::ApiError;
use crate::models::{Article, Color, Equivalence, Page, Size, StockRecord, TaxonomyEntry};
use crate::query::StockQuery;
use crate::taxonomy::Taxonomy;

/// Client for the Dragonfish REST API.
///
/// One `reqwest::Client` is shared across all calls; the per-request pieces
/// are the endpoint path, the `BaseDeDatos` header and the query string.
pub struct ErpClient {
    http: reqwest::Client,
    config: ErpConfig,
}

impl ErpClient {
    pub fn new(config: ErpConfig) -> Result<Self, ApiError> {
        config
            .validate_or_err()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(config.credentials.token.expose())
                .map_err(|e| ApiError::Config(format!("Invalid token: {}", e)))?,
        );
        headers.insert(
            "IdCliente",
            HeaderValue::from_str(&config.credentials.client_id)
                .map_err(|e| ApiError::Config(format!("Invalid client_id: {}", e)))?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(ErpClient { http, config })
    }

    /// Database used when a tool call does not name one.
    pub fn default_database(&self) -> &str {
        &self.config.default_database
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.config.limits
    }

    pub fn config(&self) -> &ErpConfig {
        &self.config
    }

    /// Resolve the database for a call: an explicit override wins.
    pub fn database<'a>(&'a self, db: Option<&'a str>) -> &'a str {
        match db {
            Some(db) if !db.is_empty() => db,
            _ => self.default_database(),
        }
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        db: &str,
        params: &[(String, String)],
    ) -> Result<Page<T>, ApiError> {
        let url = format!("{}/{}/", self.config.base_url, endpoint);
        debug!(endpoint, db, "GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("BaseDeDatos", db)
            .query(params)
            .send()
            .await
            .map_err(|e| ApiError::Request {
                endpoint: endpoint.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        response.json().await.map_err(|e| ApiError::Decode {
            endpoint: endpoint.to_string(),
            source: e,
        })
    }

    fn limit_params(limit: u32) -> Vec<(String, String)> {
        vec![("limit".to_string(), limit.to_string())]
    }

    /// Fetch articles. `limit` falls back to the configured articles limit.
    pub async fn articles(&self, db: &str, limit: Option<u32>) -> Result<Page<Article>, ApiError> {
        let effective = limit.unwrap_or(self.config.limits.articles);
        let mut page: Page<Article> = self
            .get_page("Articulo", db, &Self::limit_params(effective))
            .await?;
        page.truncate(limit);
        Ok(page)
    }

    pub async fn colors(&self, db: &str) -> Result<Page<Color>, ApiError> {
        self.get_page("Color", db, &Self::limit_params(self.config.limits.catalog))
            .await
    }

    pub async fn sizes(&self, db: &str) -> Result<Page<Size>, ApiError> {
        self.get_page("Talle", db, &Self::limit_params(self.config.limits.catalog))
            .await
    }

    /// Query stock and prices with the given filters.
    pub async fn stock(&self, db: &str, query: &StockQuery) -> Result<Page<StockRecord>, ApiError> {
        let params = query.params(self.config.limits.stock);
        let mut page: Page<StockRecord> =
            self.get_page("ConsultaStockYPrecios", db, &params).await?;
        page.truncate(query.limit);
        Ok(page)
    }

    pub async fn equivalences(
        &self,
        db: &str,
        limit: Option<u32>,
    ) -> Result<Page<Equivalence>, ApiError> {
        let effective = limit.unwrap_or(self.config.limits.equivalences);
        let mut page: Page<Equivalence> = self
            .get_page("Equivalencia", db, &Self::limit_params(effective))
            .await?;
        page.truncate(limit);
        Ok(page)
    }

    /// Fetch all entries of one taxonomy.
    pub async fn taxonomy(
        &self,
        db: &str,
        kind: Taxonomy,
    ) -> Result<Page<TaxonomyEntry>, ApiError> {
        self.get_page(
            kind.endpoint(),
            db,
            &Self::limit_params(self.config.limits.catalog),
        )
        .await
    }
}
