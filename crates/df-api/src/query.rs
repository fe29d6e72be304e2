/// Query parameters accepted by `/ConsultaStockYPrecios/`.
///
/// `None` fields are omitted from the query string entirely; the server
/// treats absence and explicit `false` differently for the boolean filters.
#[derive(Debug, Clone, Default)]
pub struct StockQuery {
    /// Maximum number of records to return.
    pub limit: Option<u32>,
    /// Free-text search over article code and description.
    pub query: Option<String>,
    /// Restrict to a specific price list.
    pub lista: Option<String>,
    /// Include articles with zero price.
    pub preciocero: Option<bool>,
    /// Include articles with zero stock.
    pub stockcero: Option<bool>,
    /// Exact match instead of substring search.
    pub exacto: Option<bool>,
}

impl StockQuery {
    pub fn new() -> Self {
        StockQuery::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn lista(mut self, lista: impl Into<String>) -> Self {
        self.lista = Some(lista.into());
        self
    }

    pub fn preciocero(mut self, value: bool) -> Self {
        self.preciocero = Some(value);
        self
    }

    pub fn stockcero(mut self, value: bool) -> Self {
        self.stockcero = Some(value);
        self
    }

    pub fn exacto(mut self, value: bool) -> Self {
        self.exacto = Some(value);
        self
    }

    /// Render the query-string pairs, filling in `default_limit` when no
    /// explicit limit was set.
    pub fn params(&self, default_limit: u32) -> Vec<(String, String)> {
        let mut params = vec![(
            "limit".to_string(),
            self.limit.unwrap_or(default_limit).to_string(),
        )];

        if let Some(ref query) = self.query {
            params.push(("query".to_string(), query.clone()));
        }
        if let Some(ref lista) = self.lista {
            params.push(("lista".to_string(), lista.clone()));
        }
        if let Some(preciocero) = self.preciocero {
            params.push(("preciocero".to_string(), preciocero.to_string()));
        }
        if let Some(stockcero) = self.stockcero {
            params.push(("stockcero".to_string(), stockcero.to_string()));
        }
        if let Some(exacto) = self.exacto {
            params.push(("exacto".to_string(), exacto.to_string()));
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_only_has_limit() {
        let params = StockQuery::new().params(5000);
        assert_eq!(params, vec![("limit".to_string(), "5000".to_string())]);
    }

    #[test]
    fn test_explicit_limit_wins() {
        let params = StockQuery::new().limit(25).params(5000);
        assert_eq!(params[0], ("limit".to_string(), "25".to_string()));
    }

    #[test]
    fn test_all_filters() {
        let params = StockQuery::new()
            .query("REM01")
            .lista("MAYORISTA")
            .preciocero(false)
            .stockcero(true)
            .exacto(true)
            .params(1000);

        assert!(params.contains(&("query".to_string(), "REM01".to_string())));
        assert!(params.contains(&("lista".to_string(), "MAYORISTA".to_string())));
        assert!(params.contains(&("preciocero".to_string(), "false".to_string())));
        assert!(params.contains(&("stockcero".to_string(), "true".to_string())));
        assert!(params.contains(&("exacto".to_string(), "true".to_string())));
    }

    #[test]
    fn test_unset_booleans_omitted() {
        let params = StockQuery::new().query("x").params(100);
        assert!(!params.iter().any(|(k, _)| k == "preciocero"));
        assert!(!params.iter().any(|(k, _)| k == "stockcero"));
        assert!(!params.iter().any(|(k, _)| k == "exacto"));
    }
}
