//! Code-to-description lookups, fetched once per tool call.

use std::collections::HashMap;

use tracing::warn;

use df_api::{ErpClient, Taxonomy};

use crate::table::truncate;
use crate::ToolError;

pub const NO_ASIGNADO: &str = "No asignado";
pub const SIN_DESCRIPCION: &str = "Sin descripción";
pub const CODIGO_NO_ENCONTRADO: &str = "Código no encontrado";
pub const ERROR_OBTENER_DESCRIPCION: &str = "Error al obtener descripción";

/// Descriptions of taxonomy codes, keyed by taxonomy and code.
///
/// Each taxonomy referenced is fetched at most once; a failed fetch is
/// remembered so every lookup against it reports the error instead of
/// retrying.
pub struct TaxonomyIndex<'a> {
    client: &'a ErpClient,
    db: &'a str,
    loaded: HashMap<Taxonomy, Option<HashMap<String, String>>>,
}

impl<'a> TaxonomyIndex<'a> {
    pub fn new(client: &'a ErpClient, db: &'a str) -> Self {
        TaxonomyIndex {
            client,
            db,
            loaded: HashMap::new(),
        }
    }

    async fn entries(&mut self, kind: Taxonomy) -> Option<&HashMap<String, String>> {
        if !self.loaded.contains_key(&kind) {
            let fetched = match self.client.taxonomy(self.db, kind).await {
                Ok(page) => Some(
                    page.resultados
                        .into_iter()
                        .map(|e| (e.codigo.clone(), e.label().to_string()))
                        .collect(),
                ),
                Err(e) => {
                    warn!(taxonomy = %kind, error = %e, "taxonomy fetch failed");
                    None
                }
            };
            self.loaded.insert(kind, fetched);
        }
        self.loaded.get(&kind).and_then(|o| o.as_ref())
    }

    /// Description for a code, with the placeholder wording of the detail
    /// views: unassigned, not found, or fetch error.
    pub async fn describe(&mut self, kind: Taxonomy, code: &str) -> String {
        if code.is_empty() {
            return NO_ASIGNADO.to_string();
        }
        match self.entries(kind).await {
            Some(entries) => match entries.get(code) {
                Some(label) if !label.is_empty() => label.clone(),
                Some(_) => SIN_DESCRIPCION.to_string(),
                None => CODIGO_NO_ENCONTRADO.to_string(),
            },
            None => ERROR_OBTENER_DESCRIPCION.to_string(),
        }
    }

    /// Like [`describe`](Self::describe) but empty on any miss, truncated to
    /// `max` characters; used for the wide article table.
    pub async fn describe_brief(&mut self, kind: Taxonomy, code: &str, max: usize) -> String {
        if code.is_empty() {
            return String::new();
        }
        match self.entries(kind).await {
            Some(entries) => match entries.get(code) {
                Some(label) => truncate(label, max),
                None => String::new(),
            },
            None => String::new(),
        }
    }
}

/// A plain code -> description map fetched from one catalog endpoint.
pub struct DescriptionIndex {
    entries: HashMap<String, String>,
    max_width: usize,
}

impl DescriptionIndex {
    pub fn new(entries: HashMap<String, String>, max_width: usize) -> Self {
        DescriptionIndex { entries, max_width }
    }

    /// Indexes over the article, color and size catalogs, used to annotate
    /// equivalences. Widths follow the equivalence table layout.
    pub async fn for_equivalences(
        client: &ErpClient,
        db: &str,
    ) -> Result<(Self, Self, Self), ToolError> {
        let articles = client.articles(db, None).await?;
        let colors = client.colors(db).await?;
        let sizes = client.sizes(db).await?;

        let articles = DescriptionIndex::new(
            articles
                .resultados
                .into_iter()
                .map(|a| (a.codigo, a.descripcion))
                .collect(),
            40,
        );
        let colors = DescriptionIndex::new(
            colors
                .resultados
                .into_iter()
                .map(|c| (c.codigo, c.descripcion))
                .collect(),
            20,
        );
        let sizes = DescriptionIndex::new(
            sizes
                .resultados
                .into_iter()
                .map(|s| (s.codigo, s.descripcion))
                .collect(),
            15,
        );
        Ok((articles, colors, sizes))
    }

    pub fn describe(&self, code: &str) -> String {
        if code.is_empty() {
            return NO_ASIGNADO.to_string();
        }
        match self.entries.get(code) {
            Some(desc) if !desc.is_empty() => truncate(desc, self.max_width),
            Some(_) => SIN_DESCRIPCION.to_string(),
            None => CODIGO_NO_ENCONTRADO.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_index_placeholders() {
        let mut entries = HashMap::new();
        entries.insert("NEG".to_string(), "Negro".to_string());
        entries.insert("VAC".to_string(), String::new());
        let index = DescriptionIndex::new(entries, 20);

        assert_eq!(index.describe("NEG"), "Negro");
        assert_eq!(index.describe(""), NO_ASIGNADO);
        assert_eq!(index.describe("VAC"), SIN_DESCRIPCION);
        assert_eq!(index.describe("XXX"), CODIGO_NO_ENCONTRADO);
    }

    #[test]
    fn test_description_index_truncates() {
        let mut entries = HashMap::new();
        entries.insert(
            "A".to_string(),
            "una descripción larguísima de un color".to_string(),
        );
        let index = DescriptionIndex::new(entries, 10);
        assert_eq!(index.describe("A"), "una des...");
    }
}
