//! Grouping of stock rows and pivoting of their price lists into columns.
//!
//! The API returns one row per (article, color, size) per price list context;
//! the `Precios` array on each row carries the full set of lists. Grouping
//! collapses duplicate combinations and merges their price entries so one
//! table row can show every list side by side.

use std::collections::BTreeMap;

use df_api::models::StockRecord;

/// Distinct price-list names across all records, sorted.
pub fn price_lists(records: &[StockRecord]) -> Vec<String> {
    let mut lists: Vec<String> = records
        .iter()
        .flat_map(|r| r.precios.iter())
        .filter(|p| !p.lista.is_empty())
        .map(|p| p.lista.clone())
        .collect();
    lists.sort();
    lists.dedup();
    lists
}

/// One (article, color, size) combination with its merged prices.
#[derive(Debug, Clone)]
pub struct GroupedStock {
    pub articulo: String,
    pub articulo_descripcion: String,
    pub color: String,
    pub color_descripcion: String,
    pub talle: String,
    pub talle_descripcion: String,
    pub stock: f64,
    pub disponible: f64,
    /// Price per list name; lists absent from the combination are simply
    /// missing and render as `-`.
    pub prices: BTreeMap<String, f64>,
}

impl GroupedStock {
    /// Cell text for one price list: `$<value>` or `-` when absent or zero.
    pub fn price_cell(&self, lista: &str) -> String {
        match self.prices.get(lista) {
            Some(&precio) if precio > 0.0 => format!("${}", precio),
            _ => "-".to_string(),
        }
    }
}

/// Group records by (Articulo, Color, Talle), preserving first-seen order.
/// The first record of a group supplies the display fields; every record of
/// the group contributes its price entries.
pub fn group_stock(records: &[StockRecord]) -> Vec<GroupedStock> {
    let mut order: Vec<(String, String, String)> = Vec::new();
    let mut groups: BTreeMap<(String, String, String), GroupedStock> = BTreeMap::new();

    for record in records {
        let key = (
            record.articulo.clone(),
            record.color.clone(),
            record.talle.clone(),
        );
        let group = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            GroupedStock {
                articulo: record.articulo.clone(),
                articulo_descripcion: record.articulo_descripcion.clone(),
                color: record.color.clone(),
                color_descripcion: record.color_descripcion.clone(),
                talle: record.talle.clone(),
                talle_descripcion: record.talle_descripcion.clone(),
                stock: record.stock,
                disponible: record.disponible,
                prices: BTreeMap::new(),
            }
        });
        for entry in &record.precios {
            if !entry.lista.is_empty() {
                group.prices.insert(entry.lista.clone(), entry.precio);
            }
        }
    }

    order
        .into_iter()
        .filter_map(|key| groups.remove(&key))
        .collect()
}
