//! Stock and price queries: the pivoted overview, per-article detail,
//! out-of-stock listing and the flat export feed.

use tracing::debug;

use df_api::models::StockRecord;
use df_api::{ErpClient, StockQuery};
use df_export::Record;

use crate::pivot::{group_stock, price_lists, GroupedStock};
use crate::table::{truncate, Column, TextTable};
use crate::ToolError;

fn price_columns(lists: &[String]) -> Vec<Column> {
    lists
        .iter()
        .map(|lista| Column::right(format!("Precio {}", lista)))
        .collect()
}

fn grouped_row(group: &GroupedStock, lists: &[String]) -> Vec<String> {
    let mut row = vec![
        group.articulo.clone(),
        truncate(&group.articulo_descripcion, 20),
        group.color.clone(),
        group.color_descripcion.clone(),
        group.talle.clone(),
        group.talle_descripcion.clone(),
        group.stock.to_string(),
        group.disponible.to_string(),
    ];
    for lista in lists {
        row.push(group.price_cell(lista));
    }
    row
}

fn grouped_table(groups: &[GroupedStock], lists: &[String]) -> TextTable {
    let mut columns = vec![
        Column::left("Artículo"),
        Column::left("Descripción"),
        Column::left("Cod.Color"),
        Column::left("Color"),
        Column::left("Cod.Talle"),
        Column::left("Talle"),
        Column::right("Stock"),
        Column::right("Disponible"),
    ];
    columns.extend(price_columns(lists));

    let mut table = TextTable::new(columns);
    for group in groups {
        table.add_row(grouped_row(group, lists));
    }
    table
}

/// Stock and prices across the catalog, grouped by combination with one
/// price column per discovered list.
pub async fn stock_and_prices(
    client: &ErpClient,
    query: &StockQuery,
    database: Option<&str>,
) -> Result<String, ToolError> {
    let db = client.database(database);
    debug!(db, ?query, "stock_and_prices");
    let page = client.stock(db, query).await?;

    let lists = price_lists(&page.resultados);
    let groups = group_stock(&page.resultados);
    let table = grouped_table(&groups, &lists);

    let mut out = String::from("**Consulta de Stock y Precios**\n\n");
    out.push_str(&format!(
        "Total de registros: {}, Mostrando: {}\n\n",
        page.total_registros,
        groups.len()
    ));
    out.push_str(&table.render());
    if !lists.is_empty() {
        out.push_str(&format!(
            "\n\n**Listas de Precios Encontradas:** {}",
            lists.join(", ")
        ));
    }
    Ok(out)
}

/// Stock detail for one article: every color/size combination, totals and
/// the price lists it sells on.
pub async fn article_stock(
    client: &ErpClient,
    code: &str,
    database: Option<&str>,
) -> Result<String, ToolError> {
    let db = client.database(database);
    debug!(db, code, "article_stock");
    let query = StockQuery::new().query(code).exacto(true).limit(1000);
    let page = client.stock(db, &query).await?;

    let records: Vec<StockRecord> = page
        .resultados
        .into_iter()
        .filter(|r| r.articulo == code)
        .collect();
    let first = records.first().ok_or_else(|| {
        ToolError::NotFound(format!("No se encontró stock para el artículo {}", code))
    })?;

    let mut out = format!("## Stock y Precios del Artículo: {}\n\n", code);
    out.push_str(&format!(
        "**Descripción**: {}\n",
        first.articulo_descripcion
    ));
    if !first.articulo_descripcion_adicional.is_empty() {
        out.push_str(&format!(
            "**Descripción adicional**: {}\n",
            first.articulo_descripcion_adicional
        ));
    }
    out.push('\n');

    let lists = price_lists(&records);
    let groups = group_stock(&records);
    let total_stock: f64 = groups.iter().map(|g| g.stock).sum();
    let total_disponible: f64 = groups.iter().map(|g| g.disponible).sum();

    out.push_str(&grouped_table(&groups, &lists).render());

    out.push_str("\n\n**Resumen Total:**\n");
    out.push_str(&format!("- Stock total: {}\n", total_stock));
    out.push_str(&format!("- Disponible total: {}\n", total_disponible));
    out.push_str(&format!("- Combinaciones: {}\n", groups.len()));

    if !first.precios.is_empty() {
        out.push_str("\n**Listas de Precios Disponibles:**\n");
        for entry in &first.precios {
            if !entry.lista.is_empty() {
                out.push_str(&format!("- {}: ${}\n", entry.lista, entry.precio));
            }
        }
    }

    Ok(out)
}

/// Articles whose stock is exactly zero.
pub async fn out_of_stock(
    client: &ErpClient,
    limit: Option<u32>,
    database: Option<&str>,
) -> Result<String, ToolError> {
    let db = client.database(database);
    debug!(db, ?limit, "out_of_stock");
    let query = StockQuery::new().stockcero(true).limit(limit.unwrap_or(2000));
    let page = client.stock(db, &query).await?;

    let sin_stock: Vec<&StockRecord> = page
        .resultados
        .iter()
        .filter(|r| r.stock == 0.0)
        .collect();

    let mut table = TextTable::new(vec![
        Column::left("Artículo"),
        Column::left("Descripción").with_max_width(38),
        Column::left("Color"),
        Column::left("Talle"),
        Column::right("Precio"),
    ]);
    for record in &sin_stock {
        table.add_row(vec![
            record.articulo.clone(),
            truncate(&record.articulo_descripcion, 38),
            record.color_descripcion.clone(),
            record.talle_descripcion.clone(),
            format!("${}", record.precio),
        ]);
    }

    let mut out = String::from("**Artículos Sin Stock**\n\n");
    out.push_str(&format!(
        "Total sin stock encontrados: {} (de {} registros consultados)\n\n",
        sin_stock.len(),
        page.total_registros
    ));
    out.push_str(&table.render());
    Ok(out)
}

/// Flat records of the stock query, one per API row, for the exporter.
/// Price lists become `Precio_<Lista>` fields after the fixed columns.
pub async fn stock_export_records(
    client: &ErpClient,
    query: &StockQuery,
    database: Option<&str>,
) -> Result<Vec<Record>, ToolError> {
    let db = client.database(database);
    debug!(db, ?query, "stock_export_records");
    let page = client.stock(db, query).await?;

    Ok(page
        .resultados
        .iter()
        .map(|r| export_record(r, db))
        .collect())
}

fn export_record(record: &StockRecord, db: &str) -> Record {
    let mut out = Record::new();
    out.push("Articulo", record.articulo.as_str());
    out.push("Descripcion", record.articulo_descripcion.as_str());
    out.push("Codigo_Color", record.color.as_str());
    out.push("Color", record.color_descripcion.as_str());
    out.push("Codigo_Talle", record.talle.as_str());
    out.push("Talle", record.talle_descripcion.as_str());
    out.push("Stock", record.stock);
    out.push("Disponible", record.disponible);
    out.push("Comprometido", record.comprometido);
    out.push("Pendiente", record.pendiente_entrega);
    out.push("Base_Datos", db);
    for entry in &record.precios {
        if !entry.lista.is_empty() {
            out.push(format!("Precio_{}", entry.lista), entry.precio);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use df_api::models::PriceEntry;

    fn record(articulo: &str, stock: f64) -> StockRecord {
        StockRecord {
            articulo: articulo.to_string(),
            articulo_descripcion: "Remera básica".to_string(),
            color: "NEG".to_string(),
            color_descripcion: "Negro".to_string(),
            talle: "M".to_string(),
            talle_descripcion: "Mediano".to_string(),
            stock,
            disponible: stock,
            comprometido: 1.0,
            pendiente_entrega: 0.0,
            precios: vec![PriceEntry {
                lista: "MAYORISTA".to_string(),
                precio: 1500.0,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_export_record_field_order() {
        let out = export_record(&record("REM01", 4.0), "ECOMMECS");
        assert_eq!(
            out.field_names(),
            vec![
                "Articulo",
                "Descripcion",
                "Codigo_Color",
                "Color",
                "Codigo_Talle",
                "Talle",
                "Stock",
                "Disponible",
                "Comprometido",
                "Pendiente",
                "Base_Datos",
                "Precio_MAYORISTA",
            ]
        );
    }

    #[test]
    fn test_grouped_table_has_price_columns() {
        let records = vec![record("REM01", 4.0)];
        let lists = price_lists(&records);
        let groups = group_stock(&records);
        let rendered = grouped_table(&groups, &lists).render();
        assert!(rendered.contains("Precio MAYORISTA"));
        assert!(rendered.contains("$1500"));
    }
}
