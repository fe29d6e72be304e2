//! Article taxonomy listings and the cross-taxonomy summary.

use tracing::{debug, warn};

use df_api::{ErpClient, Taxonomy};

use crate::table::{Column, TextTable};
use crate::ToolError;

/// Code/description table of one taxonomy, with its display name and blurb.
pub async fn list_taxonomy(
    client: &ErpClient,
    kind: Taxonomy,
    database: Option<&str>,
) -> Result<String, ToolError> {
    let db = client.database(database);
    debug!(db, taxonomy = %kind, "list_taxonomy");
    let page = client.taxonomy(db, kind).await?;

    let mut table = TextTable::new(vec![
        Column::left("Código"),
        Column::left("Descripción").with_max_width(50),
    ]);
    for entry in &page.resultados {
        table.add_row(vec![entry.codigo.clone(), entry.label().to_string()]);
    }

    let mut out = format!("**{} - BD: {}**\n", kind.display_name(), db);
    out.push_str(&format!("{}\n\n", kind.blurb()));
    out.push_str(&format!(
        "Total de {}: {}\n\n",
        kind.display_name().to_lowercase(),
        page.resultados.len()
    ));
    out.push_str(&table.render());
    Ok(out)
}

/// One-row-per-taxonomy summary with item counts. A failing endpoint puts
/// `Error` in its count cell instead of failing the whole summary.
pub async fn taxonomy_summary(
    client: &ErpClient,
    database: Option<&str>,
) -> Result<String, ToolError> {
    let db = client.database(database);
    debug!(db, "taxonomy_summary");

    let mut table = TextTable::new(vec![
        Column::left("Tipificación"),
        Column::left("Total Items"),
        Column::left("Descripción").with_max_width(40),
    ]);
    for kind in Taxonomy::ALL {
        let count = match client.taxonomy(db, kind).await {
            Ok(page) => page.resultados.len().to_string(),
            Err(e) => {
                warn!(taxonomy = %kind, error = %e, "summary fetch failed");
                "Error".to_string()
            }
        };
        table.add_row(vec![
            kind.display_name().to_string(),
            count,
            kind.blurb().to_string(),
        ]);
    }

    let mut out = format!("**Resumen de Tipificaciones - BD: {}**\n\n", db);
    out.push_str(&table.render());
    out.push_str(
        "\n\n**Uso**: Utiliza `list_taxonomy` con el nombre de la tipificación para obtener detalles completos.",
    );
    Ok(out)
}
