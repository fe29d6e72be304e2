//! Size catalog listing.

use tracing::debug;

use df_api::ErpClient;

use crate::table::{Column, TextTable};
use crate::ToolError;

/// Code/description/order table of every size.
pub async fn list_sizes(client: &ErpClient, database: Option<&str>) -> Result<String, ToolError> {
    let db = client.database(database);
    debug!(db, "list_sizes");
    let page = client.sizes(db).await?;

    let mut table = TextTable::new(vec![
        Column::left("Código"),
        Column::left("Descripción"),
        Column::right("Orden"),
    ]);
    for size in &page.resultados {
        table.add_row(vec![
            size.codigo.clone(),
            size.descripcion.clone(),
            size.orden.to_string(),
        ]);
    }

    Ok(format!(
        "Total de talles: {}\n\n{}",
        page.resultados.len(),
        table.render()
    ))
}
