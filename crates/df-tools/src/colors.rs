//! Color catalog listing.

use tracing::debug;

use df_api::ErpClient;

use crate::table::{Column, TextTable};
use crate::ToolError;

/// Code/description/RGB table of every color.
pub async fn list_colors(client: &ErpClient, database: Option<&str>) -> Result<String, ToolError> {
    let db = client.database(database);
    debug!(db, "list_colors");
    let page = client.colors(db).await?;

    let mut table = TextTable::new(vec![
        Column::left("Código"),
        Column::left("Descripción"),
        Column::left("RGB"),
    ]);
    for color in &page.resultados {
        table.add_row(vec![
            color.codigo.clone(),
            color.descripcion.clone(),
            color.hex(),
        ]);
    }

    Ok(format!(
        "Total de colores: {}\n\n{}",
        page.resultados.len(),
        table.render()
    ))
}
