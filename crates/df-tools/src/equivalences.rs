//! Equivalences: alternative codes (barcodes, GTINs) for article
//! combinations.

use tracing::debug;

use df_api::models::Equivalence;
use df_api::ErpClient;

use crate::lookup::DescriptionIndex;
use crate::table::{truncate, Column, TextTable};
use crate::{opt_display, si_no, ToolError};

fn cantidad_cell(equivalence: &Equivalence) -> String {
    format!("{:.2}", equivalence.cantidad)
}

/// Table of equivalences with article, color and size descriptions resolved.
pub async fn list_equivalences(
    client: &ErpClient,
    limit: Option<u32>,
    database: Option<&str>,
) -> Result<String, ToolError> {
    let db = client.database(database);
    debug!(db, ?limit, "list_equivalences");
    let page = client.equivalences(db, limit).await?;
    let (articles, colors, sizes) = DescriptionIndex::for_equivalences(client, db).await?;

    let mut table = TextTable::new(vec![
        Column::left("Código"),
        Column::left("Artículo"),
        Column::left("DescArt").with_max_width(25),
        Column::left("Color"),
        Column::left("DescColor").with_max_width(15),
        Column::left("Talle"),
        Column::left("DescTalle").with_max_width(12),
        Column::left("Cantidad"),
        Column::left("GTIN"),
        Column::left("Observación").with_max_width(23),
    ]);
    for equivalence in &page.resultados {
        table.add_row(vec![
            equivalence.codigo.clone(),
            equivalence.articulo.clone(),
            articles.describe(&equivalence.articulo),
            equivalence.color.clone(),
            colors.describe(&equivalence.color),
            equivalence.talle.clone(),
            sizes.describe(&equivalence.talle),
            cantidad_cell(equivalence),
            si_no(equivalence.es_gtin).to_string(),
            truncate(&equivalence.observacion, 23),
        ]);
    }

    let mut out = format!("**Equivalencias - BD: {}**\n", db);
    out.push_str("Combinaciones de artículos con códigos equivalentes\n\n");
    out.push_str(&format!(
        "Total de equivalencias: {}, Mostrando: {}\n\n",
        page.total_registros,
        page.resultados.len()
    ));
    out.push_str(&table.render());

    out.push_str("\n\n**LEYENDA DE CAMPOS:**\n");
    out.push_str("- **Código**: Código único de la equivalencia\n");
    out.push_str("- **Artículo**: Código del artículo + descripción completa\n");
    out.push_str("- **Color**: Código del color + descripción\n");
    out.push_str("- **Talle**: Código del talle + descripción\n");
    out.push_str("- **Cantidad**: Cantidad asociada a la equivalencia\n");
    out.push_str("- **GTIN**: Si cumple con código RG2904/10\n");
    out.push_str("- **Observación**: Notas adicionales sobre la equivalencia\n");
    out.push_str(
        "\n**Nota**: Las equivalencias definen códigos alternativos para combinaciones específicas de artículo-color-talle\n",
    );

    Ok(out)
}

/// Markdown detail of one equivalence.
pub async fn equivalence_detail(
    client: &ErpClient,
    code: &str,
    database: Option<&str>,
) -> Result<String, ToolError> {
    let db = client.database(database);
    debug!(db, code, "equivalence_detail");
    let page = client.equivalences(db, None).await?;

    let equivalence = page
        .resultados
        .iter()
        .find(|e| e.codigo == code)
        .ok_or_else(|| {
            ToolError::NotFound(format!(
                "No se encontró ninguna equivalencia con el código **{}** en la base de datos **{}**",
                code, db
            ))
        })?;

    let (articles, colors, sizes) = DescriptionIndex::for_equivalences(client, db).await?;

    let mut out = format!("# Detalle de Equivalencia: **{}**\n", code);
    out.push_str(&format!("**Base de datos:** {}\n\n", db));

    out.push_str("## INFORMACIÓN BÁSICA\n");
    out.push_str(&format!(
        "**Código de Equivalencia:** {}\n",
        equivalence.codigo
    ));
    out.push_str(&format!(
        "**Tipo de Agrupamiento:** {}\n",
        opt_display(
            &equivalence.tipo_agrupamiento_publicaciones,
            "No especificado"
        )
    ));

    out.push_str("\n## COMBINACIÓN\n");
    out.push_str(&format!(
        "**Artículo:** {} - {}\n",
        equivalence.articulo,
        articles.describe(&equivalence.articulo)
    ));
    out.push_str(&format!(
        "**Color:** {} - {}\n",
        equivalence.color,
        colors.describe(&equivalence.color)
    ));
    out.push_str(&format!(
        "**Talle:** {} - {}\n",
        equivalence.talle,
        sizes.describe(&equivalence.talle)
    ));

    out.push_str("\n## DETALLES ADICIONALES\n");
    out.push_str(&format!("**Cantidad:** {}\n", cantidad_cell(equivalence)));
    out.push_str(&format!(
        "**Es GTIN:** {} (Código RG2904/10)\n",
        si_no(equivalence.es_gtin)
    ));
    if !equivalence.observacion.is_empty() {
        out.push_str(&format!("**Observaciones:** {}\n", equivalence.observacion));
    }

    if !equivalence.agrupubli_detalle.is_empty() {
        out.push_str("\n## AGRUPAMIENTO DE PUBLICACIONES\n");
        let mut table = TextTable::new(vec![Column::left("Detalle")]);
        for detalle in &equivalence.agrupubli_detalle {
            table.add_row(vec![detalle.to_string()]);
        }
        out.push_str(&table.render());
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cantidad_two_decimals() {
        let equivalence = Equivalence {
            cantidad: 1.5,
            ..Default::default()
        };
        assert_eq!(cantidad_cell(&equivalence), "1.50");

        let zero = Equivalence::default();
        assert_eq!(cantidad_cell(&zero), "0.00");
    }
}
