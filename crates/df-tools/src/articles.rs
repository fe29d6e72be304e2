//! Article catalog tools: listing, full detail and the wide all-fields table.

use tracing::debug;

use df_api::models::Article;
use df_api::{ErpClient, Taxonomy};

use crate::lookup::TaxonomyIndex;
use crate::table::{truncate, Column, TextTable};
use crate::{opt_display, si_no, ToolError};

/// Code/description table of articles.
pub async fn list_articles(
    client: &ErpClient,
    limit: Option<u32>,
    database: Option<&str>,
) -> Result<String, ToolError> {
    let db = client.database(database);
    debug!(db, ?limit, "list_articles");
    let page = client.articles(db, limit).await?;

    let mut table = TextTable::new(vec![
        Column::left("Código"),
        Column::left("Descripción").with_max_width(50),
    ]);
    for article in &page.resultados {
        table.add_row(vec![article.codigo.clone(), article.descripcion.clone()]);
    }

    Ok(format!(
        "Total de artículos: {}, Mostrando: {}\n\n{}",
        page.total_registros,
        page.resultados.len(),
        table.render()
    ))
}

/// Markdown detail of one article, with every taxonomy code resolved to its
/// description.
pub async fn article_detail(
    client: &ErpClient,
    code: &str,
    database: Option<&str>,
) -> Result<String, ToolError> {
    let db = client.database(database);
    debug!(db, code, "article_detail");
    let page = client.articles(db, None).await?;

    let article = page
        .resultados
        .iter()
        .find(|a| a.codigo == code)
        .ok_or_else(|| {
            ToolError::NotFound(format!(
                "No se encontró ningún artículo con el código **{}** en la base de datos **{}**",
                code, db
            ))
        })?;

    let mut index = TaxonomyIndex::new(client, db);

    let mut out = format!("# Detalle Completo del Artículo: **{}**\n", code);
    out.push_str(&format!("**Base de datos:** {}\n\n", db));

    out.push_str("## INFORMACIÓN BÁSICA\n");
    out.push_str(&format!("**Código:** {}\n", article.codigo));
    let descripcion = if article.descripcion.is_empty() {
        "Sin descripción"
    } else {
        &article.descripcion
    };
    out.push_str(&format!("**Descripción:** {}\n", descripcion));
    if !article.descripcion_adicional.is_empty() {
        out.push_str(&format!(
            "**Descripción adicional:** {}\n",
            article.descripcion_adicional
        ));
    }

    out.push_str("\n## TIPIFICACIONES\n");
    let typifications = [
        ("Familia", Taxonomy::Familia, &article.familia),
        (
            "Tipo de Artículo",
            Taxonomy::TipoDeArticulo,
            &article.tipo_de_articulo,
        ),
        ("Línea", Taxonomy::Linea, &article.linea),
        ("Grupo", Taxonomy::Grupo, &article.grupo),
        (
            "Categoría",
            Taxonomy::CategoriaDeArticulo,
            &article.categoria_de_articulo,
        ),
        ("Material", Taxonomy::Material, &article.material),
        (
            "Clasificación",
            Taxonomy::ClasificacionArticulo,
            &article.clasificacion,
        ),
    ];
    for (label, kind, code) in typifications {
        let desc = index.describe(kind, code).await;
        out.push_str(&format!("**{}:** {} - {}\n", label, code, desc));
    }

    out.push_str("\n## INFORMACIÓN COMERCIAL\n");
    let commercial = [
        ("Proveedor", Taxonomy::Proveedor, &article.proveedor),
        (
            "Unidad de Medida",
            Taxonomy::UnidadDeMedida,
            &article.unidad_de_medida,
        ),
        ("Temporada", Taxonomy::Temporada, &article.temporada),
        (
            "Paleta de Colores",
            Taxonomy::PaletaDeColores,
            &article.paleta_de_colores,
        ),
        (
            "Curva de Talles",
            Taxonomy::CurvaDeTalles,
            &article.curva_de_talles,
        ),
    ];
    for (label, kind, code) in commercial {
        let desc = index.describe(kind, code).await;
        out.push_str(&format!("**{}:** {} - {}\n", label, code, desc));
    }

    out.push_str("\n## INFORMACIÓN ADICIONAL\n");
    out.push_str(&format!("**Importado:** {}\n", si_no(article.importado)));
    out.push_str(&format!(
        "**Año:** {}\n",
        opt_display(&article.ano, "No especificado")
    ));
    out.push_str(&format!(
        "**Peso:** {}\n",
        opt_display(&article.peso, "No especificado")
    ));
    let marca = if article.marca.is_empty() {
        "No especificada"
    } else {
        &article.marca
    };
    out.push_str(&format!("**Marca:** {}\n", marca));

    out.push_str("\n## CONFIGURACIONES\n");
    out.push_str(&format!(
        "**Comportamiento:** {}\n",
        opt_display(&article.comportamiento, "No especificado")
    ));
    out.push_str(&format!(
        "**No Permite Devoluciones:** {}\n",
        si_no(article.no_permite_devoluciones)
    ));
    out.push_str(&format!(
        "**Restringir Descuentos:** {}\n",
        si_no(article.restringir_descuentos)
    ));
    out.push_str(&format!(
        "**No Publicar en E-commerce:** {}\n",
        si_no(article.no_publicar_en_ecommerce)
    ));
    out.push_str(&format!(
        "**Solo Promo y Kit:** {}\n",
        si_no(article.solo_promo_y_kit)
    ));

    out.push_str("\n## INFORMACIÓN FISCAL\n");
    out.push_str(&format!(
        "**Condición IVA Ventas:** {}\n",
        opt_display(&article.condicion_iva_ventas, "No especificada")
    ));
    out.push_str(&format!(
        "**% IVA Ventas:** {}%\n",
        article.porcentaje_iva_ventas.unwrap_or(0.0)
    ));
    out.push_str(&format!(
        "**Condición IVA Compras:** {}\n",
        opt_display(&article.condicion_iva_compras, "No especificada")
    ));
    out.push_str(&format!(
        "**% IVA Compras:** {}%\n",
        article.porcentaje_iva_compras.unwrap_or(0.0)
    ));
    let nomenclador = if article.nomenclador.is_empty() {
        "No especificado"
    } else {
        &article.nomenclador
    };
    out.push_str(&format!("**Nomenclador:** {}\n", nomenclador));

    let has_ecommerce = !article.desc_ecommerce.is_empty()
        || article.largo.is_some()
        || article.ancho.is_some()
        || article.alto.is_some()
        || !article.imagen.is_empty();
    if has_ecommerce {
        out.push_str("\n## E-COMMERCE\n");
        if !article.desc_ecommerce.is_empty() {
            out.push_str(&format!(
                "**Descripción E-commerce:** {}\n",
                article.desc_ecommerce
            ));
        }
        if article.largo.is_some() {
            out.push_str(&format!(
                "**Dimensiones:** {} x {} x {}\n",
                article.largo.unwrap_or(0.0),
                article.ancho.unwrap_or(0.0),
                article.alto.unwrap_or(0.0)
            ));
        }
        if !article.imagen.is_empty() {
            out.push_str(&format!("**Imagen:** {}\n", article.imagen));
        }
    }

    if !article.participantes_detalle.is_empty() {
        out.push_str("\n## COMPONENTES DEL KIT\n");
        let mut table = TextTable::new(vec![
            Column::left("Artículo"),
            Column::left("Descripción"),
            Column::left("Cantidad"),
            Column::left("Color"),
            Column::left("Talle"),
        ]);
        for comp in &article.participantes_detalle {
            table.add_row(vec![
                comp.articulo.clone(),
                comp.articulo_detalle.clone(),
                comp.cantidad.to_string(),
                comp.color_detalle.clone(),
                comp.talle.clone(),
            ]);
        }
        out.push_str(&table.render());
    }

    Ok(out)
}

const FULL_TABLE_HEADERS: [&str; 54] = [
    "Código",
    "Descripción",
    "DescAdicional",
    "Familia",
    "DescFamilia",
    "Tipo",
    "DescTipo",
    "Línea",
    "DescLínea",
    "Grupo",
    "DescGrupo",
    "Categoría",
    "DescCategoría",
    "Material",
    "DescMaterial",
    "Clasificación",
    "DescClasificación",
    "Proveedor",
    "DescProveedor",
    "UM",
    "DescUM",
    "Temporada",
    "DescTemporada",
    "Año",
    "Importado",
    "Peso",
    "Marca",
    "Comportamiento",
    "TipoAgrup",
    "NoDevol",
    "RestDesc",
    "ReqCC",
    "NoEcomm",
    "SoloPromo",
    "CondIVAVent",
    "%IVAVent",
    "CondIVAComp",
    "%IVAComp",
    "%ImpInt",
    "Nomenclador",
    "PercIVA",
    "PaletaCol",
    "DescPaletaCol",
    "CurvaTall",
    "DescCurvaTall",
    "NoComercial",
    "RestArt",
    "ImprDespach",
    "DescEcomm",
    "DescHTML",
    "Largo",
    "Ancho",
    "Alto",
    "Imagen",
];

fn opt_num_cell<T: std::fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

fn percent_cell(value: &Option<f64>) -> String {
    match value {
        Some(v) if *v != 0.0 => format!("{}%", v),
        _ => String::new(),
    }
}

async fn full_table_row(
    article: &Article,
    index: &mut TaxonomyIndex<'_>,
) -> Vec<String> {
    vec![
        article.codigo.clone(),
        truncate(&article.descripcion, 30),
        truncate(&article.descripcion_adicional, 20),
        article.familia.clone(),
        index.describe_brief(Taxonomy::Familia, &article.familia, 15).await,
        article.tipo_de_articulo.clone(),
        index
            .describe_brief(Taxonomy::TipoDeArticulo, &article.tipo_de_articulo, 15)
            .await,
        article.linea.clone(),
        index.describe_brief(Taxonomy::Linea, &article.linea, 15).await,
        article.grupo.clone(),
        index.describe_brief(Taxonomy::Grupo, &article.grupo, 15).await,
        article.categoria_de_articulo.clone(),
        index
            .describe_brief(
                Taxonomy::CategoriaDeArticulo,
                &article.categoria_de_articulo,
                15,
            )
            .await,
        article.material.clone(),
        index.describe_brief(Taxonomy::Material, &article.material, 15).await,
        article.clasificacion.clone(),
        index
            .describe_brief(Taxonomy::ClasificacionArticulo, &article.clasificacion, 15)
            .await,
        article.proveedor.clone(),
        index.describe_brief(Taxonomy::Proveedor, &article.proveedor, 15).await,
        article.unidad_de_medida.clone(),
        index
            .describe_brief(Taxonomy::UnidadDeMedida, &article.unidad_de_medida, 15)
            .await,
        article.temporada.clone(),
        index.describe_brief(Taxonomy::Temporada, &article.temporada, 15).await,
        opt_num_cell(&article.ano),
        si_no(article.importado).to_string(),
        opt_num_cell(&article.peso),
        article.marca.clone(),
        opt_num_cell(&article.comportamiento),
        opt_num_cell(&article.tipo_agrupamiento_publicaciones),
        si_no(article.no_permite_devoluciones).to_string(),
        si_no(article.restringir_descuentos).to_string(),
        opt_num_cell(&article.requiere_ccosto),
        si_no(article.no_publicar_en_ecommerce).to_string(),
        si_no(article.solo_promo_y_kit).to_string(),
        opt_num_cell(&article.condicion_iva_ventas),
        percent_cell(&article.porcentaje_iva_ventas),
        opt_num_cell(&article.condicion_iva_compras),
        percent_cell(&article.porcentaje_iva_compras),
        percent_cell(&article.porcentaje_impuesto_interno),
        article.nomenclador.clone(),
        opt_num_cell(&article.percepcion_iva_rg5329),
        article.paleta_de_colores.clone(),
        index
            .describe_brief(Taxonomy::PaletaDeColores, &article.paleta_de_colores, 15)
            .await,
        article.curva_de_talles.clone(),
        index
            .describe_brief(Taxonomy::CurvaDeTalles, &article.curva_de_talles, 15)
            .await,
        opt_num_cell(&article.no_comercializable),
        opt_num_cell(&article.restringir_articulo),
        si_no(article.imprime_despacho).to_string(),
        truncate(&article.desc_ecommerce, 15),
        truncate(&article.desc_ecommerce_html, 10),
        opt_num_cell(&article.largo),
        opt_num_cell(&article.ancho),
        opt_num_cell(&article.alto),
        truncate(&article.imagen, 25),
    ]
}

/// Wide table with every article field, taxonomy descriptions resolved.
pub async fn list_articles_full(
    client: &ErpClient,
    limit: Option<u32>,
    database: Option<&str>,
) -> Result<String, ToolError> {
    let db = client.database(database);
    debug!(db, ?limit, "list_articles_full");
    let page = client.articles(db, limit).await?;

    let mut index = TaxonomyIndex::new(client, db);
    let mut table = TextTable::new(
        FULL_TABLE_HEADERS
            .iter()
            .map(|h| Column::left(*h))
            .collect(),
    );
    for article in &page.resultados {
        let row = full_table_row(article, &mut index).await;
        table.add_row(row);
    }

    let mut out = format!("**Tabla Completa de Artículos - BD: {}**\n\n", db);
    out.push_str(&format!(
        "Total de artículos: {}, Mostrando: {}\n",
        page.total_registros,
        page.resultados.len()
    ));
    out.push_str(&format!(
        "Mostrando {} campos por artículo\n\n",
        FULL_TABLE_HEADERS.len()
    ));
    out.push_str(&table.render());

    out.push_str("\n\n**LEYENDA DE CAMPOS:**\n");
    out.push_str("- **Básicos**: Código, Descripción, DescAdicional\n");
    out.push_str("- **Tipificaciones**: Familia, Tipo, Línea, Grupo, Categoría, Material, Clasificación (cada una con su descripción)\n");
    out.push_str("- **Generales**: Proveedor, UM, Temporada, Año, Importado, Peso, Marca\n");
    out.push_str("- **Configuraciones**: Comportamiento, TipoAgrup, NoDevol, RestDesc, ReqCC, NoEcomm, SoloPromo\n");
    out.push_str("- **Fiscales**: CondIVAVent, %IVAVent, CondIVAComp, %IVAComp, %ImpInt, Nomenclador, PercIVA\n");
    out.push_str("- **Condicionales**: PaletaCol, CurvaTall, NoComercial, RestArt, ImprDespach\n");
    out.push_str("- **E-commerce**: DescEcomm, DescHTML, Largo, Ancho, Alto, Imagen\n");

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_table_has_54_columns() {
        assert_eq!(FULL_TABLE_HEADERS.len(), 54);
    }

    #[test]
    fn test_percent_cell() {
        assert_eq!(percent_cell(&Some(21.0)), "21%");
        assert_eq!(percent_cell(&Some(0.0)), "");
        assert_eq!(percent_cell(&None), "");
    }

    #[test]
    fn test_opt_num_cell() {
        assert_eq!(opt_num_cell(&Some(2024)), "2024");
        assert_eq!(opt_num_cell(&None::<i64>), "");
    }
}
