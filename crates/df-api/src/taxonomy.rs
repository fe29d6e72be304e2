use std::fmt;
use std::str::FromStr;

/// The article taxonomies exposed by the API, each on its own endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Taxonomy {
    Familia,
    TipoDeArticulo,
    Linea,
    Grupo,
    Material,
    ClasificacionArticulo,
    CategoriaDeArticulo,
    Proveedor,
    UnidadDeMedida,
    Temporada,
    PaletaDeColores,
    CurvaDeTalles,
}

impl Taxonomy {
    pub const ALL: [Taxonomy; 12] = [
        Taxonomy::Familia,
        Taxonomy::TipoDeArticulo,
        Taxonomy::Linea,
        Taxonomy::Grupo,
        Taxonomy::Material,
        Taxonomy::ClasificacionArticulo,
        Taxonomy::CategoriaDeArticulo,
        Taxonomy::Proveedor,
        Taxonomy::UnidadDeMedida,
        Taxonomy::Temporada,
        Taxonomy::PaletaDeColores,
        Taxonomy::CurvaDeTalles,
    ];

    /// Path segment of the endpoint, as spelled by the upstream API.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Taxonomy::Familia => "Familia",
            Taxonomy::TipoDeArticulo => "Tipodearticulo",
            Taxonomy::Linea => "Linea",
            Taxonomy::Grupo => "Grupo",
            Taxonomy::Material => "Material",
            Taxonomy::ClasificacionArticulo => "Clasificacionarticulo",
            Taxonomy::CategoriaDeArticulo => "Categoriadearticulo",
            Taxonomy::Proveedor => "Proveedor",
            Taxonomy::UnidadDeMedida => "Unidaddemedida",
            Taxonomy::Temporada => "Temporada",
            Taxonomy::PaletaDeColores => "Paletadecolores",
            Taxonomy::CurvaDeTalles => "Curvadetalles",
        }
    }

    /// Human-facing plural name used in table headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Taxonomy::Familia => "Familias",
            Taxonomy::TipoDeArticulo => "Tipos de Artículo",
            Taxonomy::Linea => "Líneas",
            Taxonomy::Grupo => "Grupos",
            Taxonomy::Material => "Materiales",
            Taxonomy::ClasificacionArticulo => "Clasificaciones de Artículo",
            Taxonomy::CategoriaDeArticulo => "Categorías de Artículo",
            Taxonomy::Proveedor => "Proveedores",
            Taxonomy::UnidadDeMedida => "Unidades de Medida",
            Taxonomy::Temporada => "Temporadas",
            Taxonomy::PaletaDeColores => "Paletas de Colores",
            Taxonomy::CurvaDeTalles => "Curvas de Talles",
        }
    }

    /// One-line description shown under the table header.
    pub fn blurb(&self) -> &'static str {
        match self {
            Taxonomy::Familia => "Grupos de productos similares",
            Taxonomy::TipoDeArticulo => "Clasificación del tipo de producto",
            Taxonomy::Linea => "Marcas o líneas comerciales",
            Taxonomy::Grupo => "Agrupaciones de artículos",
            Taxonomy::Material => "Materiales de fabricación",
            Taxonomy::ClasificacionArticulo => "Clasificaciones específicas de artículos",
            Taxonomy::CategoriaDeArticulo => "Categorías comerciales de artículos",
            Taxonomy::Proveedor => "Empresas proveedoras",
            Taxonomy::UnidadDeMedida => "Unidades de medida para artículos",
            Taxonomy::Temporada => "Temporadas comerciales",
            Taxonomy::PaletaDeColores => "Conjuntos de colores disponibles",
            Taxonomy::CurvaDeTalles => "Conjuntos de talles disponibles",
        }
    }

    /// Proveedor is the one taxonomy whose entries carry `Nombre` instead of
    /// `Descripcion`.
    pub fn uses_nombre(&self) -> bool {
        matches!(self, Taxonomy::Proveedor)
    }
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

impl FromStr for Taxonomy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        let taxonomy = match normalized.as_str() {
            "familia" | "familias" => Taxonomy::Familia,
            "tipodearticulo" | "tiposdearticulo" | "tipo" => Taxonomy::TipoDeArticulo,
            "linea" | "lineas" => Taxonomy::Linea,
            "grupo" | "grupos" => Taxonomy::Grupo,
            "material" | "materiales" => Taxonomy::Material,
            "clasificacionarticulo" | "clasificacion" => Taxonomy::ClasificacionArticulo,
            "categoriadearticulo" | "categoria" => Taxonomy::CategoriaDeArticulo,
            "proveedor" | "proveedores" => Taxonomy::Proveedor,
            "unidaddemedida" | "unidadesdemedida" | "um" => Taxonomy::UnidadDeMedida,
            "temporada" | "temporadas" => Taxonomy::Temporada,
            "paletadecolores" | "paleta" => Taxonomy::PaletaDeColores,
            "curvadetalles" | "curva" => Taxonomy::CurvaDeTalles,
            _ => {
                return Err(format!(
                    "Unknown taxonomy '{}'. Valid options: {}",
                    s,
                    Taxonomy::ALL
                        .iter()
                        .map(|t| t.endpoint().to_lowercase())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            }
        };
        Ok(taxonomy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_twelve() {
        assert_eq!(Taxonomy::ALL.len(), 12);
    }

    #[test]
    fn test_endpoint_spelling() {
        // The upstream API lowercases everything after the first letter.
        assert_eq!(Taxonomy::TipoDeArticulo.endpoint(), "Tipodearticulo");
        assert_eq!(Taxonomy::CategoriaDeArticulo.endpoint(), "Categoriadearticulo");
        assert_eq!(Taxonomy::PaletaDeColores.endpoint(), "Paletadecolores");
    }

    #[test]
    fn test_from_str_variants() {
        assert_eq!("familia".parse::<Taxonomy>().unwrap(), Taxonomy::Familia);
        assert_eq!(
            "tipo-de-articulo".parse::<Taxonomy>().unwrap(),
            Taxonomy::TipoDeArticulo
        );
        assert_eq!("Proveedores".parse::<Taxonomy>().unwrap(), Taxonomy::Proveedor);
        assert!("bogus".parse::<Taxonomy>().is_err());
    }

    #[test]
    fn test_only_proveedor_uses_nombre() {
        for taxonomy in Taxonomy::ALL {
            assert_eq!(
                taxonomy.uses_nombre(),
                taxonomy == Taxonomy::Proveedor,
                "{}",
                taxonomy
            );
        }
    }
}
