use serde::{Deserialize, Serialize};

/// Response envelope shared by every list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(rename = "Resultados", default = "Vec::new")]
    pub resultados: Vec<T>,
    #[serde(rename = "TotalRegistros", default)]
    pub total_registros: u64,
}

impl<T> Page<T> {
    /// Keep at most `limit` items. The API honors the `limit` query param,
    /// but older installations have been seen ignoring it.
    pub fn truncate(&mut self, limit: Option<u32>) {
        if let Some(limit) = limit {
            self.resultados.truncate(limit as usize);
        }
    }
}

/// One component of a kit article.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KitComponent {
    #[serde(rename = "Articulo", default)]
    pub articulo: String,
    #[serde(rename = "ArticuloDetalle", default)]
    pub articulo_detalle: String,
    #[serde(rename = "Cantidad", default)]
    pub cantidad: f64,
    #[serde(rename = "ColorDetalle", default)]
    pub color_detalle: String,
    #[serde(rename = "Talle", default)]
    pub talle: String,
}

/// A catalog article, as returned by `/Articulo/`.
///
/// Field names follow the swagger.json of the upstream API; everything but
/// the code is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "Codigo", default)]
    pub codigo: String,
    #[serde(rename = "Descripcion", default)]
    pub descripcion: String,
    #[serde(rename = "DescripcionAdicional", default)]
    pub descripcion_adicional: String,

    // Taxonomy codes, resolved against their own endpoints for display.
    #[serde(rename = "Familia", default)]
    pub familia: String,
    #[serde(rename = "TipodeArticulo", default)]
    pub tipo_de_articulo: String,
    #[serde(rename = "Linea", default)]
    pub linea: String,
    #[serde(rename = "Grupo", default)]
    pub grupo: String,
    #[serde(rename = "CategoriaDeArticulo", default)]
    pub categoria_de_articulo: String,
    #[serde(rename = "Material", default)]
    pub material: String,
    #[serde(rename = "Clasificacion", default)]
    pub clasificacion: String,
    #[serde(rename = "Proveedor", default)]
    pub proveedor: String,
    #[serde(rename = "UnidadDeMedida", default)]
    pub unidad_de_medida: String,
    #[serde(rename = "Temporada", default)]
    pub temporada: String,
    #[serde(rename = "Paletadecolores", default)]
    pub paleta_de_colores: String,
    #[serde(rename = "Curvadetalles", default)]
    pub curva_de_talles: String,

    #[serde(rename = "Ano", default)]
    pub ano: Option<i64>,
    #[serde(rename = "Importado", default)]
    pub importado: bool,
    #[serde(rename = "Peso", default)]
    pub peso: Option<f64>,
    #[serde(rename = "Marca", default)]
    pub marca: String,

    #[serde(rename = "Comportamiento", default)]
    pub comportamiento: Option<i64>,
    #[serde(rename = "TipoAgrupamientoPublicaciones", default)]
    pub tipo_agrupamiento_publicaciones: Option<i64>,
    #[serde(rename = "NoPermiteDevoluciones", default)]
    pub no_permite_devoluciones: bool,
    #[serde(rename = "RestringirDescuentos", default)]
    pub restringir_descuentos: bool,
    #[serde(rename = "RequiereCCosto", default)]
    pub requiere_ccosto: Option<i64>,
    #[serde(rename = "NoPublicarEnEcommerce", default)]
    pub no_publicar_en_ecommerce: bool,
    #[serde(rename = "SoloPromoYKit", default)]
    pub solo_promo_y_kit: bool,

    #[serde(rename = "CondicionIvaVentas", default)]
    pub condicion_iva_ventas: Option<i64>,
    #[serde(rename = "PorcentajeIvaVentas", default)]
    pub porcentaje_iva_ventas: Option<f64>,
    #[serde(rename = "CondicionIvaCompras", default)]
    pub condicion_iva_compras: Option<i64>,
    #[serde(rename = "PorcentajeIvaCompras", default)]
    pub porcentaje_iva_compras: Option<f64>,
    #[serde(rename = "PorcentajeImpuestoInterno", default)]
    pub porcentaje_impuesto_interno: Option<f64>,
    #[serde(rename = "Nomenclador", default)]
    pub nomenclador: String,
    #[serde(rename = "PercepcionIvaRG5329", default)]
    pub percepcion_iva_rg5329: Option<i64>,

    #[serde(rename = "NoComercializable", default)]
    pub no_comercializable: Option<i64>,
    #[serde(rename = "RestringirArticulo", default)]
    pub restringir_articulo: Option<i64>,
    #[serde(rename = "ImprimeDespacho", default)]
    pub imprime_despacho: bool,

    #[serde(rename = "DescEcommerce", default)]
    pub desc_ecommerce: String,
    #[serde(rename = "DescEcommerceHTML", default)]
    pub desc_ecommerce_html: String,
    #[serde(rename = "Largo", default)]
    pub largo: Option<f64>,
    #[serde(rename = "Ancho", default)]
    pub ancho: Option<f64>,
    #[serde(rename = "Alto", default)]
    pub alto: Option<f64>,
    #[serde(rename = "Imagen", default)]
    pub imagen: String,

    #[serde(rename = "ParticipantesDetalle", default)]
    pub participantes_detalle: Vec<KitComponent>,
}

/// A color, as returned by `/Color/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Color {
    #[serde(rename = "Codigo", default)]
    pub codigo: String,
    #[serde(rename = "Descripcion", default)]
    pub descripcion: String,
    #[serde(rename = "R", default)]
    pub r: u8,
    #[serde(rename = "G", default)]
    pub g: u8,
    #[serde(rename = "B", default)]
    pub b: u8,
}

impl Color {
    /// Hex rendering of the RGB triple, e.g. `#1a2b3c`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A size, as returned by `/Talle/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Size {
    #[serde(rename = "Codigo", default)]
    pub codigo: String,
    #[serde(rename = "Descripcion", default)]
    pub descripcion: String,
    #[serde(rename = "Orden", default)]
    pub orden: i64,
}

/// A price on a specific price list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceEntry {
    #[serde(rename = "Lista", default)]
    pub lista: String,
    #[serde(rename = "Precio", default)]
    pub precio: f64,
}

/// One row of `/ConsultaStockYPrecios/`: an (article, color, size)
/// combination with its stock figures and prices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockRecord {
    #[serde(rename = "Articulo", default)]
    pub articulo: String,
    #[serde(rename = "ArticuloDescripcion", default)]
    pub articulo_descripcion: String,
    #[serde(rename = "ArticuloDescripcionAdicional", default)]
    pub articulo_descripcion_adicional: String,
    #[serde(rename = "Color", default)]
    pub color: String,
    #[serde(rename = "ColorDescripcion", default)]
    pub color_descripcion: String,
    #[serde(rename = "Talle", default)]
    pub talle: String,
    #[serde(rename = "TalleDescripcion", default)]
    pub talle_descripcion: String,
    #[serde(rename = "Stock", default)]
    pub stock: f64,
    #[serde(rename = "Disponible", default)]
    pub disponible: f64,
    #[serde(rename = "Comprometido", default)]
    pub comprometido: f64,
    #[serde(rename = "PendienteEntrega", default)]
    pub pendiente_entrega: f64,
    #[serde(rename = "Precio", default)]
    pub precio: f64,
    #[serde(rename = "Lista", default)]
    pub lista: String,
    #[serde(rename = "Precios", default)]
    pub precios: Vec<PriceEntry>,
}

/// An equivalence: an alternative code (barcode/GTIN) for an
/// (article, color, size) combination.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Equivalence {
    #[serde(rename = "Codigo", default)]
    pub codigo: String,
    #[serde(rename = "Articulo", default)]
    pub articulo: String,
    #[serde(rename = "Color", default)]
    pub color: String,
    #[serde(rename = "Talle", default)]
    pub talle: String,
    #[serde(rename = "Cantidad", default)]
    pub cantidad: f64,
    #[serde(rename = "EsGTIN", default)]
    pub es_gtin: bool,
    #[serde(rename = "Observacion", default)]
    pub observacion: String,
    #[serde(rename = "TipoAgrupamientoPublicaciones", default)]
    pub tipo_agrupamiento_publicaciones: Option<i64>,
    #[serde(rename = "Agrupublidetalle", default)]
    pub agrupubli_detalle: Vec<serde_json::Value>,
}

/// An entry of any taxonomy endpoint (Familia, Linea, Proveedor, ...).
///
/// Every taxonomy uses `Descripcion` except Proveedor, which uses `Nombre`;
/// [`TaxonomyEntry::label`] picks whichever is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    #[serde(rename = "Codigo", default)]
    pub codigo: String,
    #[serde(rename = "Descripcion", default)]
    pub descripcion: String,
    #[serde(rename = "Nombre", default)]
    pub nombre: String,
}

impl TaxonomyEntry {
    pub fn label(&self) -> &str {
        if self.descripcion.is_empty() {
            &self.nombre
        } else {
            &self.descripcion
        }
    }
}
