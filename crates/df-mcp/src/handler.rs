//! MCP tool handler: the tool catalog and dispatch into df-tools.

use std::collections::HashMap;

use serde_json::json;
use tracing::debug;

use df_api::{ErpClient, StockQuery, Taxonomy};
use df_export::{export_records, ExportOptions, Record};
use df_tools::{articles, colors, equivalences, sizes, stock, taxonomies};

use crate::protocol::{McpToolDef, ToolCallResult};

/// Handles MCP tool calls by dispatching to the Dragonfish query tools.
pub struct McpHandler {
    client: ErpClient,
}

type Args = HashMap<String, serde_json::Value>;

fn arg_str<'a>(args: &'a Args, name: &str) -> Option<&'a str> {
    args.get(name).and_then(|v| v.as_str()).filter(|s| !s.is_empty())
}

fn arg_u32(args: &Args, name: &str) -> Option<u32> {
    args.get(name)
        .and_then(|v| v.as_u64())
        .and_then(|v| u32::try_from(v).ok())
}

fn arg_bool(args: &Args, name: &str) -> Option<bool> {
    args.get(name).and_then(|v| v.as_bool())
}

fn required_str<'a>(args: &'a Args, name: &str) -> Result<&'a str, ToolCallResult> {
    arg_str(args, name)
        .ok_or_else(|| ToolCallResult::error(format!("Missing required parameter: {}", name)))
}

fn stock_query_from_args(args: &Args) -> StockQuery {
    StockQuery {
        limit: arg_u32(args, "limit"),
        query: arg_str(args, "query").map(str::to_string),
        lista: arg_str(args, "lista").map(str::to_string),
        preciocero: arg_bool(args, "preciocero"),
        stockcero: arg_bool(args, "stockcero"),
        exacto: arg_bool(args, "exacto"),
    }
}

/// The `database` schema fragment shared by nearly every tool.
fn database_property() -> serde_json::Value {
    json!({
        "type": "string",
        "description": "Base de datos a consultar (por defecto la configurada, normalmente ECOMMECS)"
    })
}

fn limit_property(what: &str) -> serde_json::Value {
    json!({
        "type": "integer",
        "description": format!("Número máximo de {} a mostrar (opcional)", what)
    })
}

impl McpHandler {
    pub fn new(client: ErpClient) -> Self {
        McpHandler { client }
    }

    pub fn client(&self) -> &ErpClient {
        &self.client
    }

    /// Return the list of tools this server exposes.
    pub fn tool_definitions(&self) -> Vec<McpToolDef> {
        vec![
            McpToolDef {
                name: "list_articles".to_string(),
                description: "Lista los artículos del catálogo con su código y descripción."
                    .to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "limit": limit_property("artículos"),
                        "database": database_property()
                    }
                }),
            },
            McpToolDef {
                name: "article_detail".to_string(),
                description: "Información detallada de un artículo por su código, con todas las tipificaciones resueltas a sus descripciones.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "code": {
                            "type": "string",
                            "description": "Código del artículo a buscar"
                        },
                        "database": database_property()
                    },
                    "required": ["code"]
                }),
            },
            McpToolDef {
                name: "list_articles_full".to_string(),
                description: "Tabla ancha con todos los campos de cada artículo: básicos, tipificaciones con descripciones, datos fiscales, configuraciones y e-commerce.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "limit": limit_property("artículos"),
                        "database": database_property()
                    }
                }),
            },
            McpToolDef {
                name: "list_colors".to_string(),
                description: "Lista los colores disponibles con su código RGB en hexadecimal."
                    .to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "database": database_property()
                    }
                }),
            },
            McpToolDef {
                name: "list_sizes".to_string(),
                description: "Lista los talles disponibles con su orden.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "database": database_property()
                    }
                }),
            },
            McpToolDef {
                name: "stock_and_prices".to_string(),
                description: "Consulta stock y precios. Agrupa por combinación artículo/color/talle y muestra una columna de precio por cada lista encontrada.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "limit": limit_property("registros"),
                        "query": {
                            "type": "string",
                            "description": "Filtro de búsqueda por texto"
                        },
                        "lista": {
                            "type": "string",
                            "description": "Filtro por lista de precios específica"
                        },
                        "preciocero": {
                            "type": "boolean",
                            "description": "Incluir artículos con precio cero"
                        },
                        "stockcero": {
                            "type": "boolean",
                            "description": "Incluir artículos con stock cero"
                        },
                        "exacto": {
                            "type": "boolean",
                            "description": "Búsqueda exacta"
                        },
                        "database": database_property()
                    }
                }),
            },
            McpToolDef {
                name: "article_stock".to_string(),
                description: "Stock y precios de un artículo específico con todas sus combinaciones de color y talle, totales y listas de precios.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "code": {
                            "type": "string",
                            "description": "Código del artículo a consultar"
                        },
                        "database": database_property()
                    },
                    "required": ["code"]
                }),
            },
            McpToolDef {
                name: "out_of_stock".to_string(),
                description: "Artículos sin stock disponible.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "limit": limit_property("artículos"),
                        "database": database_property()
                    }
                }),
            },
            McpToolDef {
                name: "stock_export_records".to_string(),
                description: "Datos de stock y precios en formato JSON procesable, listos para pasar a la herramienta export.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "limit": limit_property("registros"),
                        "query": {
                            "type": "string",
                            "description": "Filtro de búsqueda por texto"
                        },
                        "lista": {
                            "type": "string",
                            "description": "Filtro por lista de precios específica"
                        },
                        "preciocero": {
                            "type": "boolean",
                            "description": "Incluir artículos con precio cero"
                        },
                        "stockcero": {
                            "type": "boolean",
                            "description": "Incluir artículos con stock cero"
                        },
                        "exacto": {
                            "type": "boolean",
                            "description": "Búsqueda exacta"
                        },
                        "database": database_property()
                    }
                }),
            },
            McpToolDef {
                name: "list_equivalences".to_string(),
                description: "Lista las equivalencias (códigos alternativos y GTIN) con las descripciones de artículo, color y talle resueltas.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "limit": limit_property("equivalencias"),
                        "database": database_property()
                    }
                }),
            },
            McpToolDef {
                name: "equivalence_detail".to_string(),
                description: "Información detallada de una equivalencia por su código."
                    .to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "code": {
                            "type": "string",
                            "description": "Código de la equivalencia a buscar"
                        },
                        "database": database_property()
                    },
                    "required": ["code"]
                }),
            },
            McpToolDef {
                name: "list_taxonomy".to_string(),
                description: "Lista una tipificación de artículos: familia, tipodearticulo, linea, grupo, material, clasificacion, categoria, proveedor, unidaddemedida, temporada, paleta o curva.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "kind": {
                            "type": "string",
                            "description": "Tipificación a listar, por ejemplo 'familia' o 'proveedores'"
                        },
                        "database": database_property()
                    },
                    "required": ["kind"]
                }),
            },
            McpToolDef {
                name: "taxonomy_summary".to_string(),
                description: "Resumen de todas las tipificaciones con el conteo de items de cada una.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "database": database_property()
                    }
                }),
            },
            McpToolDef {
                name: "export".to_string(),
                description: "Exporta datos (lista de objetos planos) a un archivo Excel con encabezado formateado y hoja de resumen opcional.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "data": {
                            "type": "array",
                            "items": {"type": "object"},
                            "description": "Los datos a exportar como lista de objetos"
                        },
                        "filename": {
                            "type": "string",
                            "description": "Nombre del archivo Excel a crear (por defecto export.xlsx)"
                        },
                        "sheet_name": {
                            "type": "string",
                            "description": "Nombre de la hoja de datos (por defecto Datos)"
                        },
                        "include_summary": {
                            "type": "boolean",
                            "description": "Si incluir una hoja Resumen con totales"
                        },
                        "numeric_columns": {
                            "type": "array",
                            "items": {"type": "string"},
                            "description": "Columnas numéricas a totalizar en el resumen"
                        }
                    },
                    "required": ["data"]
                }),
            },
        ]
    }

    /// Dispatch a tool call to the matching implementation.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<Args>,
    ) -> ToolCallResult {
        let args = arguments.unwrap_or_default();
        debug!("Tool call: {} with {:?}", name, args);

        match name {
            "list_articles" => self.handle_list_articles(&args).await,
            "article_detail" => self.handle_article_detail(&args).await,
            "list_articles_full" => self.handle_list_articles_full(&args).await,
            "list_colors" => self.handle_list_colors(&args).await,
            "list_sizes" => self.handle_list_sizes(&args).await,
            "stock_and_prices" => self.handle_stock_and_prices(&args).await,
            "article_stock" => self.handle_article_stock(&args).await,
            "out_of_stock" => self.handle_out_of_stock(&args).await,
            "stock_export_records" => self.handle_stock_export_records(&args).await,
            "list_equivalences" => self.handle_list_equivalences(&args).await,
            "equivalence_detail" => self.handle_equivalence_detail(&args).await,
            "list_taxonomy" => self.handle_list_taxonomy(&args).await,
            "taxonomy_summary" => self.handle_taxonomy_summary(&args).await,
            "export" => self.handle_export(&args).await,
            _ => ToolCallResult::error(format!("Unknown tool: {}", name)),
        }
    }

    async fn handle_list_articles(&self, args: &Args) -> ToolCallResult {
        let result = articles::list_articles(
            &self.client,
            arg_u32(args, "limit"),
            arg_str(args, "database"),
        )
        .await;
        match result {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => ToolCallResult::error(format!("Error al obtener los artículos: {}", e)),
        }
    }

    async fn handle_article_detail(&self, args: &Args) -> ToolCallResult {
        let code = match required_str(args, "code") {
            Ok(code) => code,
            Err(err) => return err,
        };
        match articles::article_detail(&self.client, code, arg_str(args, "database")).await {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => {
                ToolCallResult::error(format!("Error al obtener el detalle del artículo: {}", e))
            }
        }
    }

    async fn handle_list_articles_full(&self, args: &Args) -> ToolCallResult {
        let result = articles::list_articles_full(
            &self.client,
            arg_u32(args, "limit"),
            arg_str(args, "database"),
        )
        .await;
        match result {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => {
                ToolCallResult::error(format!("Error al obtener los artículos completos: {}", e))
            }
        }
    }

    async fn handle_list_colors(&self, args: &Args) -> ToolCallResult {
        match colors::list_colors(&self.client, arg_str(args, "database")).await {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => ToolCallResult::error(format!("Error al obtener los colores: {}", e)),
        }
    }

    async fn handle_list_sizes(&self, args: &Args) -> ToolCallResult {
        match sizes::list_sizes(&self.client, arg_str(args, "database")).await {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => ToolCallResult::error(format!("Error al obtener los talles: {}", e)),
        }
    }

    async fn handle_stock_and_prices(&self, args: &Args) -> ToolCallResult {
        let query = stock_query_from_args(args);
        match stock::stock_and_prices(&self.client, &query, arg_str(args, "database")).await {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => ToolCallResult::error(format!("Error al consultar stock y precios: {}", e)),
        }
    }

    async fn handle_article_stock(&self, args: &Args) -> ToolCallResult {
        let code = match required_str(args, "code") {
            Ok(code) => code,
            Err(err) => return err,
        };
        match stock::article_stock(&self.client, code, arg_str(args, "database")).await {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => ToolCallResult::error(format!(
                "Error al consultar stock del artículo específico: {}",
                e
            )),
        }
    }

    async fn handle_out_of_stock(&self, args: &Args) -> ToolCallResult {
        let result = stock::out_of_stock(
            &self.client,
            arg_u32(args, "limit"),
            arg_str(args, "database"),
        )
        .await;
        match result {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => {
                ToolCallResult::error(format!("Error al consultar artículos sin stock: {}", e))
            }
        }
    }

    async fn handle_stock_export_records(&self, args: &Args) -> ToolCallResult {
        let query = stock_query_from_args(args);
        let records =
            match stock::stock_export_records(&self.client, &query, arg_str(args, "database"))
                .await
            {
                Ok(records) => records,
                Err(e) => {
                    return ToolCallResult::error(format!(
                        "Error al obtener datos de stock y precios: {}",
                        e
                    ))
                }
            };

        let values: Vec<serde_json::Value> =
            records.iter().map(Record::to_json_value).collect();
        match serde_json::to_string_pretty(&values) {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => ToolCallResult::error(format!("Error al serializar los datos: {}", e)),
        }
    }

    async fn handle_list_equivalences(&self, args: &Args) -> ToolCallResult {
        let result = equivalences::list_equivalences(
            &self.client,
            arg_u32(args, "limit"),
            arg_str(args, "database"),
        )
        .await;
        match result {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => ToolCallResult::error(format!("Error al obtener las equivalencias: {}", e)),
        }
    }

    async fn handle_equivalence_detail(&self, args: &Args) -> ToolCallResult {
        let code = match required_str(args, "code") {
            Ok(code) => code,
            Err(err) => return err,
        };
        match equivalences::equivalence_detail(&self.client, code, arg_str(args, "database")).await
        {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => ToolCallResult::error(format!(
                "Error al obtener el detalle de la equivalencia: {}",
                e
            )),
        }
    }

    async fn handle_list_taxonomy(&self, args: &Args) -> ToolCallResult {
        let kind = match required_str(args, "kind") {
            Ok(kind) => kind,
            Err(err) => return err,
        };
        let kind: Taxonomy = match kind.parse() {
            Ok(kind) => kind,
            Err(e) => return ToolCallResult::error(e),
        };
        match taxonomies::list_taxonomy(&self.client, kind, arg_str(args, "database")).await {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => ToolCallResult::error(format!(
                "Error al obtener {}: {}",
                kind.display_name().to_lowercase(),
                e
            )),
        }
    }

    async fn handle_taxonomy_summary(&self, args: &Args) -> ToolCallResult {
        match taxonomies::taxonomy_summary(&self.client, arg_str(args, "database")).await {
            Ok(text) => ToolCallResult::text(text),
            Err(e) => {
                ToolCallResult::error(format!("Error al obtener el resumen de tipificaciones: {}", e))
            }
        }
    }

    async fn handle_export(&self, args: &Args) -> ToolCallResult {
        let data = match args.get("data").and_then(|v| v.as_array()) {
            Some(data) if !data.is_empty() => data,
            _ => {
                return ToolCallResult::error(
                    "Error: Los datos deben ser una lista de objetos no vacía.".to_string(),
                )
            }
        };

        let mut records = Vec::with_capacity(data.len());
        for item in data {
            match Record::from_json_object(item) {
                Ok(record) => records.push(record),
                Err(e) => return ToolCallResult::error(format!("Error: {}", e)),
            }
        }

        let numeric_columns = args
            .get("numeric_columns")
            .and_then(|v| v.as_array())
            .map(|columns| {
                columns
                    .iter()
                    .filter_map(|c| c.as_str())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let options = ExportOptions {
            filename: arg_str(args, "filename").unwrap_or("export.xlsx").to_string(),
            sheet_name: arg_str(args, "sheet_name").unwrap_or("Datos").to_string(),
            include_summary: arg_bool(args, "include_summary").unwrap_or(false),
            numeric_columns,
            directory: self.client.config().export.directory.clone(),
        };

        match export_records(&records, &options) {
            Ok(report) => {
                let mut out = String::from("**EXPORTACIÓN EXITOSA A EXCEL**\n\n");
                out.push_str(&format!("**Archivo generado:** {}\n", report.file_name));
                out.push_str(&format!("**Ubicación:** {}\n\n", report.path.display()));
                out.push_str("**Contenido exportado:**\n");
                out.push_str(&format!("- Registros totales: {}\n", report.rows));
                out.push_str(&format!("- Columnas: {}\n", report.columns));
                out.push_str(&format!("- Hojas: {}\n", report.sheets));
                out.push_str(&format!("- Fecha de exportación: {}\n", report.exported_at));
                ToolCallResult::text(out)
            }
            Err(e) => ToolCallResult::error(format!("Error al exportar datos a Excel: {}", e)),
        }
    }
}
