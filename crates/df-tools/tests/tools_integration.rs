//! End-to-end tool output tests against a mock API.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use df_api::{ErpClient, StockQuery, Taxonomy};
use df_config::ErpConfig;
use df_tools::{articles, equivalences, stock, taxonomies, ToolError};

fn make_client(base_url: &str) -> ErpClient {
    let config = ErpConfig::from_yaml(&format!(
        r#"
base_url: {}
credentials:
  client_id: CLI-TEST
  token: test-jwt
"#,
        base_url
    ))
    .unwrap();
    ErpClient::new(config).unwrap()
}

#[tokio::test]
async fn test_list_articles_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Articulo/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Resultados": [
                {"Codigo": "REM01", "Descripcion": "Remera básica"},
                {"Codigo": "PAN01", "Descripcion": "Pantalón cargo"}
            ],
            "TotalRegistros": 120
        })))
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    let out = articles::list_articles(&client, None, None).await.unwrap();

    assert!(out.starts_with("Total de artículos: 120, Mostrando: 2"));
    assert!(out.contains("| Código | Descripción"));
    assert!(out.contains("REM01"));
    assert!(out.contains("Pantalón cargo"));
}

#[tokio::test]
async fn test_article_detail_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Articulo/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Resultados": [],
            "TotalRegistros": 0
        })))
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    let err = articles::article_detail(&client, "NOPE", None)
        .await
        .unwrap_err();
    match err {
        ToolError::NotFound(msg) => {
            assert!(msg.contains("NOPE"));
            assert!(msg.contains("ECOMMECS"));
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_articles_full_resolves_taxonomies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Articulo/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Resultados": [{
                "Codigo": "REM01",
                "Descripcion": "Remera básica manga corta",
                "Familia": "F1",
                "Linea": "L1"
            }],
            "TotalRegistros": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Familia/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Resultados": [{"Codigo": "F1", "Descripcion": "Remeras de algodón peinado"}],
            "TotalRegistros": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Linea/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Resultados": [{"Codigo": "L1", "Descripcion": "Urbana"}],
            "TotalRegistros": 1
        })))
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    let out = articles::list_articles_full(&client, None, None)
        .await
        .unwrap();

    assert!(out.contains("**Tabla Completa de Artículos - BD: ECOMMECS**"));
    assert!(out.contains("Total de artículos: 1, Mostrando: 1"));
    assert!(out.contains("Mostrando 54 campos por artículo"));
    assert!(out.contains("REM01"));
    assert!(out.contains("Remera básica manga corta"));
    // Resolved taxonomy descriptions: long ones cut to 15 chars.
    assert!(out.contains("Remeras de a..."));
    assert!(out.contains("Urbana"));
    assert!(out.contains("**LEYENDA DE CAMPOS:**"));
}

#[tokio::test]
async fn test_stock_and_prices_pivots_lists() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ConsultaStockYPrecios/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Resultados": [
                {
                    "Articulo": "REM01", "ArticuloDescripcion": "Remera",
                    "Color": "NEG", "ColorDescripcion": "Negro",
                    "Talle": "M", "TalleDescripcion": "Mediano",
                    "Stock": 4, "Disponible": 3,
                    "Precios": [{"Lista": "MAYORISTA", "Precio": 1500.0}]
                },
                {
                    "Articulo": "REM01", "ArticuloDescripcion": "Remera",
                    "Color": "NEG", "ColorDescripcion": "Negro",
                    "Talle": "M", "TalleDescripcion": "Mediano",
                    "Stock": 4, "Disponible": 3,
                    "Precios": [{"Lista": "MINORISTA", "Precio": 2100.0}]
                }
            ],
            "TotalRegistros": 2
        })))
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    let out = stock::stock_and_prices(&client, &StockQuery::new(), None)
        .await
        .unwrap();

    // Two API rows collapse into one combination with both price columns.
    assert!(out.contains("Total de registros: 2, Mostrando: 1"));
    assert!(out.contains("Precio MAYORISTA"));
    assert!(out.contains("Precio MINORISTA"));
    assert!(out.contains("$1500"));
    assert!(out.contains("$2100"));
    assert!(out.contains("**Listas de Precios Encontradas:** MAYORISTA, MINORISTA"));
}

#[tokio::test]
async fn test_article_stock_totals() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ConsultaStockYPrecios/"))
        .and(query_param("query", "REM01"))
        .and(query_param("exacto", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Resultados": [
                {
                    "Articulo": "REM01", "ArticuloDescripcion": "Remera",
                    "Color": "NEG", "ColorDescripcion": "Negro",
                    "Talle": "M", "TalleDescripcion": "Mediano",
                    "Stock": 4, "Disponible": 3,
                    "Precios": [{"Lista": "MAYORISTA", "Precio": 1500.0}]
                },
                {
                    "Articulo": "REM01X", "ArticuloDescripcion": "Otra",
                    "Color": "NEG", "ColorDescripcion": "Negro",
                    "Talle": "M", "TalleDescripcion": "Mediano",
                    "Stock": 9, "Disponible": 9
                }
            ],
            "TotalRegistros": 2
        })))
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    let out = stock::article_stock(&client, "REM01", None).await.unwrap();

    // The near-match REM01X must be filtered out of the totals.
    assert!(out.contains("- Stock total: 4"));
    assert!(out.contains("- Disponible total: 3"));
    assert!(out.contains("- Combinaciones: 1"));
    assert!(out.contains("- MAYORISTA: $1500"));
}

#[tokio::test]
async fn test_out_of_stock_filters_nonzero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ConsultaStockYPrecios/"))
        .and(query_param("stockcero", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Resultados": [
                {"Articulo": "A", "ArticuloDescripcion": "Con stock", "Stock": 2, "Precio": 10.0},
                {"Articulo": "B", "ArticuloDescripcion": "Sin stock", "Stock": 0, "Precio": 20.0}
            ],
            "TotalRegistros": 2
        })))
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    let out = stock::out_of_stock(&client, None, None).await.unwrap();

    assert!(out.contains("Total sin stock encontrados: 1 (de 2 registros consultados)"));
    assert!(out.contains("Sin stock"));
    assert!(!out.contains("Con stock"));
}

#[tokio::test]
async fn test_list_equivalences_resolves_descriptions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Equivalencia/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Resultados": [{
                "Codigo": "7790001001234",
                "Articulo": "REM01",
                "Color": "NEG",
                "Talle": "M",
                "Cantidad": 1,
                "EsGTIN": true
            }],
            "TotalRegistros": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Articulo/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Resultados": [{"Codigo": "REM01", "Descripcion": "Remera básica"}],
            "TotalRegistros": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Color/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Resultados": [{"Codigo": "NEG", "Descripcion": "Negro", "R": 0, "G": 0, "B": 0}],
            "TotalRegistros": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Talle/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Resultados": [{"Codigo": "M", "Descripcion": "Mediano", "Orden": 2}],
            "TotalRegistros": 1
        })))
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    let out = equivalences::list_equivalences(&client, None, None)
        .await
        .unwrap();

    assert!(out.contains("7790001001234"));
    assert!(out.contains("Remera básica"));
    assert!(out.contains("Negro"));
    assert!(out.contains("Mediano"));
    assert!(out.contains("1.00"));
    assert!(out.contains("Sí"));
}

#[tokio::test]
async fn test_equivalence_detail_sections() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Equivalencia/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Resultados": [{
                "Codigo": "7790001001234",
                "Articulo": "REM01",
                "Color": "NEG",
                "Talle": "M",
                "Cantidad": 2,
                "EsGTIN": true,
                "Observacion": "Uso interno",
                "Agrupublidetalle": [{"Publicacion": "ML-123"}]
            }],
            "TotalRegistros": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Articulo/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Resultados": [{"Codigo": "REM01", "Descripcion": "Remera básica"}],
            "TotalRegistros": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Color/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Resultados": [{"Codigo": "NEG", "Descripcion": "Negro", "R": 0, "G": 0, "B": 0}],
            "TotalRegistros": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Talle/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Resultados": [{"Codigo": "M", "Descripcion": "Mediano", "Orden": 2}],
            "TotalRegistros": 1
        })))
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    let out = equivalences::equivalence_detail(&client, "7790001001234", None)
        .await
        .unwrap();

    assert!(out.contains("# Detalle de Equivalencia: **7790001001234**"));
    assert!(out.contains("**Artículo:** REM01 - Remera básica"));
    assert!(out.contains("**Color:** NEG - Negro"));
    assert!(out.contains("**Talle:** M - Mediano"));
    assert!(out.contains("**Cantidad:** 2.00"));
    assert!(out.contains("**Es GTIN:** Sí"));
    assert!(out.contains("**Observaciones:** Uso interno"));
    assert!(out.contains("## AGRUPAMIENTO DE PUBLICACIONES"));
    assert!(out.contains("ML-123"));
}

#[tokio::test]
async fn test_equivalence_detail_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Equivalencia/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Resultados": [],
            "TotalRegistros": 0
        })))
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    let err = equivalences::equivalence_detail(&client, "0000000000000", None)
        .await
        .unwrap_err();
    match err {
        ToolError::NotFound(msg) => {
            assert!(msg.contains("0000000000000"));
            assert!(msg.contains("ECOMMECS"));
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_taxonomy_summary_survives_endpoint_failure() {
    let server = MockServer::start().await;
    for kind in Taxonomy::ALL {
        if kind == Taxonomy::Linea {
            continue;
        }
        Mock::given(method("GET"))
            .and(path(format!("/{}/", kind.endpoint())))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Resultados": [{"Codigo": "X", "Descripcion": "Algo"}],
                "TotalRegistros": 1
            })))
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/Linea/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    let out = taxonomies::taxonomy_summary(&client, None).await.unwrap();

    assert!(out.contains("Líneas"));
    assert!(out.contains("Error"));
    assert!(out.contains("Familias"));
}

#[tokio::test]
async fn test_list_taxonomy_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Proveedor/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Resultados": [{"Codigo": "P1", "Nombre": "Acme SA"}],
            "TotalRegistros": 1
        })))
        .mount(&server)
        .await;

    let client = make_client(&server.uri());
    let out = taxonomies::list_taxonomy(&client, Taxonomy::Proveedor, None)
        .await
        .unwrap();

    assert!(out.contains("**Proveedores - BD: ECOMMECS**"));
    assert!(out.contains("Empresas proveedoras"));
    assert!(out.contains("Acme SA"));
}
