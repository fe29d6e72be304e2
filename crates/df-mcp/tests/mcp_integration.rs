//! Full JSON-RPC session tests against a mock Dragonfish API.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use df_api::ErpClient;
use df_config::ErpConfig;
use df_mcp::protocol::{INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR};
use df_mcp::{McpHandler, McpServer};

fn make_server(base_url: &str) -> McpServer {
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
    let client = ErpClient::new(config).unwrap();
    McpServer::new(McpHandler::new(client))
}

async fn mock_articles(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/Articulo/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Resultados": [
                {"Codigo": "REM01", "Descripcion": "Remera básica"}
            ],
            "TotalRegistros": 1
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_initialize() {
    let server = make_server("https://erp.example.com");

    let msg = r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{}}}"#;
    let resp = server.handle_message(msg).await.unwrap();
    assert!(resp.result.is_some());
    let result = resp.result.unwrap();
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert!(result["capabilities"]["tools"].is_object());
    assert_eq!(result["serverInfo"]["name"], "dragonfish-mcp");
}

#[tokio::test]
async fn test_tools_list() {
    let server = make_server("https://erp.example.com");

    let msg = r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#;
    let resp = server.handle_message(msg).await.unwrap();
    let result = resp.result.unwrap();
    let tools = result["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 14);

    let names: Vec<&str> = tools
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"list_articles"));
    assert!(names.contains(&"stock_and_prices"));
    assert!(names.contains(&"taxonomy_summary"));
    assert!(names.contains(&"export"));

    // every tool carries a schema object
    for tool in tools {
        assert_eq!(tool["inputSchema"]["type"], "object");
    }
}

#[tokio::test]
async fn test_tools_call_list_articles() {
    let api = MockServer::start().await;
    mock_articles(&api).await;
    let server = make_server(&api.uri());

    let msg = r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"list_articles","arguments":{}}}"#;
    let resp = server.handle_message(msg).await.unwrap();
    let result = resp.result.unwrap();
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("Total de artículos: 1"));
    assert!(text.contains("REM01"));
    assert!(result["isError"].is_null());
}

#[tokio::test]
async fn test_tools_call_api_failure_is_tool_error() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Color/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&api)
        .await;
    let server = make_server(&api.uri());

    let msg = r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"list_colors","arguments":{}}}"#;
    let resp = server.handle_message(msg).await.unwrap();
    // API failures are tool-level errors, not protocol errors
    assert!(resp.error.is_none());
    let result = resp.result.unwrap();
    assert_eq!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("Error al obtener los colores"));
}

#[tokio::test]
async fn test_tools_call_missing_required_argument() {
    let server = make_server("https://erp.example.com");

    let msg = r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"article_detail","arguments":{}}}"#;
    let resp = server.handle_message(msg).await.unwrap();
    let result = resp.result.unwrap();
    assert_eq!(result["isError"], true);
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("code"));
}

#[tokio::test]
async fn test_tools_call_unknown_tool() {
    let server = make_server("https://erp.example.com");

    let msg = r#"{"jsonrpc":"2.0","id":6,"method":"tools/call","params":{"name":"no_such_tool"}}"#;
    let resp = server.handle_message(msg).await.unwrap();
    let result = resp.result.unwrap();
    assert_eq!(result["isError"], true);
}

#[tokio::test]
async fn test_export_tool_writes_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let config = ErpConfig::from_yaml(&format!(
        r#"
base_url: https://erp.example.com
credentials:
  client_id: CLI-TEST
  token: test-jwt
export:
  directory: {}
"#,
        tmp.path().to_str().unwrap()
    ))
    .unwrap();
    let client = ErpClient::new(config).unwrap();
    let server = McpServer::new(McpHandler::new(client));

    let msg = r#"{"jsonrpc":"2.0","id":7,"method":"tools/call","params":{"name":"export","arguments":{"data":[{"Articulo":"REM01","Stock":4}],"filename":"prueba"}}}"#;
    let resp = server.handle_message(msg).await.unwrap();
    let result = resp.result.unwrap();
    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("EXPORTACIÓN EXITOSA"));
    assert!(text.contains("Registros totales: 1"));

    let files: Vec<_> = std::fs::read_dir(tmp.path()).unwrap().collect();
    assert_eq!(files.len(), 1);
}

#[tokio::test]
async fn test_export_tool_rejects_empty_data() {
    let server = make_server("https://erp.example.com");

    let msg = r#"{"jsonrpc":"2.0","id":8,"method":"tools/call","params":{"name":"export","arguments":{"data":[]}}}"#;
    let resp = server.handle_message(msg).await.unwrap();
    let result = resp.result.unwrap();
    assert_eq!(result["isError"], true);
}

#[tokio::test]
async fn test_notification_no_response() {
    let server = make_server("https://erp.example.com");

    let msg = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
    assert!(server.handle_message(msg).await.is_none());
}

#[tokio::test]
async fn test_unknown_method() {
    let server = make_server("https://erp.example.com");

    let msg = r#"{"jsonrpc":"2.0","id":9,"method":"unknown/method"}"#;
    let resp = server.handle_message(msg).await.unwrap();
    assert_eq!(resp.error.unwrap().code, METHOD_NOT_FOUND);
}

#[tokio::test]
async fn test_parse_error() {
    let server = make_server("https://erp.example.com");

    let resp = server.handle_message("not json").await.unwrap();
    assert_eq!(resp.error.unwrap().code, PARSE_ERROR);
}

#[tokio::test]
async fn test_missing_params() {
    let server = make_server("https://erp.example.com");

    let msg = r#"{"jsonrpc":"2.0","id":10,"method":"tools/call"}"#;
    let resp = server.handle_message(msg).await.unwrap();
    assert_eq!(resp.error.unwrap().code, INVALID_PARAMS);
}

#[tokio::test]
async fn test_ping() {
    let server = make_server("https://erp.example.com");

    let msg = r#"{"jsonrpc":"2.0","id":11,"method":"ping"}"#;
    let resp = server.handle_message(msg).await.unwrap();
    assert!(resp.result.is_some());
}
