//! MCP server loop: reads JSON-RPC from stdin, writes responses to stdout.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::handler::McpHandler;
use crate::protocol::*;

/// MCP server that communicates over stdio.
pub struct McpServer {
    handler: McpHandler,
}

impl McpServer {
    pub fn new(handler: McpHandler) -> Self {
        McpServer { handler }
    }

    /// Run the server, reading JSON-RPC messages from stdin and writing
    /// responses to stdout. Logging goes to stderr so it never corrupts the
    /// protocol stream.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        let reader = BufReader::new(stdin);
        let mut lines = reader.lines();

        info!("Dragonfish MCP server started (stdio transport)");

        while let Some(line) = lines.next_line().await? {
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }

            debug!("Received: {}", line);

            let response = self.handle_message(&line).await;

            if let Some(resp) = response {
                let json = serde_json::to_string(&resp)?;
                debug!("Sending: {}", json);
                stdout.write_all(json.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
        }

        info!("Dragonfish MCP server shutting down");
        Ok(())
    }

    /// Process a single JSON-RPC message and return an optional response.
    /// Returns None for notifications (no id).
    pub async fn handle_message(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse JSON-RPC: {}", e);
                return Some(JsonRpcResponse::error(
                    None,
                    PARSE_ERROR,
                    format!("Parse error: {}", e),
                ));
            }
        };

        // Notifications (no id) don't get responses
        if request.id.is_none() {
            debug!("Notification: {}", request.method);
            return None;
        }

        let id = request.id.clone();

        match request.method.as_str() {
            "initialize" => {
                let result = InitializeResult {
                    protocol_version: PROTOCOL_VERSION.to_string(),
                    capabilities: ServerCapabilities {
                        tools: Some(ToolsCapability {
                            list_changed: Some(false),
                        }),
                    },
                    server_info: ServerInfo {
                        name: "dragonfish-mcp".to_string(),
                        version: env!("CARGO_PKG_VERSION").to_string(),
                    },
                };
                match serde_json::to_value(result) {
                    Ok(v) => Some(JsonRpcResponse::success(id, v)),
                    Err(e) => Some(JsonRpcResponse::error(
                        id,
                        INTERNAL_ERROR,
                        format!("Serialization error: {}", e),
                    )),
                }
            }
            "tools/list" => {
                let tools = self.handler.tool_definitions();
                let result = ToolListResult { tools };
                match serde_json::to_value(result) {
                    Ok(v) => Some(JsonRpcResponse::success(id, v)),
                    Err(e) => Some(JsonRpcResponse::error(
                        id,
                        INTERNAL_ERROR,
                        format!("Serialization error: {}", e),
                    )),
                }
            }
            "tools/call" => {
                let params: ToolCallParams = match request.params {
                    Some(p) => match serde_json::from_value(p) {
                        Ok(params) => params,
                        Err(e) => {
                            return Some(JsonRpcResponse::error(
                                id,
                                INVALID_PARAMS,
                                format!("Invalid params: {}", e),
                            ))
                        }
                    },
                    None => {
                        return Some(JsonRpcResponse::error(
                            id,
                            INVALID_PARAMS,
                            "Missing params".to_string(),
                        ))
                    }
                };

                let tool_timeout = std::time::Duration::from_secs(60);
                let result = match tokio::time::timeout(
                    tool_timeout,
                    self.handler.call_tool(&params.name, params.arguments),
                )
                .await
                {
                    Ok(result) => result,
                    Err(_) => {
                        return Some(JsonRpcResponse::error(
                            id,
                            INTERNAL_ERROR,
                            format!(
                                "Tool '{}' timed out after {}s",
                                params.name,
                                tool_timeout.as_secs()
                            ),
                        ));
                    }
                };
                match serde_json::to_value(result) {
                    Ok(v) => Some(JsonRpcResponse::success(id, v)),
                    Err(e) => Some(JsonRpcResponse::error(
                        id,
                        INTERNAL_ERROR,
                        format!("Serialization error: {}", e),
                    )),
                }
            }
            "ping" => Some(JsonRpcResponse::success(id, serde_json::json!({}))),
            _ => Some(JsonRpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("Unknown method: {}", request.method),
            )),
        }
    }
}
