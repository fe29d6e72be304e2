use df_api::ErpClient;
use df_mcp::{McpHandler, McpServer};

pub async fn run(client: ErpClient) -> Result<(), Box<dyn std::error::Error>> {
    let handler = McpHandler::new(client);
    let server = McpServer::new(handler);
    server.run().await
}
