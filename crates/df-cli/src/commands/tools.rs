use df_api::ErpClient;
use df_mcp::McpHandler;

pub fn run(client: ErpClient, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let handler = McpHandler::new(client);
    let tools = handler.tool_definitions();

    if pretty {
        println!("{}", serde_json::to_string_pretty(&tools)?);
    } else {
        println!("{}", serde_json::to_string(&tools)?);
    }

    Ok(())
}
