//! MCP server for the Dragonfish tool set.
//!
//! JSON-RPC 2.0 over stdio: `initialize`, `tools/list`, `tools/call` and
//! `ping`. Tool calls are dispatched to the df-tools implementations; tool
//! failures come back as tool-level error results, not protocol errors.

pub mod handler;
pub mod protocol;
pub mod server;

pub use handler::McpHandler;
pub use protocol::{JsonRpcRequest, JsonRpcResponse, McpToolDef, ToolCallResult};
pub use server::McpServer;
