use std::sync::Arc;

use rmcp::{
    model::*, service::RequestContext, ErrorData as McpError, RoleServer, ServerHandler,
    ServiceExt,
};

use crate::config::ServerConfig;
use crate::elicitation::Mediator;
use crate::mcp::tools::ToolRegistry;

/// MCP server exposing the elicitation tools.
///
/// The registry and config are built once and shared read-only; every tool
/// call gets its own mediator bound to the calling peer.
#[derive(Clone)]
pub struct ElicitServer {
    registry: Arc<ToolRegistry>,
    config: Arc<ServerConfig>,
}

impl ElicitServer {
    pub fn new(registry: ToolRegistry, config: ServerConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
        }
    }

    /// Server with the standard tool set.
    pub fn from_config(config: ServerConfig) -> Self {
        Self::new(ToolRegistry::standard(), config)
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}

impl ServerHandler for ElicitServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.name.clone(),
                title: Some(self.config.title.clone()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(self.config.instructions().to_string()),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.registry.list_tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let mediator = Mediator::new(Arc::new(context.peer.clone()));

        self.registry
            .dispatch(&request.name, request.arguments, mediator)
            .await
            .map(CallToolResult::from)
            .map_err(|e| {
                tracing::warn!("Tool {} failed: {}", request.name, e);
                McpError::from(e)
            })
    }
}

/// Run MCP server on stdio transport.
pub async fn run_mcp_server(config: ServerConfig) -> anyhow::Result<()> {
    let server = ElicitServer::from_config(config);
    let tool_count = server.registry().len();

    tracing::info!("Starting elicit MCP server v{}", env!("CARGO_PKG_VERSION"));

    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let service = server.serve(transport).await?;
    tracing::info!("MCP server listening on stdio ({} tools)", tool_count);

    tokio::select! {
        result = service.waiting() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    tracing::info!("MCP server shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info_uses_config() {
        let config = ServerConfig {
            title: "Ask the operator".into(),
            ..ServerConfig::default()
        };
        let info = ElicitServer::from_config(config).get_info();

        assert_eq!(info.server_info.name, "elicit");
        assert_eq!(info.server_info.title.as_deref(), Some("Ask the operator"));
        assert!(info.capabilities.tools.is_some());
        assert!(info
            .instructions
            .as_deref()
            .unwrap_or_default()
            .contains("elicit_uri"));
    }

    #[test]
    fn test_server_exposes_seven_tools() {
        let server = ElicitServer::from_config(ServerConfig::default());
        assert_eq!(server.registry().len(), 7);
    }
}
