//! The MCP server handler.
//!
//! [`GhostMcpServer`] ties the composite tool registry, the resource
//! router, and the prompt router to the protocol: `list_tools` and
//! `call_tool` delegate to the registry, resource and prompt requests
//! delegate to their routers. Transport wiring lives in the binary.

use rmcp::model::{
    CallToolRequestParam, CallToolResult, ErrorData, GetPromptRequestParam, GetPromptResult,
    Implementation, ListPromptsResult, ListResourceTemplatesResult, ListToolsResult,
    PaginatedRequestParam, ProtocolVersion, ReadResourceRequestParam, ReadResourceResult,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::ServerHandler;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use ghost_mcp_client::GhostClient;

use crate::prompts::PromptRouter;
use crate::registry::{CompositeRegistry, ToolRegistry};
use crate::resources::ResourceRouter;
use crate::tools::{
    debug::DebugTools, invites::InviteTools, members::MemberTools, newsletters::NewsletterTools,
    offers::OfferTools, posts::PostTools, roles::RoleTools, tags::TagTools, tiers::TierTools,
    users::UserTools, webhooks::WebhookTools,
};

/// Assemble the full tool registry: one sub-registry per entity plus
/// diagnostics.
pub fn build_registry(client: &Arc<GhostClient>) -> CompositeRegistry {
    CompositeRegistry::new()
        .add(PostTools::new(Arc::clone(client)))
        .add(MemberTools::new(Arc::clone(client)))
        .add(UserTools::new(Arc::clone(client)))
        .add(TagTools::new(Arc::clone(client)))
        .add(TierTools::new(Arc::clone(client)))
        .add(OfferTools::new(Arc::clone(client)))
        .add(NewsletterTools::new(Arc::clone(client)))
        .add(InviteTools::new(Arc::clone(client)))
        .add(RoleTools::new(Arc::clone(client)))
        .add(WebhookTools::new(Arc::clone(client)))
        .add(DebugTools::new(Arc::clone(client)))
}

/// MCP server over the Ghost Admin API.
pub struct GhostMcpServer {
    registry: CompositeRegistry,
    resources: ResourceRouter,
    prompts: PromptRouter,
}

impl GhostMcpServer {
    /// Build a server with the default registry around the given client.
    pub fn new(client: Arc<GhostClient>) -> Self {
        let registry = build_registry(&client);
        Self::with_registry(registry, client)
    }

    /// Build a server around a custom registry (used by tests to narrow
    /// the tool surface).
    pub fn with_registry(registry: CompositeRegistry, client: Arc<GhostClient>) -> Self {
        Self {
            registry,
            resources: ResourceRouter::new(Arc::clone(&client)),
            prompts: PromptRouter::new(client),
        }
    }

    /// The tool registry behind this server.
    pub fn registry(&self) -> &CompositeRegistry {
        &self.registry
    }

    /// Dispatch one tool call by name.
    pub async fn dispatch_tool(
        &self,
        name: &str,
        args: Value,
    ) -> Result<CallToolResult, ErrorData> {
        debug!(tool = name, "tool call");
        match self.registry.call(name, args) {
            Some(future) => future.await,
            None => Err(ErrorData::invalid_params(
                format!("Unknown tool: {name}"),
                None,
            )),
        }
    }
}

impl ServerHandler for GhostMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Manage a Ghost site through its Admin API: posts, members, tags, \
                 tiers, offers, newsletters, staff, invites, and webhooks."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: self.registry.tools(),
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let args = Value::Object(request.arguments.unwrap_or_default());
        self.dispatch_tool(&request.name, args).await
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, ErrorData> {
        Ok(ListResourceTemplatesResult {
            resource_templates: self.resources.templates(),
            ..Default::default()
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        debug!(uri = %request.uri, "resource read");
        self.resources.read(&request.uri).await
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, ErrorData> {
        Ok(ListPromptsResult {
            prompts: self.prompts.prompts(),
            ..Default::default()
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, ErrorData> {
        self.prompts.get(&request.name, request.arguments).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ghost_mcp_core::ConfigHolder;
    use serde_json::json;

    fn server() -> GhostMcpServer {
        let client = GhostClient::new(ConfigHolder::new()).unwrap();
        GhostMcpServer::new(Arc::new(client))
    }

    #[test]
    fn test_registry_covers_every_entity() {
        let server = server();
        let registry = server.registry();

        assert_eq!(registry.tool_count(), 42);
        for name in [
            "posts_browse",
            "members_add",
            "users_edit",
            "tags_delete",
            "tiers_read",
            "offers_edit",
            "newsletters_add",
            "invites_delete",
            "roles_read",
            "webhooks_add",
            "admin_site_ping",
            "config_echo",
        ] {
            assert!(registry.has_tool(name), "missing {name}");
        }
    }

    #[test]
    fn test_excluded_lifecycle_operations_absent() {
        let server = server();
        let registry = server.registry();

        assert!(!registry.has_tool("users_add"));
        assert!(!registry.has_tool("users_delete"));
        assert!(!registry.has_tool("offers_delete"));
        assert!(!registry.has_tool("webhooks_browse"));
        assert!(!registry.has_tool("roles_add"));
    }

    #[test]
    fn test_tool_names_are_unique() {
        let server = server();
        let mut names: Vec<String> = server
            .registry()
            .tools()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[tokio::test]
    async fn test_unknown_tool_is_invalid_params() {
        let server = server();
        let err = server
            .dispatch_tool("settings_browse", json!({}))
            .await
            .unwrap_err();
        assert!(err.message.contains("Unknown tool"));
    }

    #[test]
    fn test_get_info_advertises_all_surfaces() {
        let info = server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_some());
    }
}
