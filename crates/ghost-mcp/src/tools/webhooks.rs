//! MCP tools for outbound webhooks.
//!
//! The Admin API has no browse or read path for webhooks; the surface
//! is add, edit, delete.

use rmcp::model::Tool;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use ghost_mcp_client::{Entity, GhostClient, QueryPairs};

use crate::registry::{ToolRegistry, ToolResult};
use crate::tools::{deleted, fail, make_tool, ok_json, parse_args, to_payload};

const ENTITY: Entity = Entity::Webhooks;

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

/// Arguments for `webhooks_add`.
#[derive(Debug, Deserialize, Serialize)]
pub struct WebhookAddArgs {
    /// Event that triggers the webhook, e.g. "post.published".
    pub event: String,
    /// URL the payload is delivered to.
    pub target_url: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Signing secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// API version for the delivered payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Owning integration (required for user-authenticated requests).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_id: Option<String>,
}

/// Arguments for `webhooks_edit`.
#[derive(Debug, Deserialize, Serialize)]
pub struct WebhookEditArgs {
    /// Webhook id.
    pub id: String,
    /// New trigger event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// New target URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New payload API version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

/// Arguments for `webhooks_delete`.
#[derive(Debug, Deserialize)]
pub struct WebhookDeleteArgs {
    /// Webhook id.
    pub id: String,
}

// ---------------------------------------------------------------------------
// WebhookTools
// ---------------------------------------------------------------------------

/// MCP tools for the webhooks entity.
pub struct WebhookTools {
    client: Arc<GhostClient>,
}

impl WebhookTools {
    /// Create webhook tools around a shared client.
    pub fn new(client: Arc<GhostClient>) -> Self {
        Self { client }
    }
}

impl ToolRegistry for WebhookTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool(
                "webhooks_add",
                "Register a webhook",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "event": { "type": "string", "description": "Trigger event, e.g. \"post.published\"" },
                        "target_url": { "type": "string", "description": "Delivery URL" },
                        "name": { "type": "string", "description": "Display name" },
                        "secret": { "type": "string", "description": "Signing secret" },
                        "api_version": { "type": "string", "description": "Payload API version" },
                        "integration_id": { "type": "string", "description": "Owning integration id" }
                    },
                    "required": ["event", "target_url"]
                }),
            ),
            make_tool(
                "webhooks_edit",
                "Update a webhook by id",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Webhook id" },
                        "event": { "type": "string", "description": "New trigger event" },
                        "target_url": { "type": "string", "description": "New delivery URL" },
                        "name": { "type": "string", "description": "New display name" },
                        "api_version": { "type": "string", "description": "New payload API version" }
                    },
                    "required": ["id"]
                }),
            ),
            make_tool(
                "webhooks_delete",
                "Delete a webhook by id",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Webhook id" }
                    },
                    "required": ["id"]
                }),
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let client = Arc::clone(&self.client);

        match name {
            "webhooks_add" => Some(Box::pin(async move {
                let args: WebhookAddArgs = parse_args(args)?;
                let payload = to_payload(&args)?;
                match client.create(ENTITY, payload, &QueryPairs::new()).await {
                    Ok(webhook) => ok_json(&webhook),
                    Err(e) => Ok(fail("webhooks_add", &e)),
                }
            })),

            "webhooks_edit" => Some(Box::pin(async move {
                let args: WebhookEditArgs = parse_args(args)?;
                let id = args.id.clone();
                let payload = to_payload(&args)?;
                match client.update(ENTITY, &id, payload, &QueryPairs::new()).await {
                    Ok(webhook) => ok_json(&webhook),
                    Err(e) => Ok(fail("webhooks_edit", &e)),
                }
            })),

            "webhooks_delete" => Some(Box::pin(async move {
                let args: WebhookDeleteArgs = parse_args(args)?;
                match client.remove(ENTITY, &args.id).await {
                    Ok(()) => Ok(deleted(ENTITY, &args.id)),
                    Err(e) => Ok(fail("webhooks_delete", &e)),
                }
            })),

            _ => None,
        }
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

    fn tools() -> WebhookTools {
        let client = GhostClient::new(ConfigHolder::new()).unwrap();
        WebhookTools::new(Arc::new(client))
    }

    #[test]
    fn test_mutation_only_surface() {
        let registry = tools();
        assert_eq!(registry.tool_count(), 3);
        assert!(!registry.has_tool("webhooks_browse"));
        assert!(!registry.has_tool("webhooks_read"));
    }

    #[tokio::test]
    async fn test_add_requires_event_and_target_url() {
        let registry = tools();
        let err = registry
            .call("webhooks_add", json!({ "event": "post.published" }))
            .unwrap()
            .await
            .unwrap_err();
        assert!(err.message.contains("target_url"));
    }
}
