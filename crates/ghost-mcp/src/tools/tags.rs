//! MCP tools for post tags.

use rmcp::model::{ErrorData, Tool};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use ghost_mcp_client::{Entity, GhostClient, Lookup, QueryPairs};

use crate::registry::{ToolRegistry, ToolResult};
use crate::tools::{
    browse_schema, deleted, fail, make_tool, ok_json, parse_args, to_payload, BrowseArgs,
};

const ENTITY: Entity = Entity::Tags;

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

/// Arguments for `tags_read`. One of `id` or `slug` is required.
#[derive(Debug, Deserialize)]
pub struct TagReadArgs {
    /// Tag id.
    pub id: Option<String>,
    /// Tag slug.
    pub slug: Option<String>,
}

/// Arguments for `tags_add`.
#[derive(Debug, Deserialize, Serialize)]
pub struct TagAddArgs {
    /// Tag name.
    pub name: String,
    /// Tag description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Explicit slug (derived from the name when absent).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Arguments for `tags_edit`.
#[derive(Debug, Deserialize, Serialize)]
pub struct TagEditArgs {
    /// Tag id.
    pub id: String,
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Arguments for `tags_delete`.
#[derive(Debug, Deserialize)]
pub struct TagDeleteArgs {
    /// Tag id.
    pub id: String,
}

// ---------------------------------------------------------------------------
// TagTools
// ---------------------------------------------------------------------------

/// MCP tools for the tags entity.
pub struct TagTools {
    client: Arc<GhostClient>,
}

impl TagTools {
    /// Create tag tools around a shared client.
    pub fn new(client: Arc<GhostClient>) -> Self {
        Self { client }
    }
}

impl ToolRegistry for TagTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool("tags_browse", "List tags with optional filters", browse_schema()),
            make_tool(
                "tags_read",
                "Fetch a single tag by id or slug",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Tag id" },
                        "slug": { "type": "string", "description": "Tag slug" }
                    }
                }),
            ),
            make_tool(
                "tags_add",
                "Create a tag",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "description": "Tag name" },
                        "description": { "type": "string", "description": "Tag description" },
                        "slug": { "type": "string", "description": "Explicit slug" }
                    },
                    "required": ["name"]
                }),
            ),
            make_tool(
                "tags_edit",
                "Update a tag by id",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Tag id" },
                        "name": { "type": "string", "description": "New name" },
                        "description": { "type": "string", "description": "New description" },
                        "slug": { "type": "string", "description": "New slug" }
                    },
                    "required": ["id"]
                }),
            ),
            make_tool(
                "tags_delete",
                "Delete a tag by id",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Tag id" }
                    },
                    "required": ["id"]
                }),
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let client = Arc::clone(&self.client);

        match name {
            "tags_browse" => Some(Box::pin(async move {
                let args: BrowseArgs = parse_args(args)?;
                match client.browse(ENTITY, &args.to_query()).await {
                    Ok(tags) => ok_json(&tags),
                    Err(e) => Ok(fail("tags_browse", &e)),
                }
            })),

            "tags_read" => Some(Box::pin(async move {
                let args: TagReadArgs = parse_args(args)?;
                let lookup = match (args.id, args.slug) {
                    (Some(id), _) => Lookup::Id(id),
                    (None, Some(slug)) => Lookup::Slug(slug),
                    (None, None) => {
                        return Err(ErrorData::invalid_params(
                            "either 'id' or 'slug' is required",
                            None,
                        ))
                    }
                };
                match client.read(ENTITY, &lookup, &QueryPairs::new()).await {
                    Ok(tag) => ok_json(&tag),
                    Err(e) => Ok(fail("tags_read", &e)),
                }
            })),

            "tags_add" => Some(Box::pin(async move {
                let args: TagAddArgs = parse_args(args)?;
                let payload = to_payload(&args)?;
                match client.create(ENTITY, payload, &QueryPairs::new()).await {
                    Ok(tag) => ok_json(&tag),
                    Err(e) => Ok(fail("tags_add", &e)),
                }
            })),

            "tags_edit" => Some(Box::pin(async move {
                let args: TagEditArgs = parse_args(args)?;
                let id = args.id.clone();
                let payload = to_payload(&args)?;
                match client.update(ENTITY, &id, payload, &QueryPairs::new()).await {
                    Ok(tag) => ok_json(&tag),
                    Err(e) => Ok(fail("tags_edit", &e)),
                }
            })),

            "tags_delete" => Some(Box::pin(async move {
                let args: TagDeleteArgs = parse_args(args)?;
                match client.remove(ENTITY, &args.id).await {
                    Ok(()) => Ok(deleted(ENTITY, &args.id)),
                    Err(e) => Ok(fail("tags_delete", &e)),
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

    fn tools() -> TagTools {
        let client = GhostClient::new(ConfigHolder::new()).unwrap();
        TagTools::new(Arc::new(client))
    }

    #[test]
    fn test_registers_full_lifecycle() {
        let registry = tools();
        assert_eq!(registry.tool_count(), 5);
        assert!(registry.has_tool("tags_browse"));
        assert!(registry.has_tool("tags_delete"));
    }

    #[tokio::test]
    async fn test_read_requires_id_or_slug() {
        let registry = tools();
        let err = registry
            .call("tags_read", json!({}))
            .unwrap()
            .await
            .unwrap_err();
        assert!(err.message.contains("'id' or 'slug'"));
    }

    #[tokio::test]
    async fn test_add_requires_name() {
        let registry = tools();
        let err = registry
            .call("tags_add", json!({ "description": "no name" }))
            .unwrap()
            .await
            .unwrap_err();
        assert!(err.message.contains("name"));
    }
}
