//! MCP tools for email newsletters.

use rmcp::model::{ErrorData, Tool};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use ghost_mcp_client::{Entity, GhostClient, Lookup, QueryPairs};

use crate::registry::{ToolRegistry, ToolResult};
use crate::tools::{
    browse_schema, deleted, fail, make_tool, ok_json, parse_args, to_payload, BrowseArgs,
};

const ENTITY: Entity = Entity::Newsletters;

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

/// Arguments for `newsletters_read`. One of `id` or `slug` is required.
#[derive(Debug, Deserialize)]
pub struct NewsletterReadArgs {
    /// Newsletter id.
    pub id: Option<String>,
    /// Newsletter slug.
    pub slug: Option<String>,
}

/// Arguments for `newsletters_add`.
#[derive(Debug, Deserialize, Serialize)]
pub struct NewsletterAddArgs {
    /// Newsletter name.
    pub name: String,
    /// Newsletter description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Reply-to setting: newsletter or support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_reply_to: Option<String>,
    /// Status: active or archived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Subscribe new members automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribe_on_signup: Option<bool>,
    /// Show the publication icon in the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_header_icon: Option<bool>,
    /// Show the publication title in the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_header_title: Option<bool>,
    /// Show the newsletter name in the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_header_name: Option<bool>,
    /// Title font: serif or sans_serif.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_category: Option<String>,
    /// Title alignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_alignment: Option<String>,
    /// Show post feature images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_feature_image: Option<bool>,
    /// Body font: serif or sans_serif.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font_category: Option<String>,
    /// Show the publication badge in the footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_badge: Option<bool>,
}

/// Arguments for `newsletters_edit`.
#[derive(Debug, Deserialize, Serialize)]
pub struct NewsletterEditArgs {
    /// Newsletter id.
    pub id: String,
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Sender display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    /// Sender email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_email: Option<String>,
    /// Reply-to setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_reply_to: Option<String>,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Subscribe new members automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribe_on_signup: Option<bool>,
    /// Sort position among newsletters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u64>,
    /// Header image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_image: Option<String>,
    /// Show the publication icon in the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_header_icon: Option<bool>,
    /// Show the publication title in the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_header_title: Option<bool>,
    /// Title font category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_category: Option<String>,
    /// Title alignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_alignment: Option<String>,
    /// Show post feature images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_feature_image: Option<bool>,
    /// Body font category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font_category: Option<String>,
    /// Footer HTML content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_content: Option<String>,
    /// Show the publication badge in the footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_badge: Option<bool>,
    /// Show the newsletter name in the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_header_name: Option<bool>,
}

/// Arguments for `newsletters_delete`.
#[derive(Debug, Deserialize)]
pub struct NewsletterDeleteArgs {
    /// Newsletter id.
    pub id: String,
}

// ---------------------------------------------------------------------------
// NewsletterTools
// ---------------------------------------------------------------------------

/// MCP tools for the newsletters entity.
pub struct NewsletterTools {
    client: Arc<GhostClient>,
}

impl NewsletterTools {
    /// Create newsletter tools around a shared client.
    pub fn new(client: Arc<GhostClient>) -> Self {
        Self { client }
    }
}

impl ToolRegistry for NewsletterTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool(
                "newsletters_browse",
                "List newsletters with optional filters",
                browse_schema(),
            ),
            make_tool(
                "newsletters_read",
                "Fetch a single newsletter by id or slug",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Newsletter id" },
                        "slug": { "type": "string", "description": "Newsletter slug" }
                    }
                }),
            ),
            make_tool(
                "newsletters_add",
                "Create a newsletter",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "description": "Newsletter name" },
                        "description": { "type": "string", "description": "Newsletter description" },
                        "sender_reply_to": { "type": "string", "description": "newsletter or support" },
                        "status": { "type": "string", "description": "active or archived" },
                        "subscribe_on_signup": { "type": "boolean", "description": "Subscribe new members automatically" },
                        "show_header_icon": { "type": "boolean", "description": "Show publication icon" },
                        "show_header_title": { "type": "boolean", "description": "Show publication title" },
                        "show_header_name": { "type": "boolean", "description": "Show newsletter name" },
                        "title_font_category": { "type": "string", "description": "serif or sans_serif" },
                        "title_alignment": { "type": "string", "description": "Title alignment" },
                        "show_feature_image": { "type": "boolean", "description": "Show post feature images" },
                        "body_font_category": { "type": "string", "description": "serif or sans_serif" },
                        "show_badge": { "type": "boolean", "description": "Show publication badge" }
                    },
                    "required": ["name"]
                }),
            ),
            make_tool(
                "newsletters_edit",
                "Update a newsletter by id",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Newsletter id" },
                        "name": { "type": "string", "description": "New name" },
                        "description": { "type": "string", "description": "New description" },
                        "sender_name": { "type": "string", "description": "Sender display name" },
                        "sender_email": { "type": "string", "description": "Sender email address" },
                        "sender_reply_to": { "type": "string", "description": "Reply-to setting" },
                        "status": { "type": "string", "description": "New status" },
                        "subscribe_on_signup": { "type": "boolean", "description": "Subscribe new members automatically" },
                        "sort_order": { "type": "integer", "description": "Sort position" },
                        "header_image": { "type": "string", "description": "Header image URL" },
                        "show_header_icon": { "type": "boolean", "description": "Show publication icon" },
                        "show_header_title": { "type": "boolean", "description": "Show publication title" },
                        "title_font_category": { "type": "string", "description": "Title font category" },
                        "title_alignment": { "type": "string", "description": "Title alignment" },
                        "show_feature_image": { "type": "boolean", "description": "Show post feature images" },
                        "body_font_category": { "type": "string", "description": "Body font category" },
                        "footer_content": { "type": "string", "description": "Footer HTML content" },
                        "show_badge": { "type": "boolean", "description": "Show publication badge" },
                        "show_header_name": { "type": "boolean", "description": "Show newsletter name" }
                    },
                    "required": ["id"]
                }),
            ),
            make_tool(
                "newsletters_delete",
                "Delete a newsletter by id",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Newsletter id" }
                    },
                    "required": ["id"]
                }),
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let client = Arc::clone(&self.client);

        match name {
            "newsletters_browse" => Some(Box::pin(async move {
                let args: BrowseArgs = parse_args(args)?;
                match client.browse(ENTITY, &args.to_query()).await {
                    Ok(newsletters) => ok_json(&newsletters),
                    Err(e) => Ok(fail("newsletters_browse", &e)),
                }
            })),

            "newsletters_read" => Some(Box::pin(async move {
                let args: NewsletterReadArgs = parse_args(args)?;
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
                    Ok(newsletter) => ok_json(&newsletter),
                    Err(e) => Ok(fail("newsletters_read", &e)),
                }
            })),

            "newsletters_add" => Some(Box::pin(async move {
                let args: NewsletterAddArgs = parse_args(args)?;
                let payload = to_payload(&args)?;
                match client.create(ENTITY, payload, &QueryPairs::new()).await {
                    Ok(newsletter) => ok_json(&newsletter),
                    Err(e) => Ok(fail("newsletters_add", &e)),
                }
            })),

            "newsletters_edit" => Some(Box::pin(async move {
                let args: NewsletterEditArgs = parse_args(args)?;
                let id = args.id.clone();
                let payload = to_payload(&args)?;
                match client.update(ENTITY, &id, payload, &QueryPairs::new()).await {
                    Ok(newsletter) => ok_json(&newsletter),
                    Err(e) => Ok(fail("newsletters_edit", &e)),
                }
            })),

            "newsletters_delete" => Some(Box::pin(async move {
                let args: NewsletterDeleteArgs = parse_args(args)?;
                match client.remove(ENTITY, &args.id).await {
                    Ok(()) => Ok(deleted(ENTITY, &args.id)),
                    Err(e) => Ok(fail("newsletters_delete", &e)),
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

    fn tools() -> NewsletterTools {
        let client = GhostClient::new(ConfigHolder::new()).unwrap();
        NewsletterTools::new(Arc::new(client))
    }

    #[test]
    fn test_registers_full_lifecycle() {
        let registry = tools();
        assert_eq!(registry.tool_count(), 5);
        assert!(registry.has_tool("newsletters_add"));
        assert!(registry.has_tool("newsletters_delete"));
    }

    #[test]
    fn test_add_payload_keeps_booleans() {
        let args: NewsletterAddArgs = serde_json::from_value(json!({
            "name": "Weekly",
            "subscribe_on_signup": true,
            "show_badge": false
        }))
        .unwrap();
        let payload = serde_json::to_value(&args).unwrap();
        assert_eq!(
            payload,
            json!({
                "name": "Weekly",
                "subscribe_on_signup": true,
                "show_badge": false
            })
        );
    }

    #[tokio::test]
    async fn test_read_requires_id_or_slug() {
        let registry = tools();
        let err = registry
            .call("newsletters_read", json!({}))
            .unwrap()
            .await
            .unwrap_err();
        assert!(err.message.contains("'id' or 'slug'"));
    }
}
