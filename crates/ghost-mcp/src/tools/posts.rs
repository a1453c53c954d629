//! MCP tools for blog posts.
//!
//! Full lifecycle: browse, read (by id or slug), add, edit, delete.
//! When a payload carries `html`, the request adds `source=html` so the
//! remote renders from the HTML body instead of the lexical document.

use rmcp::model::{ErrorData, Tool};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use ghost_mcp_client::{Entity, GhostClient, Lookup, QueryPairs};

use crate::registry::{ToolRegistry, ToolResult};
use crate::tools::{
    browse_schema, deleted, fail, make_tool, ok_json, parse_args, to_payload, BrowseArgs,
};

const ENTITY: Entity = Entity::Posts;

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

/// Arguments for `posts_read`. One of `id` or `slug` is required.
#[derive(Debug, Deserialize)]
pub struct PostReadArgs {
    /// Post id.
    pub id: Option<String>,
    /// Post slug.
    pub slug: Option<String>,
}

/// Arguments for `posts_add`.
#[derive(Debug, Deserialize, Serialize)]
pub struct PostAddArgs {
    /// Post title.
    pub title: String,
    /// HTML body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Lexical document (JSON string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexical: Option<String>,
    /// Status: draft, published, scheduled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Arguments for `posts_edit`. The remote rejects updates whose
/// `updated_at` does not match the stored row, so it is required here.
#[derive(Debug, Deserialize, Serialize)]
pub struct PostEditArgs {
    /// Post id.
    pub id: String,
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New HTML body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// New lexical document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexical: Option<String>,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// `updated_at` of the revision being edited.
    pub updated_at: String,
}

/// Arguments for `posts_delete`.
#[derive(Debug, Deserialize)]
pub struct PostDeleteArgs {
    /// Post id.
    pub id: String,
}

fn source_html_query(has_html: bool) -> QueryPairs {
    if has_html {
        vec![("source".into(), "html".into())]
    } else {
        QueryPairs::new()
    }
}

// ---------------------------------------------------------------------------
// PostTools
// ---------------------------------------------------------------------------

/// MCP tools for the posts entity.
pub struct PostTools {
    client: Arc<GhostClient>,
}

impl PostTools {
    /// Create post tools around a shared client.
    pub fn new(client: Arc<GhostClient>) -> Self {
        Self { client }
    }
}

impl ToolRegistry for PostTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool("posts_browse", "List posts with optional filters", browse_schema()),
            make_tool(
                "posts_read",
                "Fetch a single post by id or slug",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Post id" },
                        "slug": { "type": "string", "description": "Post slug" }
                    }
                }),
            ),
            make_tool(
                "posts_add",
                "Create a post",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "title": { "type": "string", "description": "Post title" },
                        "html": { "type": "string", "description": "HTML body" },
                        "lexical": { "type": "string", "description": "Lexical document (JSON string)" },
                        "status": { "type": "string", "description": "draft, published, or scheduled" }
                    },
                    "required": ["title"]
                }),
            ),
            make_tool(
                "posts_edit",
                "Update a post by id (updated_at required)",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Post id" },
                        "title": { "type": "string", "description": "New title" },
                        "html": { "type": "string", "description": "New HTML body" },
                        "lexical": { "type": "string", "description": "New lexical document" },
                        "status": { "type": "string", "description": "New status" },
                        "updated_at": { "type": "string", "description": "updated_at of the revision being edited" }
                    },
                    "required": ["id", "updated_at"]
                }),
            ),
            make_tool(
                "posts_delete",
                "Delete a post by id",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Post id" }
                    },
                    "required": ["id"]
                }),
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let client = Arc::clone(&self.client);

        match name {
            "posts_browse" => Some(Box::pin(async move {
                let args: BrowseArgs = parse_args(args)?;
                match client.browse(ENTITY, &args.to_query()).await {
                    Ok(posts) => ok_json(&posts),
                    Err(e) => Ok(fail("posts_browse", &e)),
                }
            })),

            "posts_read" => Some(Box::pin(async move {
                let args: PostReadArgs = parse_args(args)?;
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
                    Ok(post) => ok_json(&post),
                    Err(e) => Ok(fail("posts_read", &e)),
                }
            })),

            "posts_add" => Some(Box::pin(async move {
                let args: PostAddArgs = parse_args(args)?;
                let query = source_html_query(args.html.is_some());
                let payload = to_payload(&args)?;
                match client.create(ENTITY, payload, &query).await {
                    Ok(post) => ok_json(&post),
                    Err(e) => Ok(fail("posts_add", &e)),
                }
            })),

            "posts_edit" => Some(Box::pin(async move {
                let args: PostEditArgs = parse_args(args)?;
                let query = source_html_query(args.html.is_some());
                let id = args.id.clone();
                let payload = to_payload(&args)?;
                match client.update(ENTITY, &id, payload, &query).await {
                    Ok(post) => ok_json(&post),
                    Err(e) => Ok(fail("posts_edit", &e)),
                }
            })),

            "posts_delete" => Some(Box::pin(async move {
                let args: PostDeleteArgs = parse_args(args)?;
                match client.remove(ENTITY, &args.id).await {
                    Ok(()) => Ok(deleted(ENTITY, &args.id)),
                    Err(e) => Ok(fail("posts_delete", &e)),
                }
            })),

            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
