//! MCP tools for staff users.
//!
//! Staff accounts are managed through invites, not direct creation, so
//! this registry exposes browse/read/edit only.

use rmcp::model::{ErrorData, Tool};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use ghost_mcp_client::{Entity, GhostClient, Lookup, QueryPairs};

use crate::registry::{ToolRegistry, ToolResult};
use crate::tools::{browse_schema, fail, make_tool, ok_json, parse_args, to_payload, BrowseArgs};

const ENTITY: Entity = Entity::Users;

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

/// Arguments for `users_read`. One of `id`, `slug`, or `email` is required.
#[derive(Debug, Deserialize)]
pub struct UserReadArgs {
    /// User id.
    pub id: Option<String>,
    /// User slug.
    pub slug: Option<String>,
    /// User email.
    pub email: Option<String>,
}

/// Arguments for `users_edit`.
#[derive(Debug, Deserialize, Serialize)]
pub struct UserEditArgs {
    /// User id.
    pub id: String,
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Profile bio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Website URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Facebook handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    /// Twitter handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

// ---------------------------------------------------------------------------
// UserTools
// ---------------------------------------------------------------------------

/// MCP tools for the users entity.
pub struct UserTools {
    client: Arc<GhostClient>,
}

impl UserTools {
    /// Create user tools around a shared client.
    pub fn new(client: Arc<GhostClient>) -> Self {
        Self { client }
    }
}

impl ToolRegistry for UserTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool(
                "users_browse",
                "List staff users with optional filters",
                browse_schema(),
            ),
            make_tool(
                "users_read",
                "Fetch a single staff user by id, slug, or email",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "User id" },
                        "slug": { "type": "string", "description": "User slug" },
                        "email": { "type": "string", "description": "User email" }
                    }
                }),
            ),
            make_tool(
                "users_edit",
                "Update a staff user by id",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "User id" },
                        "name": { "type": "string", "description": "New display name" },
                        "email": { "type": "string", "description": "New email" },
                        "slug": { "type": "string", "description": "New slug" },
                        "bio": { "type": "string", "description": "Profile bio" },
                        "website": { "type": "string", "description": "Website URL" },
                        "location": { "type": "string", "description": "Location" },
                        "facebook": { "type": "string", "description": "Facebook handle" },
                        "twitter": { "type": "string", "description": "Twitter handle" }
                    },
                    "required": ["id"]
                }),
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let client = Arc::clone(&self.client);

        match name {
            "users_browse" => Some(Box::pin(async move {
                let args: BrowseArgs = parse_args(args)?;
                match client.browse(ENTITY, &args.to_query()).await {
                    Ok(users) => ok_json(&users),
                    Err(e) => Ok(fail("users_browse", &e)),
                }
            })),

            "users_read" => Some(Box::pin(async move {
                let args: UserReadArgs = parse_args(args)?;
                let lookup = match (args.id, args.slug, args.email) {
                    (Some(id), _, _) => Lookup::Id(id),
                    (None, Some(slug), _) => Lookup::Slug(slug),
                    (None, None, Some(email)) => Lookup::Email(email),
                    (None, None, None) => {
                        return Err(ErrorData::invalid_params(
                            "one of 'id', 'slug', or 'email' is required",
                            None,
                        ))
                    }
                };
                match client.read(ENTITY, &lookup, &QueryPairs::new()).await {
                    Ok(user) => ok_json(&user),
                    Err(e) => Ok(fail("users_read", &e)),
                }
            })),

            "users_edit" => Some(Box::pin(async move {
                let args: UserEditArgs = parse_args(args)?;
                let id = args.id.clone();
                let payload = to_payload(&args)?;
                match client.update(ENTITY, &id, payload, &QueryPairs::new()).await {
                    Ok(user) => ok_json(&user),
                    Err(e) => Ok(fail("users_edit", &e)),
                }
            })),

            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
