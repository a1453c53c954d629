//! MCP tools for staff invites.
//!
//! Invites are write-once: browse, add, delete. There is no read or
//! edit path in the Admin API.

use rmcp::model::Tool;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use ghost_mcp_client::{Entity, GhostClient, QueryPairs};

use crate::registry::{ToolRegistry, ToolResult};
use crate::tools::{
    browse_schema, deleted, fail, make_tool, ok_json, parse_args, to_payload, BrowseArgs,
};

const ENTITY: Entity = Entity::Invites;

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

/// Arguments for `invites_add`.
#[derive(Debug, Deserialize, Serialize)]
pub struct InviteAddArgs {
    /// Role the invitee will receive.
    pub role_id: String,
    /// Invitee email address.
    pub email: String,
}

/// Arguments for `invites_delete`.
#[derive(Debug, Deserialize)]
pub struct InviteDeleteArgs {
    /// Invite id.
    pub id: String,
}

// ---------------------------------------------------------------------------
// InviteTools
// ---------------------------------------------------------------------------

/// MCP tools for the invites entity.
pub struct InviteTools {
    client: Arc<GhostClient>,
}

impl InviteTools {
    /// Create invite tools around a shared client.
    pub fn new(client: Arc<GhostClient>) -> Self {
        Self { client }
    }
}

impl ToolRegistry for InviteTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool(
                "invites_browse",
                "List pending staff invites",
                browse_schema(),
            ),
            make_tool(
                "invites_add",
                "Invite a staff user by email and role",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "role_id": { "type": "string", "description": "Role the invitee will receive" },
                        "email": { "type": "string", "description": "Invitee email address" }
                    },
                    "required": ["role_id", "email"]
                }),
            ),
            make_tool(
                "invites_delete",
                "Revoke a pending invite by id",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Invite id" }
                    },
                    "required": ["id"]
                }),
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let client = Arc::clone(&self.client);

        match name {
            "invites_browse" => Some(Box::pin(async move {
                let args: BrowseArgs = parse_args(args)?;
                match client.browse(ENTITY, &args.to_query()).await {
                    Ok(invites) => ok_json(&invites),
                    Err(e) => Ok(fail("invites_browse", &e)),
                }
            })),

            "invites_add" => Some(Box::pin(async move {
                let args: InviteAddArgs = parse_args(args)?;
                let payload = to_payload(&args)?;
                match client.create(ENTITY, payload, &QueryPairs::new()).await {
                    Ok(invite) => ok_json(&invite),
                    Err(e) => Ok(fail("invites_add", &e)),
                }
            })),

            "invites_delete" => Some(Box::pin(async move {
                let args: InviteDeleteArgs = parse_args(args)?;
                match client.remove(ENTITY, &args.id).await {
                    Ok(()) => Ok(deleted(ENTITY, &args.id)),
                    Err(e) => Ok(fail("invites_delete", &e)),
                }
            })),

            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
