//! MCP tools for audience members.

use rmcp::model::{ErrorData, Tool};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use ghost_mcp_client::{Entity, GhostClient, Lookup, QueryPairs};

use crate::registry::{ToolRegistry, ToolResult};
use crate::tools::{
    browse_schema, deleted, fail, make_tool, ok_json, parse_args, to_payload, BrowseArgs,
};

const ENTITY: Entity = Entity::Members;

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

/// A label attached to a member.
#[derive(Debug, Deserialize, Serialize)]
pub struct LabelRef {
    /// Label name.
    pub name: String,
    /// Label slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// A newsletter subscription reference.
#[derive(Debug, Deserialize, Serialize)]
pub struct NewsletterRef {
    /// Newsletter id.
    pub id: String,
}

/// Arguments for `members_read`. One of `id` or `email` is required.
#[derive(Debug, Deserialize)]
pub struct MemberReadArgs {
    /// Member id.
    pub id: Option<String>,
    /// Member email.
    pub email: Option<String>,
}

/// Arguments for `members_add`.
#[derive(Debug, Deserialize, Serialize)]
pub struct MemberAddArgs {
    /// Member email.
    pub email: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Staff-visible note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Labels to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<LabelRef>>,
    /// Newsletters to subscribe to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newsletters: Option<Vec<NewsletterRef>>,
}

/// Arguments for `members_edit`.
#[derive(Debug, Deserialize, Serialize)]
pub struct MemberEditArgs {
    /// Member id.
    pub id: String,
    /// New email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Replacement labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<LabelRef>>,
    /// Replacement newsletter subscriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newsletters: Option<Vec<NewsletterRef>>,
}

/// Arguments for `members_delete`.
#[derive(Debug, Deserialize)]
pub struct MemberDeleteArgs {
    /// Member id.
    pub id: String,
}

// ---------------------------------------------------------------------------
// MemberTools
// ---------------------------------------------------------------------------

/// MCP tools for the members entity.
pub struct MemberTools {
    client: Arc<GhostClient>,
}

impl MemberTools {
    /// Create member tools around a shared client.
    pub fn new(client: Arc<GhostClient>) -> Self {
        Self { client }
    }
}

impl ToolRegistry for MemberTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool(
                "members_browse",
                "List members with optional filters",
                browse_schema(),
            ),
            make_tool(
                "members_read",
                "Fetch a single member by id or email",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Member id" },
                        "email": { "type": "string", "description": "Member email" }
                    }
                }),
            ),
            make_tool(
                "members_add",
                "Create a member",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "email": { "type": "string", "description": "Member email" },
                        "name": { "type": "string", "description": "Display name" },
                        "note": { "type": "string", "description": "Staff-visible note" },
                        "labels": {
                            "type": "array",
                            "description": "Labels to attach",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "name": { "type": "string" },
                                    "slug": { "type": "string" }
                                },
                                "required": ["name"]
                            }
                        },
                        "newsletters": {
                            "type": "array",
                            "description": "Newsletters to subscribe to",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "id": { "type": "string" }
                                },
                                "required": ["id"]
                            }
                        }
                    },
                    "required": ["email"]
                }),
            ),
            make_tool(
                "members_edit",
                "Update a member by id",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Member id" },
                        "email": { "type": "string", "description": "New email" },
                        "name": { "type": "string", "description": "New display name" },
                        "note": { "type": "string", "description": "New note" },
                        "labels": {
                            "type": "array",
                            "description": "Replacement labels",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "name": { "type": "string" },
                                    "slug": { "type": "string" }
                                },
                                "required": ["name"]
                            }
                        },
                        "newsletters": {
                            "type": "array",
                            "description": "Replacement newsletter subscriptions",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "id": { "type": "string" }
                                },
                                "required": ["id"]
                            }
                        }
                    },
                    "required": ["id"]
                }),
            ),
            make_tool(
                "members_delete",
                "Delete a member by id",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Member id" }
                    },
                    "required": ["id"]
                }),
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let client = Arc::clone(&self.client);

        match name {
            "members_browse" => Some(Box::pin(async move {
                let args: BrowseArgs = parse_args(args)?;
                match client.browse(ENTITY, &args.to_query()).await {
                    Ok(members) => ok_json(&members),
                    Err(e) => Ok(fail("members_browse", &e)),
                }
            })),

            "members_read" => Some(Box::pin(async move {
                let args: MemberReadArgs = parse_args(args)?;
                let lookup = match (args.id, args.email) {
                    (Some(id), _) => Lookup::Id(id),
                    (None, Some(email)) => Lookup::Email(email),
                    (None, None) => {
                        return Err(ErrorData::invalid_params(
                            "either 'id' or 'email' is required",
                            None,
                        ))
                    }
                };
                match client.read(ENTITY, &lookup, &QueryPairs::new()).await {
                    Ok(member) => ok_json(&member),
                    Err(e) => Ok(fail("members_read", &e)),
                }
            })),

            "members_add" => Some(Box::pin(async move {
                let args: MemberAddArgs = parse_args(args)?;
                let payload = to_payload(&args)?;
                match client.create(ENTITY, payload, &QueryPairs::new()).await {
                    Ok(member) => ok_json(&member),
                    Err(e) => Ok(fail("members_add", &e)),
                }
            })),

            "members_edit" => Some(Box::pin(async move {
                let args: MemberEditArgs = parse_args(args)?;
                let id = args.id.clone();
                let payload = to_payload(&args)?;
                match client.update(ENTITY, &id, payload, &QueryPairs::new()).await {
                    Ok(member) => ok_json(&member),
                    Err(e) => Ok(fail("members_edit", &e)),
                }
            })),

            "members_delete" => Some(Box::pin(async move {
                let args: MemberDeleteArgs = parse_args(args)?;
                match client.remove(ENTITY, &args.id).await {
                    Ok(()) => Ok(deleted(ENTITY, &args.id)),
                    Err(e) => Ok(fail("members_delete", &e)),
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

    fn tools() -> MemberTools {
        let client = GhostClient::new(ConfigHolder::new()).unwrap();
        MemberTools::new(Arc::new(client))
    }

    #[test]
    fn test_registers_full_lifecycle() {
        let registry = tools();
        assert_eq!(registry.tool_count(), 5);
        assert!(registry.has_tool("members_add"));
        assert!(registry.has_tool("members_delete"));
    }

    #[tokio::test]
    async fn test_read_requires_id_or_email() {
        let registry = tools();
        let err = registry
            .call("members_read", json!({}))
            .unwrap()
            .await
            .unwrap_err();
        assert!(err.message.contains("'id' or 'email'"));
    }

    #[test]
    fn test_add_payload_nests_labels_and_newsletters() {
        let args: MemberAddArgs = serde_json::from_value(json!({
            "email": "a@b.com",
            "labels": [{ "name": "vip" }],
            "newsletters": [{ "id": "nl-1" }]
        }))
        .unwrap();
        let payload = serde_json::to_value(&args).unwrap();
        assert_eq!(
            payload,
            json!({
                "email": "a@b.com",
                "labels": [{ "name": "vip" }],
                "newsletters": [{ "id": "nl-1" }]
            })
        );
    }

    #[tokio::test]
    async fn test_add_requires_email() {
        let registry = tools();
        let err = registry
            .call("members_add", json!({ "name": "No Email" }))
            .unwrap()
            .await
            .unwrap_err();
        assert!(err.message.contains("email"));
    }
}
