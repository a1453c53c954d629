//! MCP tools for staff roles.
//!
//! Roles are fixed by the platform; only browse and read are exposed.

use rmcp::model::{ErrorData, Tool};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use ghost_mcp_client::{Entity, GhostClient, Lookup, QueryPairs};

use crate::registry::{ToolRegistry, ToolResult};
use crate::tools::{browse_schema, fail, make_tool, ok_json, parse_args, BrowseArgs};

const ENTITY: Entity = Entity::Roles;

/// Arguments for `roles_read`. One of `id` or `name` is required.
#[derive(Debug, Deserialize)]
pub struct RoleReadArgs {
    /// Role id.
    pub id: Option<String>,
    /// Role name, e.g. "Editor".
    pub name: Option<String>,
}

/// MCP tools for the roles entity.
pub struct RoleTools {
    client: Arc<GhostClient>,
}

impl RoleTools {
    /// Create role tools around a shared client.
    pub fn new(client: Arc<GhostClient>) -> Self {
        Self { client }
    }
}

impl ToolRegistry for RoleTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool("roles_browse", "List staff roles", browse_schema()),
            make_tool(
                "roles_read",
                "Fetch a single role by id or name",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Role id" },
                        "name": { "type": "string", "description": "Role name, e.g. \"Editor\"" }
                    }
                }),
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let client = Arc::clone(&self.client);

        match name {
            "roles_browse" => Some(Box::pin(async move {
                let args: BrowseArgs = parse_args(args)?;
                match client.browse(ENTITY, &args.to_query()).await {
                    Ok(roles) => ok_json(&roles),
                    Err(e) => Ok(fail("roles_browse", &e)),
                }
            })),

            "roles_read" => Some(Box::pin(async move {
                let args: RoleReadArgs = parse_args(args)?;
                let lookup = match (args.id, args.name) {
                    (Some(id), _) => Lookup::Id(id),
                    (None, Some(role_name)) => Lookup::Name(role_name),
                    (None, None) => {
                        return Err(ErrorData::invalid_params(
                            "either 'id' or 'name' is required",
                            None,
                        ))
                    }
                };
                match client.read(ENTITY, &lookup, &QueryPairs::new()).await {
                    Ok(role) => ok_json(&role),
                    Err(e) => Ok(fail("roles_read", &e)),
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

    fn tools() -> RoleTools {
        let client = GhostClient::new(ConfigHolder::new()).unwrap();
        RoleTools::new(Arc::new(client))
    }

    #[test]
    fn test_read_only_surface() {
        let registry = tools();
        assert_eq!(registry.tool_count(), 2);
        assert!(!registry.has_tool("roles_add"));
        assert!(!registry.has_tool("roles_edit"));
        assert!(!registry.has_tool("roles_delete"));
    }

    #[tokio::test]
    async fn test_read_requires_id_or_name() {
        let registry = tools();
        let err = registry
            .call("roles_read", json!({}))
            .unwrap()
            .await
            .unwrap_err();
        assert!(err.message.contains("'id' or 'name'"));
    }
}
