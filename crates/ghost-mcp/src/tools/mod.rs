//! Per-entity MCP tool registries.
//!
//! One module per Admin API entity, each an implementation of
//! [`ToolRegistry`](crate::registry::ToolRegistry): serde argument
//! structs do the presence/type validation, hand-written JSON schemas
//! describe them to clients, and `call()` dispatches by tool name.
//! Shared helpers here keep the result shapes uniform across entities:
//! pretty-printed JSON on success, `"<op> failed. status=<s>\n<body>"`
//! on remote failure, and the exact text `Ghost API not configured`
//! when no credentials are loaded.

pub mod debug;
pub mod invites;
pub mod members;
pub mod newsletters;
pub mod offers;
pub mod posts;
pub mod roles;
pub mod tags;
pub mod tiers;
pub mod users;
pub mod webhooks;

use rmcp::model::{CallToolResult, Content, ErrorData, Tool};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use ghost_mcp_client::{Entity, QueryPairs};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub(crate) fn json_schema(value: Value) -> Arc<serde_json::Map<String, Value>> {
    match value {
        Value::Object(map) => Arc::new(map),
        _ => Arc::new(serde_json::Map::new()),
    }
}

pub(crate) fn make_tool(name: &str, description: &str, schema: Value) -> Tool {
    Tool {
        name: name.to_string().into(),
        description: Some(description.to_string().into()),
        input_schema: json_schema(schema),
        title: None,
        output_schema: None,
        annotations: None,
        icons: None,
        meta: None,
    }
}

/// Deserialize tool arguments, rejecting malformed input before any
/// request is built.
pub(crate) fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ErrorData> {
    serde_json::from_value(args).map_err(|e| ErrorData::invalid_params(e.to_string(), None))
}

/// Success result carrying the entity (or list) as pretty-printed JSON.
pub(crate) fn ok_json(value: &Value) -> Result<CallToolResult, ErrorData> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Success result carrying plain text.
pub(crate) fn ok_text(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Error-flagged result for an adapter failure.
///
/// An unconfigured holder produces the bare sentinel text; everything
/// else normalizes through `failure_parts()` into the uniform
/// `"<op> failed. status=<status>\n<body>"` shape.
pub(crate) fn fail(op: &str, err: &ghost_mcp_client::Error) -> CallToolResult {
    if err.is_not_configured() {
        return CallToolResult::error(vec![Content::text("Ghost API not configured")]);
    }
    let (status, body) = err.failure_parts();
    CallToolResult::error(vec![Content::text(format!(
        "{op} failed. status={status}\n{body}"
    ))])
}

/// Confirmation text for a completed delete.
pub(crate) fn deleted(entity: Entity, id: &str) -> CallToolResult {
    ok_text(format!("{} with id {id} deleted.", entity.label()))
}

// ---------------------------------------------------------------------------
// Shared argument types
// ---------------------------------------------------------------------------

/// Common browse arguments: NQL filter plus paging/ordering.
///
/// `limit` accepts a number or the string `"all"`, matching what the
/// Admin API itself accepts.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseArgs {
    /// NQL filter expression.
    pub filter: Option<String>,
    /// Page size, or `"all"`.
    pub limit: Option<Value>,
    /// 1-based page number.
    pub page: Option<u64>,
    /// Order clause, e.g. `"created_at DESC"`.
    pub order: Option<String>,
}

impl BrowseArgs {
    /// Forward the present arguments as query parameters.
    pub fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        if let Some(filter) = &self.filter {
            query.push(("filter".into(), filter.clone()));
        }
        if let Some(limit) = &self.limit {
            query.push(("limit".into(), scalar_string(limit)));
        }
        if let Some(page) = self.page {
            query.push(("page".into(), page.to_string()));
        }
        if let Some(order) = &self.order {
            query.push(("order".into(), order.clone()));
        }
        query
    }
}

/// Render a scalar JSON value without string quoting.
fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JSON schema shared by the plain browse tools.
pub(crate) fn browse_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "filter": {
                "type": "string",
                "description": "NQL filter expression"
            },
            "limit": {
                "type": ["integer", "string"],
                "description": "Page size, or \"all\""
            },
            "page": {
                "type": "integer",
                "description": "Page number (1-based)"
            },
            "order": {
                "type": "string",
                "description": "Order clause, e.g. \"created_at DESC\""
            }
        }
    })
}

/// Serialize an argument struct into a mutation payload.
///
/// Fields the struct skips (ids, `updated_at` markers) stay out of the
/// body; unknown inbound fields were already dropped at parse time.
pub(crate) fn to_payload<T: serde::Serialize>(args: &T) -> Result<Value, ErrorData> {
    serde_json::to_value(args).map_err(|e| ErrorData::internal_error(e.to_string(), None))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(t) => t.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_browse_args_to_query() {
        let args: BrowseArgs = serde_json::from_value(json!({
            "filter": "status:published",
            "limit": 5,
            "page": 2,
            "order": "created_at DESC"
        }))
        .unwrap();

        assert_eq!(
            args.to_query(),
            vec![
                ("filter".to_string(), "status:published".to_string()),
                ("limit".to_string(), "5".to_string()),
                ("page".to_string(), "2".to_string()),
                ("order".to_string(), "created_at DESC".to_string()),
            ]
        );
    }

    #[test]
    fn test_browse_args_limit_all() {
        let args: BrowseArgs = serde_json::from_value(json!({ "limit": "all" })).unwrap();
        assert_eq!(args.to_query(), vec![("limit".to_string(), "all".to_string())]);
    }

    #[test]
    fn test_browse_args_empty() {
        let args: BrowseArgs = serde_json::from_value(json!({})).unwrap();
        assert!(args.to_query().is_empty());
    }

    #[test]
    fn test_fail_formats_status_and_body() {
        let err = ghost_mcp_client::Error::Api {
            status: 422,
            body: "validation error".into(),
        };
        let result = fail("posts_add", &err);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "posts_add failed. status=422\nvalidation error"
        );
    }

    #[test]
    fn test_fail_unconfigured_uses_sentinel_text() {
        let err = ghost_mcp_client::Error::Core(ghost_mcp_core::Error::NotConfigured);
        let result = fail("members_browse", &err);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Ghost API not configured");
    }

    #[test]
    fn test_deleted_confirmation_text() {
        let result = deleted(Entity::Tags, "64fabc");
        assert_eq!(text_of(&result), "Tag with id 64fabc deleted.");
    }

    #[test]
    fn test_parse_args_rejects_wrong_type() {
        let err = parse_args::<BrowseArgs>(json!({ "page": "two" })).unwrap_err();
        assert!(err.message.contains("page") || err.message.contains("invalid"));
    }
}
