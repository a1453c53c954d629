//! MCP tools for membership tiers.
//!
//! Browse and read accept an `include` parameter (e.g.
//! `monthly_price,yearly_price,benefits`) forwarded straight to the
//! remote API.

use rmcp::model::{ErrorData, Tool};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use ghost_mcp_client::{Entity, GhostClient, Lookup, QueryPairs};

use crate::registry::{ToolRegistry, ToolResult};
use crate::tools::{deleted, fail, make_tool, ok_json, parse_args, to_payload, BrowseArgs};

const ENTITY: Entity = Entity::Tiers;

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

/// Arguments for `tiers_browse`: the common browse set plus `include`.
#[derive(Debug, Deserialize)]
pub struct TierBrowseArgs {
    /// Common filter/limit/page/order arguments.
    #[serde(flatten)]
    pub common: BrowseArgs,
    /// Related data to include, comma-separated.
    pub include: Option<String>,
}

impl TierBrowseArgs {
    fn to_query(&self) -> QueryPairs {
        let mut query = self.common.to_query();
        if let Some(include) = &self.include {
            query.push(("include".into(), include.clone()));
        }
        query
    }
}

/// Arguments for `tiers_read`. One of `id` or `slug` is required.
#[derive(Debug, Deserialize)]
pub struct TierReadArgs {
    /// Tier id.
    pub id: Option<String>,
    /// Tier slug.
    pub slug: Option<String>,
    /// Related data to include, comma-separated.
    pub include: Option<String>,
}

/// Arguments for `tiers_add`.
#[derive(Debug, Deserialize, Serialize)]
pub struct TierAddArgs {
    /// Tier name.
    pub name: String,
    /// Tier description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Welcome page URL for new subscribers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome_page_url: Option<String>,
    /// Visibility: public or none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// Monthly price in the smallest currency unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_price: Option<u64>,
    /// Yearly price in the smallest currency unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_price: Option<u64>,
    /// ISO currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Benefit lines shown on the tier card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
}

/// Arguments for `tiers_edit`.
#[derive(Debug, Deserialize, Serialize)]
pub struct TierEditArgs {
    /// Tier id.
    pub id: String,
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New welcome page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome_page_url: Option<String>,
    /// New visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    /// New monthly price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_price: Option<u64>,
    /// New yearly price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_price: Option<u64>,
    /// New currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Replacement benefit lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
}

/// Arguments for `tiers_delete`.
#[derive(Debug, Deserialize)]
pub struct TierDeleteArgs {
    /// Tier id.
    pub id: String,
}

// ---------------------------------------------------------------------------
// TierTools
// ---------------------------------------------------------------------------

/// MCP tools for the tiers entity.
pub struct TierTools {
    client: Arc<GhostClient>,
}

impl TierTools {
    /// Create tier tools around a shared client.
    pub fn new(client: Arc<GhostClient>) -> Self {
        Self { client }
    }
}

impl ToolRegistry for TierTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool(
                "tiers_browse",
                "List tiers with optional filters and includes",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "filter": { "type": "string", "description": "NQL filter expression" },
                        "limit": { "type": ["integer", "string"], "description": "Page size, or \"all\"" },
                        "page": { "type": "integer", "description": "Page number (1-based)" },
                        "order": { "type": "string", "description": "Order clause" },
                        "include": { "type": "string", "description": "Related data, e.g. \"monthly_price,yearly_price,benefits\"" }
                    }
                }),
            ),
            make_tool(
                "tiers_read",
                "Fetch a single tier by id or slug",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Tier id" },
                        "slug": { "type": "string", "description": "Tier slug" },
                        "include": { "type": "string", "description": "Related data to include" }
                    }
                }),
            ),
            make_tool(
                "tiers_add",
                "Create a tier",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "description": "Tier name" },
                        "description": { "type": "string", "description": "Tier description" },
                        "welcome_page_url": { "type": "string", "description": "Welcome page URL" },
                        "visibility": { "type": "string", "description": "public or none" },
                        "monthly_price": { "type": "integer", "description": "Monthly price (smallest currency unit)" },
                        "yearly_price": { "type": "integer", "description": "Yearly price (smallest currency unit)" },
                        "currency": { "type": "string", "description": "ISO currency code" },
                        "benefits": {
                            "type": "array",
                            "description": "Benefit lines",
                            "items": { "type": "string" }
                        }
                    },
                    "required": ["name"]
                }),
            ),
            make_tool(
                "tiers_edit",
                "Update a tier by id",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Tier id" },
                        "name": { "type": "string", "description": "New name" },
                        "description": { "type": "string", "description": "New description" },
                        "welcome_page_url": { "type": "string", "description": "New welcome page URL" },
                        "visibility": { "type": "string", "description": "New visibility" },
                        "monthly_price": { "type": "integer", "description": "New monthly price" },
                        "yearly_price": { "type": "integer", "description": "New yearly price" },
                        "currency": { "type": "string", "description": "New currency code" },
                        "benefits": {
                            "type": "array",
                            "description": "Replacement benefit lines",
                            "items": { "type": "string" }
                        }
                    },
                    "required": ["id"]
                }),
            ),
            make_tool(
                "tiers_delete",
                "Delete a tier by id",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Tier id" }
                    },
                    "required": ["id"]
                }),
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let client = Arc::clone(&self.client);

        match name {
            "tiers_browse" => Some(Box::pin(async move {
                let args: TierBrowseArgs = parse_args(args)?;
                match client.browse(ENTITY, &args.to_query()).await {
                    Ok(tiers) => ok_json(&tiers),
                    Err(e) => Ok(fail("tiers_browse", &e)),
                }
            })),

            "tiers_read" => Some(Box::pin(async move {
                let args: TierReadArgs = parse_args(args)?;
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
                let mut query = QueryPairs::new();
                if let Some(include) = args.include {
                    query.push(("include".into(), include));
                }
                match client.read(ENTITY, &lookup, &query).await {
                    Ok(tier) => ok_json(&tier),
                    Err(e) => Ok(fail("tiers_read", &e)),
                }
            })),

            "tiers_add" => Some(Box::pin(async move {
                let args: TierAddArgs = parse_args(args)?;
                let payload = to_payload(&args)?;
                match client.create(ENTITY, payload, &QueryPairs::new()).await {
                    Ok(tier) => ok_json(&tier),
                    Err(e) => Ok(fail("tiers_add", &e)),
                }
            })),

            "tiers_edit" => Some(Box::pin(async move {
                let args: TierEditArgs = parse_args(args)?;
                let id = args.id.clone();
                let payload = to_payload(&args)?;
                match client.update(ENTITY, &id, payload, &QueryPairs::new()).await {
                    Ok(tier) => ok_json(&tier),
                    Err(e) => Ok(fail("tiers_edit", &e)),
                }
            })),

            "tiers_delete" => Some(Box::pin(async move {
                let args: TierDeleteArgs = parse_args(args)?;
                match client.remove(ENTITY, &args.id).await {
                    Ok(()) => Ok(deleted(ENTITY, &args.id)),
                    Err(e) => Ok(fail("tiers_delete", &e)),
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

    fn tools() -> TierTools {
        let client = GhostClient::new(ConfigHolder::new()).unwrap();
        TierTools::new(Arc::new(client))
    }

    #[test]
    fn test_registers_full_lifecycle() {
        let registry = tools();
        assert_eq!(registry.tool_count(), 5);
        assert!(registry.has_tool("tiers_browse"));
        assert!(registry.has_tool("tiers_delete"));
    }

    #[test]
    fn test_browse_include_forwarded_with_common_args() {
        let args: TierBrowseArgs = serde_json::from_value(json!({
            "limit": 10,
            "include": "monthly_price,yearly_price,benefits"
        }))
        .unwrap();
        let query = args.to_query();
        assert!(query.contains(&("limit".to_string(), "10".to_string())));
        assert!(query.contains(&(
            "include".to_string(),
            "monthly_price,yearly_price,benefits".to_string()
        )));
    }

    #[tokio::test]
    async fn test_read_requires_id_or_slug() {
        let registry = tools();
        let err = registry
            .call("tiers_read", json!({ "include": "benefits" }))
            .unwrap()
            .await
            .unwrap_err();
        assert!(err.message.contains("'id' or 'slug'"));
    }

    #[test]
    fn test_add_payload_shape() {
        let args: TierAddArgs = serde_json::from_value(json!({
            "name": "Gold",
            "monthly_price": 500,
            "currency": "usd",
            "benefits": ["Early access"]
        }))
        .unwrap();
        let payload = serde_json::to_value(&args).unwrap();
        assert_eq!(
            payload,
            json!({
                "name": "Gold",
                "monthly_price": 500,
                "currency": "usd",
                "benefits": ["Early access"]
            })
        );
    }
}
