//! MCP tools for promotional offers.
//!
//! Offers cannot be deleted through the Admin API; the lifecycle here is
//! browse, read (by id or redemption code), add, edit.

use rmcp::model::{ErrorData, Tool};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use ghost_mcp_client::{Entity, GhostClient, Lookup, QueryPairs};

use crate::registry::{ToolRegistry, ToolResult};
use crate::tools::{browse_schema, fail, make_tool, ok_json, parse_args, to_payload, BrowseArgs};

const ENTITY: Entity = Entity::Offers;

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

/// Arguments for `offers_read`. One of `id` or `code` is required.
#[derive(Debug, Deserialize)]
pub struct OfferReadArgs {
    /// Offer id.
    pub id: Option<String>,
    /// Offer redemption code.
    pub code: Option<String>,
}

/// Arguments for `offers_add`.
#[derive(Debug, Deserialize, Serialize)]
pub struct OfferAddArgs {
    /// Internal offer name.
    pub name: String,
    /// Redemption code.
    pub code: String,
    /// Billing cadence: month or year.
    pub cadence: String,
    /// Discount duration: once, forever, repeating, or trial.
    pub duration: String,
    /// Discount amount (cents for fixed, whole number for percent).
    pub amount: u64,
    /// Tier the offer applies to.
    pub tier_id: String,
    /// Discount type: percent, fixed, or trial.
    #[serde(rename = "type")]
    pub kind: String,
    /// Title shown at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_title: Option<String>,
    /// Description shown at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_description: Option<String>,
    /// Months the discount repeats (repeating duration only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_months: Option<u64>,
    /// ISO currency code (fixed type only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Arguments for `offers_edit`. Only the cosmetic fields are mutable
/// once an offer exists.
#[derive(Debug, Deserialize, Serialize)]
pub struct OfferEditArgs {
    /// Offer id.
    pub id: String,
    /// New internal name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New redemption code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// New checkout title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_title: Option<String>,
    /// New checkout description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_description: Option<String>,
}

// ---------------------------------------------------------------------------
// OfferTools
// ---------------------------------------------------------------------------

/// MCP tools for the offers entity.
pub struct OfferTools {
    client: Arc<GhostClient>,
}

impl OfferTools {
    /// Create offer tools around a shared client.
    pub fn new(client: Arc<GhostClient>) -> Self {
        Self { client }
    }
}

impl ToolRegistry for OfferTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool(
                "offers_browse",
                "List offers with optional filters",
                browse_schema(),
            ),
            make_tool(
                "offers_read",
                "Fetch a single offer by id or redemption code",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Offer id" },
                        "code": { "type": "string", "description": "Offer redemption code" }
                    }
                }),
            ),
            make_tool(
                "offers_add",
                "Create an offer",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "description": "Internal offer name" },
                        "code": { "type": "string", "description": "Redemption code" },
                        "cadence": { "type": "string", "description": "month or year" },
                        "duration": { "type": "string", "description": "once, forever, repeating, or trial" },
                        "amount": { "type": "integer", "description": "Discount amount" },
                        "tier_id": { "type": "string", "description": "Tier the offer applies to" },
                        "type": { "type": "string", "description": "percent, fixed, or trial" },
                        "display_title": { "type": "string", "description": "Title shown at checkout" },
                        "display_description": { "type": "string", "description": "Description shown at checkout" },
                        "duration_in_months": { "type": "integer", "description": "Months the discount repeats" },
                        "currency": { "type": "string", "description": "ISO currency code (fixed type)" }
                    },
                    "required": ["name", "code", "cadence", "duration", "amount", "tier_id", "type"]
                }),
            ),
            make_tool(
                "offers_edit",
                "Update an offer by id (name, code, and display fields only)",
                serde_json::json!({
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "description": "Offer id" },
                        "name": { "type": "string", "description": "New internal name" },
                        "code": { "type": "string", "description": "New redemption code" },
                        "display_title": { "type": "string", "description": "New checkout title" },
                        "display_description": { "type": "string", "description": "New checkout description" }
                    },
                    "required": ["id"]
                }),
            ),
        ]
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        let client = Arc::clone(&self.client);

        match name {
            "offers_browse" => Some(Box::pin(async move {
                let args: BrowseArgs = parse_args(args)?;
                match client.browse(ENTITY, &args.to_query()).await {
                    Ok(offers) => ok_json(&offers),
                    Err(e) => Ok(fail("offers_browse", &e)),
                }
            })),

            "offers_read" => Some(Box::pin(async move {
                let args: OfferReadArgs = parse_args(args)?;
                let lookup = match (args.id, args.code) {
                    (Some(id), _) => Lookup::Id(id),
                    (None, Some(code)) => Lookup::Code(code),
                    (None, None) => {
                        return Err(ErrorData::invalid_params(
                            "either 'id' or 'code' is required",
                            None,
                        ))
                    }
                };
                match client.read(ENTITY, &lookup, &QueryPairs::new()).await {
                    Ok(offer) => ok_json(&offer),
                    Err(e) => Ok(fail("offers_read", &e)),
                }
            })),

            "offers_add" => Some(Box::pin(async move {
                let args: OfferAddArgs = parse_args(args)?;
                let payload = to_payload(&args)?;
                match client.create(ENTITY, payload, &QueryPairs::new()).await {
                    Ok(offer) => ok_json(&offer),
                    Err(e) => Ok(fail("offers_add", &e)),
                }
            })),

            "offers_edit" => Some(Box::pin(async move {
                let args: OfferEditArgs = parse_args(args)?;
                let id = args.id.clone();
                let payload = to_payload(&args)?;
                match client.update(ENTITY, &id, payload, &QueryPairs::new()).await {
                    Ok(offer) => ok_json(&offer),
                    Err(e) => Ok(fail("offers_edit", &e)),
                }
            })),

            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
