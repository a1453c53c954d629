//! Diagnostic tools: connectivity probe and configuration echo.
//!
//! `admin_site_ping` needs only a base URL and no credentials, so it
//! stays useful while authentication is still being set up; a 401 from
//! the probe means the Admin API path is routed correctly.

use rmcp::model::{CallToolResult, Content, Tool};
use serde_json::Value;
use std::sync::Arc;

use ghost_mcp_client::GhostClient;
use ghost_mcp_core::key_id;

use crate::registry::{ToolRegistry, ToolResult};
use crate::tools::{fail, make_tool, ok_text};

fn empty_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {}
    })
}

/// Diagnostic tools.
pub struct DebugTools {
    client: Arc<GhostClient>,
}

impl DebugTools {
    /// Create debug tools around a shared client.
    pub fn new(client: Arc<GhostClient>) -> Self {
        Self { client }
    }
}

impl ToolRegistry for DebugTools {
    fn tools(&self) -> Vec<Tool> {
        vec![
            make_tool(
                "admin_site_ping",
                "Probe the Admin API path without authentication (401 means routing works)",
                empty_schema(),
            ),
            make_tool(
                "config_echo",
                "Show the active configuration (key id only, never the secret)",
                empty_schema(),
            ),
        ]
    }

    fn call(&self, name: &str, _args: Value) -> Option<ToolResult> {
        let client = Arc::clone(&self.client);

        match name {
            "admin_site_ping" => Some(Box::pin(async move {
                match client.ping_site().await {
                    Ok(report) => Ok(ok_text(format!(
                        "GET {}\nstatus={} statusText={}\nbody={}",
                        report.url, report.status, report.status_text, report.body
                    ))),
                    Err(e) => Ok(fail("admin_site_ping", &e)),
                }
            })),

            "config_echo" => Some(Box::pin(async move {
                let Some(config) = client.holder().current() else {
                    return Ok(CallToolResult::error(vec![Content::text(
                        "No Ghost config initialized",
                    )]));
                };
                let echo = serde_json::json!({
                    "url": config.api_url,
                    "version": config.api_version,
                    "keyId": key_id(&config.admin_api_key).unwrap_or("unknown"),
                });
                let text = serde_json::to_string_pretty(&echo)
                    .unwrap_or_else(|_| echo.to_string());
                Ok(ok_text(text))
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
    use ghost_mcp_core::{ConfigHolder, GhostConfig};
    use rmcp::model::RawContent;
    use serde_json::json;

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(t) => t.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_registers_both_tools() {
        let client = GhostClient::new(ConfigHolder::new()).unwrap();
        let registry = DebugTools::new(Arc::new(client));
        assert!(registry.has_tool("admin_site_ping"));
        assert!(registry.has_tool("config_echo"));
    }

    #[tokio::test]
    async fn test_config_echo_without_config() {
        let client = GhostClient::new(ConfigHolder::new()).unwrap();
        let registry = DebugTools::new(Arc::new(client));

        let result = registry
            .call("config_echo", json!({}))
            .unwrap()
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "No Ghost config initialized");
    }

    #[tokio::test]
    async fn test_config_echo_masks_secret() {
        let holder = ConfigHolder::with_config(GhostConfig {
            api_url: "https://blog.example.com".into(),
            admin_api_key: "abc123:deadbeefcafebabe".into(),
            content_api_key: None,
            api_version: "v6.0".into(),
        });
        let client = GhostClient::new(holder).unwrap();
        let registry = DebugTools::new(Arc::new(client));

        let result = registry
            .call("config_echo", json!({}))
            .unwrap()
            .await
            .unwrap();
        let text = text_of(&result);

        assert!(text.contains("abc123"));
        assert!(!text.contains("deadbeefcafebabe"));
        assert!(text.contains("v6.0"));
    }
}
