//! Tool registry trait for the Ghost MCP server.
//!
//! Each Admin API entity contributes one [`ToolRegistry`] implementation
//! (its browse/read/add/edit/delete tools); [`CompositeRegistry`] stitches
//! them into the single dispatch table the server consults.

use rmcp::model::{CallToolResult, ErrorData, Tool};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

/// Type alias for async tool handler results.
pub type ToolResult = Pin<Box<dyn Future<Output = Result<CallToolResult, ErrorData>> + Send>>;

/// Trait for registering and dispatching MCP tools.
///
/// The server delegates `list_tools` and `call_tool` to the registry it
/// holds; a registry answers `None` from [`call`](Self::call) when the
/// name is not one of its tools, letting a composite try the next one.
///
/// # Example
///
/// ```rust,ignore
/// struct TagTools { client: Arc<GhostClient> }
///
/// impl ToolRegistry for TagTools {
///     fn tools(&self) -> Vec<Tool> {
///         vec![/* tags_browse, tags_read, ... */]
///     }
///
///     fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
///         match name {
///             "tags_browse" => Some(Box::pin(self.handle_browse(args))),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait ToolRegistry: Send + Sync {
    /// Returns information about all available tools.
    fn tools(&self) -> Vec<Tool>;

    /// Dispatches a tool call by name.
    ///
    /// Returns `None` if the tool is not recognized by this registry.
    fn call(&self, name: &str, args: Value) -> Option<ToolResult>;

    /// Returns the number of registered tools.
    fn tool_count(&self) -> usize {
        self.tools().len()
    }

    /// Check if a tool exists by name.
    fn has_tool(&self, name: &str) -> bool {
        self.tools().iter().any(|t| t.name == name)
    }
}

/// A registry that combines multiple sub-registries.
///
/// The server is built from one sub-registry per entity plus the
/// diagnostics registry; dispatch tries each in registration order.
///
/// # Example
///
/// ```rust,ignore
/// let registry = CompositeRegistry::new()
///     .add(PostTools::new(client.clone()))
///     .add(MemberTools::new(client.clone()))
///     .add(DebugTools::new(client));
/// ```
pub struct CompositeRegistry {
    registries: Vec<Box<dyn ToolRegistry>>,
}

impl CompositeRegistry {
    /// Create a new empty composite registry.
    pub fn new() -> Self {
        Self {
            registries: Vec::new(),
        }
    }

    /// Add a sub-registry.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: ToolRegistry + 'static>(mut self, registry: R) -> Self {
        self.registries.push(Box::new(registry));
        self
    }
}

impl Default for CompositeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry for CompositeRegistry {
    fn tools(&self) -> Vec<Tool> {
        self.registries.iter().flat_map(|r| r.tools()).collect()
    }

    fn call(&self, name: &str, args: Value) -> Option<ToolResult> {
        for registry in &self.registries {
            if let Some(result) = registry.call(name, args.clone()) {
                return Some(result);
            }
        }
        None
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::Content;
    use serde_json::json;
    use std::sync::Arc;

    fn make_tool(name: &str, description: &str) -> Tool {
        Tool {
            name: name.to_string().into(),
            description: Some(description.to_string().into()),
            input_schema: Arc::new(serde_json::Map::new()),
            title: None,
            output_schema: None,
            annotations: None,
            icons: None,
            meta: None,
        }
    }

    struct FakeEntityTools {
        tool_list: Vec<Tool>,
    }

    impl ToolRegistry for FakeEntityTools {
        fn tools(&self) -> Vec<Tool> {
            self.tool_list.clone()
        }

        fn call(&self, name: &str, _args: Value) -> Option<ToolResult> {
            if self.has_tool(name) {
                let name = name.to_string();
                Some(Box::pin(async move {
                    Ok(CallToolResult::success(vec![Content::text(format!(
                        "called: {name}"
                    ))]))
                }))
            } else {
                None
            }
        }
    }

    #[test]
    fn test_tool_count() {
        let registry = FakeEntityTools {
            tool_list: vec![
                make_tool("tags_browse", "Browse tags"),
                make_tool("tags_read", "Read a tag"),
            ],
        };
        assert_eq!(registry.tool_count(), 2);
    }

    #[test]
    fn test_has_tool() {
        let registry = FakeEntityTools {
            tool_list: vec![make_tool("tags_browse", "Browse tags")],
        };
        assert!(registry.has_tool("tags_browse"));
        assert!(!registry.has_tool("posts_browse"));
    }

    #[tokio::test]
    async fn test_call_known_tool() {
        let registry = FakeEntityTools {
            tool_list: vec![make_tool("tags_browse", "Browse tags")],
        };

        let future = registry.call("tags_browse", json!({})).unwrap();
        let result = future.await.unwrap();
        assert_eq!(result.is_error, Some(false));
    }

    #[test]
    fn test_call_unknown_tool() {
        let registry = FakeEntityTools {
            tool_list: vec![make_tool("tags_browse", "Browse tags")],
        };
        assert!(registry.call("members_browse", json!({})).is_none());
    }

    #[test]
    fn test_composite_registry_empty() {
        let composite = CompositeRegistry::new();
        assert_eq!(composite.tool_count(), 0);
        assert!(!composite.has_tool("anything"));
    }

    #[test]
    fn test_composite_registry_combines_tools() {
        let posts = FakeEntityTools {
            tool_list: vec![make_tool("posts_browse", "Browse posts")],
        };
        let members = FakeEntityTools {
            tool_list: vec![make_tool("members_browse", "Browse members")],
        };

        let composite = CompositeRegistry::new().add(posts).add(members);

        assert_eq!(composite.tool_count(), 2);
        assert!(composite.has_tool("posts_browse"));
        assert!(composite.has_tool("members_browse"));
        assert!(!composite.has_tool("tiers_browse"));
    }

    #[tokio::test]
    async fn test_composite_registry_dispatches_in_order() {
        let posts = FakeEntityTools {
            tool_list: vec![make_tool("posts_browse", "Browse posts")],
        };
        let members = FakeEntityTools {
            tool_list: vec![make_tool("members_browse", "Browse members")],
        };

        let composite = CompositeRegistry::new().add(posts).add(members);

        assert!(composite.call("posts_browse", json!({})).is_some());
        assert!(composite.call("members_browse", json!({})).is_some());
        assert!(composite.call("missing", json!({})).is_none());
    }

    #[test]
    fn test_composite_registry_default() {
        let composite = CompositeRegistry::default();
        assert_eq!(composite.tool_count(), 0);
    }
}
