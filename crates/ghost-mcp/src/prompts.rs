//! Prompt definitions.
//!
//! One prompt today: `summarize_post` fetches a post and renders a user
//! message asking for a summary of its title, excerpt, and a content
//! preview.

use rmcp::model::{
    ErrorData, GetPromptResult, Prompt, PromptArgument, PromptMessage, PromptMessageRole,
};
use serde_json::{Map, Value};
use std::sync::Arc;

use ghost_mcp_client::{Entity, GhostClient, Lookup, QueryPairs};

use crate::error::McpErrorExt;

/// Characters of HTML included in the preview.
const PREVIEW_CHARS: usize = 300;

/// Routes prompt requests to their renderers.
pub struct PromptRouter {
    client: Arc<GhostClient>,
}

impl PromptRouter {
    /// Create a router around a shared client.
    pub fn new(client: Arc<GhostClient>) -> Self {
        Self { client }
    }

    /// The prompts this router serves.
    pub fn prompts(&self) -> Vec<Prompt> {
        vec![Prompt::new(
            "summarize_post",
            Some("Summarize a blog post by id"),
            Some(vec![PromptArgument {
                name: "post_id".to_string(),
                title: None,
                description: Some("Id of the post to summarize".to_string()),
                required: Some(true),
            }]),
        )]
    }

    /// Render one prompt by name.
    pub async fn get(
        &self,
        name: &str,
        arguments: Option<Map<String, Value>>,
    ) -> Result<GetPromptResult, ErrorData> {
        match name {
            "summarize_post" => {
                let post_id = arguments
                    .as_ref()
                    .and_then(|args| args.get("post_id"))
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        ErrorData::invalid_params("'post_id' argument is required", None)
                    })?;

                let post = self
                    .client
                    .read(
                        Entity::Posts,
                        &Lookup::Id(post_id.to_string()),
                        &QueryPairs::new(),
                    )
                    .await
                    .map_err(|e| e.to_mcp_error())?;

                let text = render_summary_request(&post);
                Ok(GetPromptResult {
                    description: Some("Summarize a blog post".to_string()),
                    messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
                })
            }
            other => Err(ErrorData::invalid_params(
                format!("unknown prompt '{other}'"),
                None,
            )),
        }
    }
}

fn render_summary_request(post: &Value) -> String {
    let title = post.get("title").and_then(Value::as_str).unwrap_or("");
    let excerpt = post.get("excerpt").and_then(Value::as_str).unwrap_or("");
    let html = post.get("html").and_then(Value::as_str).unwrap_or("");
    let preview: String = html.chars().take(PREVIEW_CHARS).collect();

    format!(
        "Summarize the following Ghost post:\n\n\
         Title: {title}\nExcerpt: {excerpt}\n\nContent Preview:\n{preview}..."
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ghost_mcp_core::ConfigHolder;
    use serde_json::json;

    fn router() -> PromptRouter {
        let client = GhostClient::new(ConfigHolder::new()).unwrap();
        PromptRouter::new(Arc::new(client))
    }

    #[test]
    fn test_lists_summarize_post() {
        let prompts = router().prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "summarize_post");
    }

    #[tokio::test]
    async fn test_get_requires_post_id() {
        let err = router().get("summarize_post", None).await.unwrap_err();
        assert!(err.message.contains("post_id"));
    }

    #[tokio::test]
    async fn test_unknown_prompt_rejected() {
        let err = router().get("write_haiku", None).await.unwrap_err();
        assert!(err.message.contains("unknown prompt"));
    }

    #[test]
    fn test_render_truncates_preview() {
        let long_html = "x".repeat(1000);
        let post = json!({
            "title": "Hello",
            "excerpt": "A greeting",
            "html": long_html
        });
        let text = render_summary_request(&post);
        assert!(text.contains("Title: Hello"));
        assert!(text.contains("Excerpt: A greeting"));
        assert!(text.contains(&"x".repeat(PREVIEW_CHARS)));
        assert!(!text.contains(&"x".repeat(PREVIEW_CHARS + 1)));
    }
}
