//! Addressable resources over Admin API entities.
//!
//! Each template maps a URI scheme onto a live fetch by id:
//! `post://{post_id}` reads the post, `blog-info://{blog_id}` reads the
//! site object (the id is only an address there). Contents come back as
//! `application/json` text under the original URI. Fetched entities are
//! passed through the typed models so a malformed remote shape fails at
//! the boundary instead of leaking downstream.

use rmcp::model::{
    AnnotateAble, ErrorData, RawResourceTemplate, ReadResourceResult, ResourceContents,
    ResourceTemplate,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use ghost_mcp_client::models::{Member, Newsletter, Offer, Post, Tier, User};
use ghost_mcp_client::{Entity, GhostClient, Lookup, QueryPairs};

use crate::error::McpErrorExt;

/// Routes resource URIs to entity fetches.
pub struct ResourceRouter {
    client: Arc<GhostClient>,
}

impl ResourceRouter {
    /// Create a router around a shared client.
    pub fn new(client: Arc<GhostClient>) -> Self {
        Self { client }
    }

    /// The resource templates this router serves.
    pub fn templates(&self) -> Vec<ResourceTemplate> {
        vec![
            template("user", "user://{user_id}", "A staff user by id"),
            template("member", "member://{member_id}", "An audience member by id"),
            template("tier", "tier://{tier_id}", "A membership tier by id"),
            template("offer", "offer://{offer_id}", "A promotional offer by id"),
            template(
                "newsletter",
                "newsletter://{newsletter_id}",
                "An email newsletter by id",
            ),
            template("post", "post://{post_id}", "A blog post by id"),
            template(
                "blog-info",
                "blog-info://{blog_id}",
                "Site metadata (title, URL, version)",
            ),
        ]
    }

    /// Read one resource by URI.
    pub async fn read(&self, uri: &str) -> Result<ReadResourceResult, ErrorData> {
        let (scheme, id) = split_uri(uri)?;

        let text = match scheme {
            "user" => self.fetch::<User>(Entity::Users, id).await?,
            "member" => self.fetch::<Member>(Entity::Members, id).await?,
            "tier" => self.fetch::<Tier>(Entity::Tiers, id).await?,
            "offer" => self.fetch::<Offer>(Entity::Offers, id).await?,
            "newsletter" => self.fetch::<Newsletter>(Entity::Newsletters, id).await?,
            "post" => self.fetch::<Post>(Entity::Posts, id).await?,
            "blog-info" => {
                let site = self
                    .client
                    .read_site()
                    .await
                    .map_err(|e| e.to_mcp_error())?;
                pretty(&site)?
            }
            other => {
                return Err(ErrorData::resource_not_found(
                    format!("unknown resource scheme '{other}'"),
                    None,
                ))
            }
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: Some("application/json".to_string()),
                text,
                meta: None,
            }],
        })
    }

    async fn fetch<T>(&self, entity: Entity, id: &str) -> Result<String, ErrorData>
    where
        T: DeserializeOwned + Serialize,
    {
        let raw = self
            .client
            .read(entity, &Lookup::Id(id.to_string()), &QueryPairs::new())
            .await
            .map_err(|e| e.to_mcp_error())?;
        let typed: T = serde_json::from_value(raw)
            .map_err(|e| ErrorData::internal_error(format!("unexpected entity shape: {e}"), None))?;
        serde_json::to_string_pretty(&typed)
            .map_err(|e| ErrorData::internal_error(e.to_string(), None))
    }
}

fn template(name: &str, uri_template: &str, description: &str) -> ResourceTemplate {
    RawResourceTemplate {
        uri_template: uri_template.to_string(),
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        mime_type: Some("application/json".to_string()),
    }
    .no_annotation()
}

/// Split `scheme://{id}` and reject an empty id segment.
fn split_uri(uri: &str) -> Result<(&str, &str), ErrorData> {
    let (scheme, rest) = uri
        .split_once("://")
        .ok_or_else(|| ErrorData::invalid_params(format!("malformed resource URI '{uri}'"), None))?;
    let id = rest.trim_matches('/');
    if id.is_empty() {
        return Err(ErrorData::invalid_params(
            format!("resource URI '{uri}' is missing an id segment"),
            None,
        ));
    }
    Ok((scheme, id))
}

fn pretty(value: &Value) -> Result<String, ErrorData> {
    serde_json::to_string_pretty(value).map_err(|e| ErrorData::internal_error(e.to_string(), None))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ghost_mcp_core::ConfigHolder;

    fn router() -> ResourceRouter {
        let client = GhostClient::new(ConfigHolder::new()).unwrap();
        ResourceRouter::new(Arc::new(client))
    }

    #[test]
    fn test_templates_cover_all_schemes() {
        let templates = router().templates();
        let uris: Vec<&str> = templates
            .iter()
            .map(|t| t.raw.uri_template.as_str())
            .collect();
        assert_eq!(templates.len(), 7);
        assert!(uris.contains(&"post://{post_id}"));
        assert!(uris.contains(&"blog-info://{blog_id}"));
    }

    #[test]
    fn test_split_uri() {
        assert_eq!(split_uri("post://abc123").unwrap(), ("post", "abc123"));
        assert_eq!(split_uri("member://m1/").unwrap(), ("member", "m1"));
    }

    #[test]
    fn test_split_uri_missing_id() {
        let err = split_uri("post://").unwrap_err();
        assert!(err.message.contains("missing an id"));
    }

    #[test]
    fn test_split_uri_malformed() {
        let err = split_uri("not-a-uri").unwrap_err();
        assert!(err.message.contains("malformed"));
    }

    #[tokio::test]
    async fn test_unknown_scheme_is_not_found() {
        let err = router().read("settings://x").await.unwrap_err();
        assert!(err.message.contains("unknown resource scheme"));
    }

    #[tokio::test]
    async fn test_unconfigured_read_surfaces_protocol_error() {
        let err = router().read("post://abc").await.unwrap_err();
        assert!(err.message.contains("not configured"));
    }
}
