//! Typed sketches of the Ghost Admin API entities.
//!
//! The adapter does not own these schemas — Ghost does — so each struct
//! pins down the fields this server actually relies on and carries the
//! rest in a flattened passthrough map. Deserializing through these
//! types validates the remote shape at the boundary without dropping
//! server-side fields on re-serialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A blog post.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    /// Object id.
    pub id: String,
    /// Post title.
    pub title: Option<String>,
    /// Publication status (`draft`, `published`, ...).
    pub status: Option<String>,
    /// Public URL.
    pub url: Option<String>,
    /// Rendered HTML content.
    pub html: Option<String>,
    /// Plaintext rendition.
    pub plaintext: Option<String>,
    /// Excerpt.
    pub excerpt: Option<String>,
    /// Last-modified timestamp; required by edits for optimistic
    /// concurrency.
    pub updated_at: Option<String>,
    /// Everything else Ghost sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A staff user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    /// Object id.
    pub id: String,
    /// Display name.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// URL slug.
    pub slug: Option<String>,
    /// Assigned roles.
    pub roles: Option<Vec<Value>>,
    /// Everything else Ghost sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An audience member.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Member {
    /// Object id.
    pub id: String,
    /// Email address.
    pub email: Option<String>,
    /// Membership status (`free`, `paid`, ...).
    pub status: Option<String>,
    /// Attached labels.
    pub labels: Option<Vec<Value>>,
    /// Newsletter subscriptions.
    pub newsletters: Option<Vec<Value>>,
    /// Paid subscriptions.
    pub subscriptions: Option<Vec<Value>>,
    /// Everything else Ghost sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A membership tier.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tier {
    /// Object id.
    pub id: String,
    /// Tier name.
    pub name: Option<String>,
    /// Monthly price in the smallest currency unit.
    pub monthly_price: Option<Value>,
    /// Yearly price in the smallest currency unit.
    pub yearly_price: Option<Value>,
    /// Benefit lines.
    pub benefits: Option<Vec<String>>,
    /// Everything else Ghost sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A promotional offer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Offer {
    /// Object id.
    pub id: String,
    /// Offer name.
    pub name: Option<String>,
    /// Redemption code.
    pub code: Option<String>,
    /// Billing cadence (`month` or `year`).
    pub cadence: Option<String>,
    /// Discount amount.
    pub amount: Option<f64>,
    /// The tier the offer applies to.
    pub tier: Option<Value>,
    /// Everything else Ghost sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An email newsletter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Newsletter {
    /// Object id.
    pub id: String,
    /// Newsletter name.
    pub name: Option<String>,
    /// Sender display name.
    pub sender_name: Option<String>,
    /// Sender address.
    pub sender_email: Option<String>,
    /// Reply-to setting.
    pub sender_reply_to: Option<String>,
    /// Everything else Ghost sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_roundtrip_preserves_unknown_fields() {
        let raw = json!({
            "id": "abc",
            "title": "Hello",
            "status": "published",
            "feature_image": "https://cdn.example.com/x.png",
            "visibility": "public"
        });

        let post: Post = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(post.id, "abc");
        assert_eq!(post.title.as_deref(), Some("Hello"));
        assert_eq!(post.extra["visibility"], "public");

        let back = serde_json::to_value(&post).unwrap();
        assert_eq!(back["feature_image"], raw["feature_image"]);
    }

    #[test]
    fn test_member_tolerates_missing_optionals() {
        let member: Member = serde_json::from_value(json!({ "id": "m1" })).unwrap();
        assert_eq!(member.id, "m1");
        assert!(member.email.is_none());
        assert!(member.labels.is_none());
    }

    #[test]
    fn test_missing_id_is_a_boundary_error() {
        let result: Result<Post, _> = serde_json::from_value(json!({ "title": "No id" }));
        assert!(result.is_err());
    }
}
