//! Catalogue of Ghost Admin API entities and lookup paths.
//!
//! Each entity knows its URL path segment, the plural field used by the
//! bulk-envelope convention, and the singular label used in delete
//! confirmations. Path segment and plural happen to coincide for every
//! entity Ghost exposes today, but the two accessors stay separate
//! because they serve different contracts (URL vs. body).

use std::fmt;

/// An Admin API entity (resource collection).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Entity {
    /// Blog posts.
    Posts,
    /// Audience members.
    Members,
    /// Staff users.
    Users,
    /// Post tags.
    Tags,
    /// Membership tiers.
    Tiers,
    /// Promotional offers.
    Offers,
    /// Email newsletters.
    Newsletters,
    /// Staff invites.
    Invites,
    /// Staff roles.
    Roles,
    /// Outbound webhooks.
    Webhooks,
}

impl Entity {
    /// URL path segment under `/ghost/api/admin/`.
    pub fn path(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Members => "members",
            Self::Users => "users",
            Self::Tags => "tags",
            Self::Tiers => "tiers",
            Self::Offers => "offers",
            Self::Newsletters => "newsletters",
            Self::Invites => "invites",
            Self::Roles => "roles",
            Self::Webhooks => "webhooks",
        }
    }

    /// Plural field name in request/response envelopes.
    pub fn plural(self) -> &'static str {
        self.path()
    }

    /// Singular display label, e.g. for delete confirmations.
    pub fn label(self) -> &'static str {
        match self {
            Self::Posts => "Post",
            Self::Members => "Member",
            Self::Users => "User",
            Self::Tags => "Tag",
            Self::Tiers => "Tier",
            Self::Offers => "Offer",
            Self::Newsletters => "Newsletter",
            Self::Invites => "Invite",
            Self::Roles => "Role",
            Self::Webhooks => "Webhook",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// How to address a single entity in a read path.
///
/// An id maps to a bare `{id}` segment; every alternate key maps to a
/// named segment (`slug/{slug}`, `email/{email}`, ...), the uniform
/// convention the Admin API uses for alternate lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// Canonical object id.
    Id(String),
    /// Slug (posts, tags, tiers, newsletters, users).
    Slug(String),
    /// Email address (members, users).
    Email(String),
    /// Offer code.
    Code(String),
    /// Role name.
    Name(String),
}

impl Lookup {
    /// Path segment(s) appended to the entity collection path.
    pub fn segment(&self) -> String {
        match self {
            Self::Id(id) => id.clone(),
            Self::Slug(slug) => format!("slug/{slug}"),
            Self::Email(email) => format!("email/{email}"),
            Self::Code(code) => format!("code/{code}"),
            Self::Name(name) => format!("name/{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_paths() {
        assert_eq!(Entity::Posts.path(), "posts");
        assert_eq!(Entity::Newsletters.path(), "newsletters");
        assert_eq!(Entity::Posts.to_string(), "posts");
    }

    #[test]
    fn test_entity_labels() {
        assert_eq!(Entity::Posts.label(), "Post");
        assert_eq!(Entity::Members.label(), "Member");
        assert_eq!(Entity::Webhooks.label(), "Webhook");
    }

    #[test]
    fn test_lookup_segments() {
        assert_eq!(Lookup::Id("64fabc".into()).segment(), "64fabc");
        assert_eq!(Lookup::Slug("welcome".into()).segment(), "slug/welcome");
        assert_eq!(
            Lookup::Email("a@b.com".into()).segment(),
            "email/a@b.com"
        );
        assert_eq!(Lookup::Code("black-friday".into()).segment(), "code/black-friday");
        assert_eq!(Lookup::Name("Editor".into()).segment(), "name/Editor");
    }
}
