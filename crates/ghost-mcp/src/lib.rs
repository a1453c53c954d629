//! MCP server for the Ghost Admin API.
//!
//! Exposes the Ghost content-management platform's administrative API as
//! MCP tools, resources, and prompts. Each Admin API entity (posts,
//! members, tiers, offers, newsletters, tags, users, invites, roles,
//! webhooks) maps onto a small registry of browse/read/add/edit/delete
//! tools; addressable resources (`post://{post_id}`, ...) read single
//! entities by id.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        ghost-mcp                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ToolRegistry trait — tool registration and dispatch        │
//! │  CompositeRegistry — one registry per Admin API entity      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  GhostMcpServer — implements rmcp::ServerHandler            │
//! │  resources — user:// member:// ... blog-info:// readers     │
//! │  prompts — summarize_post                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  McpErrorExt — ghost_mcp_client::Error → rmcp::ErrorData    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  tools::* — posts, members, users, tags, tiers, offers,     │
//! │             newsletters, invites, roles, webhooks, debug    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use ghost_mcp::GhostMcpServer;
//! use rmcp::{transport::stdio, ServiceExt};
//!
//! let client = Arc::new(GhostClient::new(holder)?);
//! let service = GhostMcpServer::new(client).serve(stdio()).await?;
//! service.waiting().await?;
//! ```

pub mod error;
pub mod prompts;
pub mod registry;
pub mod resources;
pub mod server;
pub mod tools;

// Re-export of the protocol model for downstream tool implementations.
pub use rmcp::model;

// Re-exports — registry
pub use registry::{CompositeRegistry, ToolRegistry, ToolResult};

// Re-exports — server
pub use server::{build_registry, GhostMcpServer};

// Re-exports — error
pub use error::{Error, McpErrorExt, Result};
