//! Ghost Admin API client — the authenticated adapter layer.
//!
//! Every tool exposed by the MCP server funnels through [`GhostClient`]:
//! the call is authenticated with a freshly minted admin token, dispatched
//! as a single HTTP round trip, and the bulk-envelope response
//! (`{ "<plural>": [ ... ] }`) is unwrapped into the caller's shape.
//! Failures never escape as panics; they normalize into a
//! `(status, body)` pair with a fixed fallback order.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     ghost-mcp-client                       │
//! ├────────────────────────────────────────────────────────────┤
//! │  Entity — catalogue of Admin API resources                 │
//! │  Lookup — id / slug / email / code / name path segments    │
//! ├────────────────────────────────────────────────────────────┤
//! │  GhostClient — browse / read / create / update / remove    │
//! │  (one outbound request per call, no retries, no caching)   │
//! ├────────────────────────────────────────────────────────────┤
//! │  Error::failure_parts — deterministic (status, body)       │
//! └────────────────────────────────────────────────────────────┘
//! ```

pub mod client;
pub mod entity;
pub mod error;
pub mod models;

// Re-exports — client
pub use client::{GhostClient, PingReport, QueryPairs};

// Re-exports — entity catalogue
pub use entity::{Entity, Lookup};

// Re-exports — error
pub use error::{Error, Result};
