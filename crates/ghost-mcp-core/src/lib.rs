//! Ghost MCP Core — configuration, errors, and admin token generation.
//!
//! This crate provides the foundational types used across the Ghost MCP
//! workspace. It has no internal dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: `GhostConfig` loading and the shared `ConfigHolder`
//! - [`token`]: short-lived admin JWT minting from a `<id>:<secret>` key

pub mod config;
pub mod error;
pub mod token;

// Re-export key types at crate root for convenience
pub use config::{ConfigHolder, GhostConfig, DEFAULT_API_VERSION};
pub use error::{Error, Result};
pub use token::{key_id, mint_admin_token, mint_admin_token_at, ADMIN_AUDIENCE, TOKEN_TTL_SECS};
