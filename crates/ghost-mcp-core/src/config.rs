//! Configuration for the Ghost MCP server.
//!
//! Provides [`GhostConfig`], which loads from a TOML file and `GHOST_*`
//! environment variables using the `confyg` crate, and [`ConfigHolder`],
//! the shared read-mostly holder every adapter consults before building
//! a request.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `GHOST_MCP_CONFIG` environment variable
//! 3. Environment variables (`GHOST_API_URL`, `GHOST_ADMIN_API_KEY`, ...)
//! 4. Built-in defaults

use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::error::{Error, Result};

/// API version sent as `Accept-Version` when none is configured.
pub const DEFAULT_API_VERSION: &str = "v6.0";

// ============================================================================
// GhostConfig
// ============================================================================

/// Connection settings for a Ghost installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostConfig {
    /// Base URL of the Ghost site, e.g. `https://blog.example.com`.
    pub api_url: String,

    /// Admin API key in `<id>:<hexSecret>` form.
    pub admin_api_key: String,

    /// Optional Content API key for public read access.
    pub content_api_key: Option<String>,

    /// Ghost API version string, sent as `Accept-Version`.
    pub api_version: String,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            admin_api_key: String::new(),
            content_api_key: None,
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }
}

impl GhostConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// Loading priority:
    /// 1. Explicit `config_path` (from `--config` flag)
    /// 2. `GHOST_MCP_CONFIG` env var
    /// 3. `GHOST_*` environment variables
    /// 4. Built-in defaults
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let env_opts = env::Options::with_top_level("GHOST");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag or env var.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("GHOST_MCP_CONFIG") {
            return Some(PathBuf::from(path));
        }

        None
    }

    /// Check that the required connection settings are present.
    ///
    /// In standalone mode a failure here is fatal at startup; embedded
    /// callers may instead initialize the holder later.
    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(Error::config("GHOST_API_URL is required"));
        }
        if self.admin_api_key.trim().is_empty() {
            return Err(Error::config("GHOST_ADMIN_API_KEY is required"));
        }
        Ok(())
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}

// ============================================================================
// ConfigHolder
// ============================================================================

/// Shared holder for the active [`GhostConfig`].
///
/// Set once at startup (or replaced wholesale on reconfiguration) and
/// read by every adapter invocation. Cheap to clone; clones observe the
/// same configuration. Tests get isolation by constructing their own
/// holder per test.
#[derive(Clone, Default)]
pub struct ConfigHolder {
    inner: Arc<RwLock<Option<Arc<GhostConfig>>>>,
}

impl ConfigHolder {
    /// Create an empty holder. Adapters invoked against it fail fast
    /// with [`Error::NotConfigured`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a holder already carrying a configuration.
    pub fn with_config(config: GhostConfig) -> Self {
        let holder = Self::new();
        holder.initialize(config);
        holder
    }

    /// Store a configuration, replacing any prior one in full (no merge).
    pub fn initialize(&self, config: GhostConfig) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(Arc::new(config));
    }

    /// Snapshot of the current configuration, if initialized.
    pub fn current(&self) -> Option<Arc<GhostConfig>> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.clone()
    }

    /// Snapshot of the current configuration, or [`Error::NotConfigured`].
    pub fn require(&self) -> Result<Arc<GhostConfig>> {
        self.current().ok_or(Error::NotConfigured)
    }

    /// Whether a configuration has been initialized.
    pub fn is_configured(&self) -> bool {
        self.current().is_some()
    }
}

impl std::fmt::Debug for ConfigHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigHolder")
            .field("configured", &self.is_configured())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> GhostConfig {
        GhostConfig {
            api_url: "https://blog.example.com".to_string(),
            admin_api_key: "abc123:deadbeef".to_string(),
            content_api_key: None,
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    #[test]
    fn test_default_api_version() {
        let config = GhostConfig::default();
        assert_eq!(config.api_version, "v6.0");
    }

    #[test]
    fn test_validate_missing_url() {
        let config = GhostConfig {
            admin_api_key: "abc:def0".to_string(),
            ..GhostConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("GHOST_API_URL"));
    }

    #[test]
    fn test_validate_missing_admin_key() {
        let config = GhostConfig {
            api_url: "https://blog.example.com".to_string(),
            ..GhostConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("GHOST_ADMIN_API_KEY"));
    }

    #[test]
    fn test_validate_complete_config() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let config = GhostConfig {
            api_url: "https://blog.example.com/".to_string(),
            ..sample_config()
        };
        assert_eq!(config.base_url(), "https://blog.example.com");
    }

    #[test]
    fn test_holder_starts_empty() {
        let holder = ConfigHolder::new();
        assert!(!holder.is_configured());
        assert!(holder.current().is_none());
        assert!(matches!(holder.require(), Err(Error::NotConfigured)));
    }

    #[test]
    fn test_holder_initialize_and_read() {
        let holder = ConfigHolder::new();
        holder.initialize(sample_config());
        let snapshot = holder.require().unwrap();
        assert_eq!(snapshot.api_url, "https://blog.example.com");
    }

    #[test]
    fn test_holder_reinitialize_replaces_wholesale() {
        let holder = ConfigHolder::with_config(sample_config());
        holder.initialize(GhostConfig {
            api_url: "https://other.example.com".to_string(),
            admin_api_key: "xyz:cafe".to_string(),
            content_api_key: Some("content".to_string()),
            api_version: "v5.0".to_string(),
        });

        let snapshot = holder.require().unwrap();
        assert_eq!(snapshot.api_url, "https://other.example.com");
        assert_eq!(snapshot.api_version, "v5.0");
    }

    #[test]
    fn test_holder_clones_share_state() {
        let holder = ConfigHolder::new();
        let clone = holder.clone();
        holder.initialize(sample_config());
        assert!(clone.is_configured());
    }

    #[test]
    fn test_resolve_config_path_explicit_wins() {
        let path = GhostConfig::resolve_config_path(Some("/tmp/ghost.toml"));
        assert_eq!(path, Some(PathBuf::from("/tmp/ghost.toml")));
    }

    #[test]
    fn test_load_from_toml_file() {
        use std::io::Write;

        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "api_url = \"https://blog.example.com\"\nadmin_api_key = \"abc123:deadbeef\""
        )
        .unwrap();

        let config = GhostConfig::load(Some(&file.path().to_string_lossy())).unwrap();
        assert_eq!(config.api_url, "https://blog.example.com");
        assert_eq!(config.admin_api_key, "abc123:deadbeef");
        assert_eq!(config.api_version, "v6.0");
    }
}
