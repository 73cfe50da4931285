//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (TODO: implement)
//! 3. Config file (TODO: implement file reading)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    pub orm: Option<String>,
    pub database: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                orm: Some("typeorm".into()),
                database: Some("postgres".into()),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// The `config_file` parameter is the path the user passed via `--config`
    /// (or `None` to use the default location).  File reading is not yet
    /// implemented; this always returns the built-in defaults.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let _config_file = config_file;
        // TODO: read from TOML file, merge env vars, merge CLI overrides.
        Ok(Self::default())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.hexnest.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "hexnest", "hexnest")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".hexnest.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_orm_is_typeorm() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.orm.as_deref(), Some("typeorm"));
    }

    #[test]
    fn default_database_is_postgres() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.database.as_deref(), Some("postgres"));
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let cfg = AppConfig::load(None).unwrap();
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
