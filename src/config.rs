//! Tool configuration.
//!
//! A `docutree.toml` at the source root overrides stock defaults. The file
//! is optional and sparse — set only the keys you want. Unknown keys are
//! rejected to catch typos early. The file itself is excluded from
//! traversal, like `_category_.json`.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_base = "/docs"        # URL prefix for links in structure.md
//! fallback_language = "txt"  # fence tag for files without an extension
//! summary = "linked"         # "linked" | "compact"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Config file name, looked up in the source root.
pub const CONFIG_FILE_NAME: &str = "docutree.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// How `structure.md` renders each entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    /// Entries link to their generated page or index under `site_base`.
    Linked,
    /// Plain base names, no links.
    Compact,
}

/// Configuration loaded from `docutree.toml`.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsConfig {
    /// URL prefix for summary links (the docs route of the consuming site).
    pub site_base: String,
    /// Fence language tag for files without an extension.
    pub fallback_language: String,
    /// Summary rendering variant.
    pub summary: SummaryStyle,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            site_base: "/docs".to_string(),
            fallback_language: "txt".to_string(),
            summary: SummaryStyle::Linked,
        }
    }
}

impl DocsConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.site_base.starts_with('/') {
            return Err(ConfigError::Validation(
                "site_base must start with '/'".into(),
            ));
        }
        if self.site_base.len() > 1 && self.site_base.ends_with('/') {
            return Err(ConfigError::Validation(
                "site_base must not end with '/'".into(),
            ));
        }
        if self.fallback_language.is_empty() {
            return Err(ConfigError::Validation(
                "fallback_language must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Load config from `<root>/docutree.toml`, falling back to stock defaults
/// when the file is absent.
pub fn load_config(root: &Path) -> Result<DocsConfig, ConfigError> {
    let path = root.join(CONFIG_FILE_NAME);
    let config: DocsConfig = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        DocsConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `docutree.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docutree configuration
# ======================
# All settings are optional. Values shown below are the defaults.
# Place this file in the source root; it is skipped during conversion.
# Unknown keys will cause an error.

# URL prefix used for links in structure.md
site_base = "/docs"

# Fence language tag for files without an extension
fallback_language = "txt"

# How structure.md lists entries: "linked" or "compact"
summary = "linked"
"##
}
