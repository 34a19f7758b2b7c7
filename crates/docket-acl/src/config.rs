//! Engine configuration.
//!
//! Both settings default to the behavior the dashboard has always had, so
//! an empty or missing config file changes nothing.

use docket_core::{Case, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Order in which a client's matching cases are considered when choosing
/// their active case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseOrder {
    /// Source collection order.
    #[default]
    Insertion,
    /// Ascending case id.
    CaseId,
    /// Oldest case first; ties broken by case id.
    CreatedAt,
}

impl CaseOrder {
    /// Reorders `cases` in place. The sort is stable.
    pub fn apply(&self, cases: &mut [&Case]) {
        match self {
            Self::Insertion => {}
            Self::CaseId => cases.sort_by(|a, b| a.id.cmp(&b.id)),
            Self::CreatedAt => cases.sort_by(|a, b| {
                a.created_at
                    .cmp(&b.created_at)
                    .then_with(|| a.id.cmp(&b.id))
            }),
        }
    }
}

/// Which tasks a client may see.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClientTaskScope {
    /// Client-visible tasks assigned to the client.
    #[default]
    Assigned,
    /// Client-visible tasks on any of the client's cases.
    Case,
}

/// Visibility rule settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Ordering used to pick a client's active case.
    pub case_order: CaseOrder,
    /// Client task rule.
    pub client_tasks: ClientTaskScope,
}

/// Top-level docket-acl configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AclConfig {
    /// Visibility rule settings.
    pub visibility: VisibilityConfig,
}

impl AclConfig {
    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::config(format!("Failed to parse ACL config: {e}")))
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded ACL config from {}", path.display());
        Ok(config)
    }

    /// Serializes the configuration to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
