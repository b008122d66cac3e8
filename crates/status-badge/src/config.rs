//! Configuration for the status formatter

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::BadgeCategory;
use crate::escape::EscapeMode;

/// Status table and fallback used to build a [`crate::StatusFormatter`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterConfig {
    #[serde(default = "default_statuses")]
    pub statuses: BTreeMap<String, BadgeCategory>,
    #[serde(default)]
    pub default_category: BadgeCategory,
    #[serde(default)]
    pub escape: EscapeMode,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            statuses: default_statuses(),
            default_category: BadgeCategory::default(),
            escape: EscapeMode::default(),
        }
    }
}

pub(crate) fn default_statuses() -> BTreeMap<String, BadgeCategory> {
    BTreeMap::from([
        ("Complete".to_string(), BadgeCategory::Success),
        ("Failed".to_string(), BadgeCategory::Danger),
    ])
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<FormatterConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::BadgeError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: FormatterConfig = serde_json::from_str(&content)?;
    tracing::debug!(
        "Loaded badge config from {:?}: {} statuses, default {}, escape {:?}",
        path,
        config.statuses.len(),
        config.default_category,
        config.escape
    );
    Ok(config)
}
