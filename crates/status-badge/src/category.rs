//! Badge categories

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BadgeError;

/// Styling bucket for a badge, named after the Bootstrap 4 contextual classes.
///
/// The default status table only uses `Success`, `Danger` and `Primary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Success,
    Danger,
    #[default]
    Primary,
    Secondary,
    Warning,
    Info,
    Light,
    Dark,
}

impl BadgeCategory {
    pub const ALL: [BadgeCategory; 8] = [
        BadgeCategory::Success,
        BadgeCategory::Danger,
        BadgeCategory::Primary,
        BadgeCategory::Secondary,
        BadgeCategory::Warning,
        BadgeCategory::Info,
        BadgeCategory::Light,
        BadgeCategory::Dark,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeCategory::Success => "success",
            BadgeCategory::Danger => "danger",
            BadgeCategory::Primary => "primary",
            BadgeCategory::Secondary => "secondary",
            BadgeCategory::Warning => "warning",
            BadgeCategory::Info => "info",
            BadgeCategory::Light => "light",
            BadgeCategory::Dark => "dark",
        }
    }

    /// CSS modifier class, e.g. `badge-success`
    pub fn css_class(&self) -> String {
        format!("badge-{}", self.as_str())
    }
}

impl fmt::Display for BadgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BadgeCategory {
    type Err = BadgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BadgeCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| BadgeError::UnknownCategory(s.to_string()))
    }
}
