//! Status label to badge markup

use std::collections::BTreeMap;

use crate::category::BadgeCategory;
use crate::config::{default_statuses, FormatterConfig};
use crate::escape::EscapeMode;

/// Render `status` as a badge using the built-in status table.
///
/// `Complete` renders as `success`, `Failed` as `danger`, anything else as
/// `primary`. Matching is exact and the label is embedded unescaped.
pub fn format_status(status: &str) -> String {
    let category = match status {
        "Complete" => BadgeCategory::Success,
        "Failed" => BadgeCategory::Danger,
        _ => BadgeCategory::Primary,
    };
    render(category, status)
}

fn render(category: BadgeCategory, label: &str) -> String {
    format!(
        r#"<span class="badge {}">{}</span>"#,
        category.css_class(),
        label
    )
}

/// Configurable status-to-badge mapping
///
/// Immutable once built, so a single instance can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFormatter {
    statuses: BTreeMap<String, BadgeCategory>,
    default_category: BadgeCategory,
    escape: EscapeMode,
}

impl Default for StatusFormatter {
    fn default() -> Self {
        Self {
            statuses: default_statuses(),
            default_category: BadgeCategory::default(),
            escape: EscapeMode::default(),
        }
    }
}

impl StatusFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &FormatterConfig) -> Self {
        tracing::debug!(
            "Building status formatter with {} statuses",
            config.statuses.len()
        );
        Self {
            statuses: config.statuses.clone(),
            default_category: config.default_category,
            escape: config.escape,
        }
    }

    /// Add or replace the category for an exact status label
    pub fn with_status(mut self, label: impl Into<String>, category: BadgeCategory) -> Self {
        self.statuses.insert(label.into(), category);
        self
    }

    pub fn with_default_category(mut self, category: BadgeCategory) -> Self {
        self.default_category = category;
        self
    }

    pub fn with_escape(mut self, escape: EscapeMode) -> Self {
        self.escape = escape;
        self
    }

    pub fn default_category(&self) -> BadgeCategory {
        self.default_category
    }

    pub fn escape(&self) -> EscapeMode {
        self.escape
    }

    pub fn category_for(&self, status: &str) -> BadgeCategory {
        self.statuses
            .get(status)
            .copied()
            .unwrap_or(self.default_category)
    }

    pub fn format(&self, status: &str) -> String {
        render(self.category_for(status), &self.escape.apply(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_is_success() {
        assert_eq!(
            format_status("Complete"),
            r#"<span class="badge badge-success">Complete</span>"#
        );
    }

    #[test]
    fn failed_is_danger() {
        assert_eq!(
            format_status("Failed"),
            r#"<span class="badge badge-danger">Failed</span>"#
        );
    }

    #[test]
    fn other_values_are_primary() {
        for status in ["Pending", "Running", "complete", "COMPLETE", " Complete", "Failed "] {
            assert_eq!(
                format_status(status),
                format!(r#"<span class="badge badge-primary">{}</span>"#, status)
            );
        }
    }

    #[test]
    fn empty_status_is_primary() {
        assert_eq!(
            format_status(""),
            r#"<span class="badge badge-primary"></span>"#
        );
    }

    #[test]
    fn label_is_not_escaped_by_default() {
        assert_eq!(
            format_status("<b>Queued</b>"),
            r#"<span class="badge badge-primary"><b>Queued</b></span>"#
        );
    }

    #[test]
    fn default_formatter_matches_free_function() {
        let formatter = StatusFormatter::new();
        for status in ["Complete", "Failed", "Pending", "", "failed"] {
            assert_eq!(formatter.format(status), format_status(status));
        }
    }

    #[test]
    fn with_status_extends_table() {
        let formatter = StatusFormatter::new().with_status("Running", BadgeCategory::Info);
        assert_eq!(formatter.category_for("Running"), BadgeCategory::Info);
        assert_eq!(formatter.category_for("Complete"), BadgeCategory::Success);
        assert_eq!(
            formatter.format("Running"),
            r#"<span class="badge badge-info">Running</span>"#
        );
    }

    #[test]
    fn with_status_replaces_entry() {
        let formatter = StatusFormatter::new().with_status("Failed", BadgeCategory::Warning);
        assert_eq!(formatter.category_for("Failed"), BadgeCategory::Warning);
    }

    #[test]
    fn default_category_applies_to_unknown() {
        let formatter = StatusFormatter::new().with_default_category(BadgeCategory::Secondary);
        assert_eq!(formatter.default_category(), BadgeCategory::Secondary);
        assert_eq!(
            formatter.format("Submitted"),
            r#"<span class="badge badge-secondary">Submitted</span>"#
        );
    }

    #[test]
    fn html_escape_mode_escapes_label_only() {
        let formatter = StatusFormatter::new().with_escape(EscapeMode::Html);
        assert_eq!(formatter.escape(), EscapeMode::Html);
        assert_eq!(
            formatter.format("<script>"),
            r#"<span class="badge badge-primary">&lt;script&gt;</span>"#
        );
        assert_eq!(
            formatter.format("Complete"),
            r#"<span class="badge badge-success">Complete</span>"#
        );
    }

    #[test]
    fn lookup_uses_raw_label_before_escaping() {
        let formatter = StatusFormatter::new()
            .with_status("A&B", BadgeCategory::Dark)
            .with_escape(EscapeMode::Html);
        assert_eq!(
            formatter.format("A&B"),
            r#"<span class="badge badge-dark">A&amp;B</span>"#
        );
    }

    #[test]
    fn from_config_copies_fields() {
        let config = FormatterConfig {
            statuses: BTreeMap::from([("Done".to_string(), BadgeCategory::Success)]),
            default_category: BadgeCategory::Light,
            escape: EscapeMode::Html,
        };
        let formatter = StatusFormatter::from_config(&config);
        assert_eq!(formatter.category_for("Done"), BadgeCategory::Success);
        assert_eq!(formatter.category_for("Complete"), BadgeCategory::Light);
        assert_eq!(formatter.escape(), EscapeMode::Html);
    }

    #[test]
    fn from_default_config_equals_default() {
        assert_eq!(
            StatusFormatter::from_config(&FormatterConfig::default()),
            StatusFormatter::default()
        );
    }

    #[test]
    fn formatter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StatusFormatter>();
    }
}
