//! Status Badge - job status labels rendered as Bootstrap badges
//!
//! Maps a status label such as `Complete` or `Failed` to an HTML fragment
//! of the form `<span class="badge badge-<category>">{status}</span>` for
//! insertion into a results table. The CSS classes belong to the host theme.
//!
//! | Status | Category |
//! |--------|----------|
//! | `Complete` | `success` |
//! | `Failed` | `danger` |
//! | anything else | `primary` |
//!
//! Labels are embedded verbatim unless a [`StatusFormatter`] is configured
//! with [`EscapeMode::Html`].

pub mod category;
pub mod config;
pub mod error;
pub mod escape;
pub mod formatter;
pub mod pipeline;

pub use category::BadgeCategory;
pub use config::{load_config, FormatterConfig};
pub use error::{BadgeError, Result};
pub use escape::{escape_html, EscapeMode};
pub use formatter::{format_status, StatusFormatter};
pub use pipeline::{label_from_status_map, pipeline_status_label};
