//! HTML escaping for badge labels

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// How a status label is embedded into the badge markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapeMode {
    /// Embed the label verbatim. Callers must supply trusted labels.
    #[default]
    None,
    /// Escape HTML metacharacters in the label.
    Html,
}

impl EscapeMode {
    pub fn apply<'a>(&self, label: &'a str) -> Cow<'a, str> {
        match self {
            EscapeMode::None => Cow::Borrowed(label),
            EscapeMode::Html => escape_html(label),
        }
    }
}

/// Escape `&`, `<`, `>`, `"` and `'`, borrowing when there is nothing to escape
pub fn escape_html(input: &str) -> Cow<'_, str> {
    let Some(first) = input.find(['&', '<', '>', '"', '\'']) else {
        return Cow::Borrowed(input);
    };

    let mut escaped = String::with_capacity(input.len() + 8);
    escaped.push_str(&input[..first]);
    for c in input[first..].chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
