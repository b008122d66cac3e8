//! Status labels derived from a pipeline service status document
//!
//! The pipeline service reports which stages are running as a JSON object,
//! e.g. `{"update_ensembl": false, "process_mapping": true}`. The label for
//! the first running stage, in document order, is the stage name with
//! underscores replaced by spaces and capitalised (`Process mapping`).

use serde_json::{Map, Value};

use crate::error::{BadgeError, Result};

/// Parse a status document and return the label of the first running stage
pub fn pipeline_status_label(document: &str) -> Result<Option<String>> {
    let value: Value = serde_json::from_str(document)?;
    match value {
        Value::Object(stages) => Ok(label_from_status_map(&stages)),
        other => Err(BadgeError::StatusDocument(format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Label of the first stage whose flag is truthy, or `None` when idle
pub fn label_from_status_map(stages: &Map<String, Value>) -> Option<String> {
    let label = stages
        .iter()
        .find(|(_, running)| is_truthy(running))
        .map(|(stage, _)| stage_label(stage));

    if let Some(label) = &label {
        tracing::debug!("Pipeline busy: {}", label);
    }
    label
}

fn stage_label(stage: &str) -> String {
    let spaced = stage.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
