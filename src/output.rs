//! Output formatting and control utilities.
//!
//! CHANGELOG:
//! - 10/16/2026 - Char-safe truncation, field filtering for nested results
//! - 10/14/2026 - Initial implementation

use serde::Serialize;
use serde_json::{json, Value};

/// Output control settings from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct OutputControls {
    pub json: bool,
    pub compact: bool,
    pub fields: Option<String>,
    pub max_text_chars: Option<u32>,
}

impl OutputControls {
    /// Render data as JSON according to output controls.
    pub fn emit<T: Serialize>(&self, data: &T) -> String {
        let value = serde_json::to_value(data).unwrap_or(Value::Null);

        let filtered = match self.fields {
            Some(ref fields) => filter_fields(&value, &parse_fields(fields)),
            None => value,
        };

        let truncated = match self.max_text_chars {
            Some(max_chars) => truncate_text_fields(&filtered, max_chars as usize),
            None => filtered,
        };

        let rendered = if self.compact {
            serde_json::to_string(&truncated)
        } else {
            serde_json::to_string_pretty(&truncated)
        };
        rendered.unwrap_or_else(|_| "{}".to_string())
    }

    /// Print data to stdout according to output controls.
    pub fn print<T: Serialize>(&self, data: &T) {
        println!("{}", self.emit(data));
    }
}

fn parse_fields(fields: &str) -> Vec<&str> {
    fields
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect()
}

/// Keep only the listed keys of every object (arrays are filtered element-wise).
fn filter_fields(value: &Value, fields: &[&str]) -> Value {
    match value {
        Value::Array(arr) => Value::Array(arr.iter().map(|v| filter_fields(v, fields)).collect()),
        Value::Object(map) => {
            let filtered = fields
                .iter()
                .filter_map(|field| map.get(*field).map(|v| (field.to_string(), v.clone())))
                .collect();
            Value::Object(filtered)
        }
        _ => value.clone(),
    }
}

/// Truncate string fields to `max_chars` characters.
fn truncate_text_fields(value: &Value, max_chars: usize) -> Value {
    match value {
        Value::String(s) if s.chars().count() > max_chars => {
            let head: String = s.chars().take(max_chars).collect();
            Value::String(format!("{}...", head))
        }
        Value::Array(arr) => {
            Value::Array(arr.iter().map(|v| truncate_text_fields(v, max_chars)).collect())
        }
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), truncate_text_fields(v, max_chars)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// Format error as JSON.
pub fn format_error(error: &str) -> String {
    json!({
        "error": error,
        "success": false
    })
    .to_string()
}
