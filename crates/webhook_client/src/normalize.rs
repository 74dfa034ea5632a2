//! Normalization of the heterogeneous webhook response shapes.
//!
//! The automation endpoints reply with an array of items, a bare object,
//! or a scalar. All of them collapse to plain text here.

use serde_json::Value;

/// Object fields that may carry the reply text, in priority order.
const TEXT_FIELDS: [&str; 5] = ["output", "text", "message", "response", "content"];

/// Collapse a parsed response body into reply text.
pub fn response_text(body: &Value) -> String {
    let value = match body {
        Value::Array(items) => match items.first() {
            Some(first) => first,
            None => return String::new(),
        },
        other => other,
    };

    match value {
        Value::Object(map) => {
            for field in TEXT_FIELDS {
                if let Some(text) = map.get(field) {
                    return scalar_text(text);
                }
            }
            // Generic object without a known text field: hand back its JSON.
            value.to_string()
        }
        scalar => scalar_text(scalar),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
