//! Description template rendering.
//!
//! Templates carry `{{key}}` tokens that are substituted from the entry's
//! details payload. Missing keys render as the empty string so a partially
//! filled payload still produces a usable audit line.

use serde_json::{Map, Value};

/// Renders a template against a payload.
///
/// Every `{{key}}` token is replaced with the payload value under `key`:
/// strings render verbatim, numbers and booleans via their display form,
/// null and absent keys as the empty string. Text outside tokens, including
/// unpaired braces, is passed through untouched.
#[must_use]
pub fn render(template: &str, payload: &Map<String, Value>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        match after_open.find("}}") {
            Some(end) => {
                let key = after_open[..end].trim();
                out.push_str(&render_value(payload.get(key)));
                rest = &after_open[end + 2..];
            }
            None => {
                // Unclosed token: emit the remainder verbatim.
                out.push_str(&rest[start..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

fn render_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) | None => String::new(),
        // Arrays and objects are not expected in templates; fall back to JSON.
        Some(other) => other.to_string(),
    }
}
