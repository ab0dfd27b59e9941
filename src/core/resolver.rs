use crate::domain::model::Record;
use serde_json::Value;

/// Upstream records expose the same fact under several alternative field
/// names. Returns the first candidate carrying a non-empty value, or the
/// caller-supplied default. Never fails.
pub fn resolve_field(record: &Record, candidates: &[&str], default: &str) -> String {
    candidates
        .iter()
        .find_map(|name| record.get(name).and_then(value_text))
        .unwrap_or_else(|| default.to_string())
}

/// Usable text for a field value. Strings are trimmed; blank strings count
/// as absent. Numbers print as-is (pin codes and phone numbers arrive as
/// either type).
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numeric coercion for weights and charge amounts: numbers pass through,
/// numeric strings parse, everything else is zero.
pub fn lenient_f64(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

pub fn lenient_i64(value: Option<&Value>, default: i64) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(default),
        _ => default,
    }
}
