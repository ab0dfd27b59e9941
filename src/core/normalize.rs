use crate::core::resolver::{lenient_f64, lenient_i64, value_text};
use crate::domain::model::{Container, Item};
use serde_json::Value;

/// Normalizes the shipment's raw "boxes" field into a strictly ordered
/// container sequence. The field arrives as an ordered sequence, a keyed
/// mapping, or a JSON-encoded string of either; anything unrecognized
/// degrades to an empty sequence. This never fails: a shipment with no
/// parseable boxes still yields a valid (empty) document section.
pub fn containers(raw: Option<&Value>) -> Vec<Container> {
    coerce_sequence(raw)
        .iter()
        .enumerate()
        .map(|(i, value)| container_from(i + 1, value))
        .collect()
}

/// Resolves the sequence/mapping/encoded-text ambiguity once. Mapping
/// values are taken in enumeration order.
fn coerce_sequence(raw: Option<&Value>) -> Vec<Value> {
    match raw {
        Some(Value::Array(items)) => items.clone(),
        Some(Value::Object(map)) => map.values().cloned().collect(),
        Some(Value::String(text)) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => items,
            Ok(Value::Object(map)) => map.values().cloned().collect(),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn container_from(ordinal: usize, value: &Value) -> Container {
    // The same shape ambiguity applies one level down to "items".
    let items = coerce_sequence(value.get("items"))
        .iter()
        .map(item_from)
        .collect();

    Container {
        ordinal,
        weight: lenient_f64(value.get("weight")),
        items,
    }
}

fn item_from(value: &Value) -> Item {
    let name = value
        .get("name")
        .and_then(value_text)
        .unwrap_or_default();

    // Quantity shows up as "qty" on newer records, "piece_no" on older
    // ones; absent quantity means a single piece.
    let qty = match value.get("qty") {
        Some(v) if !v.is_null() => lenient_i64(Some(v), 1),
        _ => lenient_i64(value.get("piece_no"), 1),
    };

    Item {
        name,
        qty,
        weight: lenient_f64(value.get("weight")),
    }
}
