use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub mod categories;
pub mod orders;
pub mod products;
pub mod tracking;
pub mod webhooks;

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn count(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Accepts a JSON string or number and yields its text; anything else is `None`.
///
/// Partner payloads send identifiers and references either way.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(scalar_text))
}

/// Element-wise [`string_or_number`]; other element types are dropped.
pub(crate) fn string_or_number_list<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(values.map(|values| values.into_iter().filter_map(scalar_text).collect()))
}

/// A quantity sent as a number or a numeric string.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(count))
}

/// Per-product quantities; entries that are not counts are dropped.
pub(crate) fn lenient_counts<'de, D>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, u32>>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?;
    Ok(map.map(|map| {
        map.into_iter()
            .filter_map(|(product_id, value)| Some((product_id, count(&value)?)))
            .collect()
    }))
}
