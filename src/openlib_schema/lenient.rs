//! Field deserializers that never reject a payload. Open Library and Wikipedia responses are
//! loosely typed, so a field that is missing, `null` or of the wrong type is read as absent.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Reads any value, keeping it only when it converts to `T`.
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Reads a list, dropping the elements that do not convert to `T`. Anything but an array is an
/// empty list.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Like [optional] for struct targets. Derived struct deserializers also take an array in field
/// order, so only a JSON object is read.
pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(from_object(value))
}

/// Like [list] for struct elements, dropping every element that is not a JSON object.
pub fn objects<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.into_iter().filter_map(from_object).collect(),
        _ => Vec::new(),
    })
}

fn from_object<T: DeserializeOwned>(value: Value) -> Option<T> {
    match value {
        Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    }
}

/// Like [optional] for integers, but also accepts whole floats (`1965.0`).
pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "super::optional")]
        name:  Option<String>,
        #[serde(default, deserialize_with = "super::list")]
        tags:  Vec<String>,
        #[serde(default, deserialize_with = "super::integer")]
        count: Option<i64>,
    }

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Pair {
        #[serde(default, deserialize_with = "super::optional")]
        left:  Option<String>,
        #[serde(default, deserialize_with = "super::optional")]
        right: Option<String>,
    }

    #[derive(Debug, Default, Deserialize)]
    struct Nested {
        #[serde(default, deserialize_with = "super::object")]
        pair:  Option<Pair>,
        #[serde(default, deserialize_with = "super::objects")]
        pairs: Vec<Pair>,
    }

    #[test]
    fn wrong_types_read_as_absent() {
        let sample: Sample =
            serde_json::from_value(json!({"name": 7, "tags": "x", "count": "3"})).unwrap();
        assert_eq!(sample.name, None);
        assert!(sample.tags.is_empty());
        assert_eq!(sample.count, None);
    }

    #[test]
    fn nulls_and_missing_fields_read_as_absent() {
        let sample: Sample = serde_json::from_value(json!({"name": null})).unwrap();
        assert_eq!(sample.name, None);
        assert!(sample.tags.is_empty());
        assert_eq!(sample.count, None);
    }

    #[test]
    fn list_keeps_only_matching_elements() {
        let sample: Sample =
            serde_json::from_value(json!({"tags": ["a", 1, null, "b"], "count": 12.0})).unwrap();
        assert_eq!(sample.tags, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(sample.count, Some(12));
    }

    #[test]
    fn struct_targets_take_objects_only() {
        let nested: Nested = serde_json::from_value(json!({
            "pair": ["a", "b"],
            "pairs": [["a", "b"], {"left": "l"}, "x", null]
        }))
        .unwrap();
        assert_eq!(nested.pair, None);
        assert_eq!(
            nested.pairs,
            vec![Pair {
                left:  Some("l".into()),
                right: None,
            }]
        );

        let nested: Nested =
            serde_json::from_value(json!({"pair": {"right": "r"}, "pairs": {"left": "l"}}))
                .unwrap();
        assert_eq!(nested.pair.and_then(|p| p.right).as_deref(), Some("r"));
        assert!(nested.pairs.is_empty());
    }
}
