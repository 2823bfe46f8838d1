//! Helpers for storing structured values in TEXT columns.

use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

/// Encodes a value as JSON for storage. Falls back to `"null"` when
/// serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

/// Decodes a JSON string, falling back to `T::default()` on malformed input.
pub fn from_json<T: for<'de> Deserialize<'de> + Default>(s: &str) -> T {
    serde_json::from_str(s).unwrap_or_default()
}

/// Decodes JSON out of a loosely typed row value. `NULL`, non-text values,
/// empty strings and malformed JSON all decode to `None`.
pub fn from_value<T: for<'de> Deserialize<'de>>(value: Option<&Value>) -> Option<T> {
    match value {
        Some(Value::Text(s)) if !s.is_empty() && s != "null" => serde_json::from_str(s).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_roundtrip() {
        let tags = vec!["a".to_string(), "b".to_string()];
        let encoded = to_json(&tags);
        assert_eq!(encoded, r#"["a","b"]"#);
        assert_eq!(from_json::<Vec<String>>(&encoded), tags);
    }

    #[test]
    fn test_malformed_json_falls_back_to_default() {
        let decoded: Vec<String> = from_json("not json");
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_from_value_handles_null_and_garbage() {
        let tags = Value::Text(r#"["a"]"#.to_string());
        assert_eq!(
            from_value::<Vec<String>>(Some(&tags)),
            Some(vec!["a".to_string()])
        );
        assert_eq!(from_value::<Vec<String>>(Some(&Value::Null)), None);
        assert_eq!(
            from_value::<Vec<String>>(Some(&Value::Text("null".to_string()))),
            None
        );
        assert_eq!(from_value::<Vec<String>>(None), None);
        assert_eq!(from_value::<Vec<String>>(Some(&Value::Integer(3))), None);
    }
}
