//! Closed JSON value tree.

use indexmap::IndexMap;
use serde::Serialize;

/// A parsed JSON value.
///
/// Object entries keep insertion order until a canonicalization pass sorts
/// them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<JsonValue>),
    Object(IndexMap<String, JsonValue>),
}

impl JsonValue {
    /// Name of the value's type, as used in difference messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Compact single-line serialization.
    #[must_use]
    pub fn to_minified(&self) -> String {
        serde_json::Value::from(self).to_string()
    }

    /// Two-space indented serialization.
    #[must_use]
    pub fn to_pretty(&self) -> String {
        format!("{:#}", serde_json::Value::from(self))
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&JsonValue> for serde_json::Value {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(*b),
            JsonValue::Number(n) => Self::Number(n.clone()),
            JsonValue::String(s) => Self::String(s.clone()),
            JsonValue::Array(items) => Self::Array(items.iter().map(Self::from).collect()),
            JsonValue::Object(map) => Self::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), Self::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_preserves_key_order() {
        let raw: serde_json::Value =
            serde_json::from_str(r#"{"b":1,"a":[true,null,"x"]}"#).expect("valid json");
        let value = JsonValue::from(raw);

        match &value {
            JsonValue::Object(map) => {
                let keys: Vec<_> = map.keys().cloned().collect();
                assert_eq!(keys, vec!["b", "a"]);
            }
            other => panic!("expected object, got {other:?}"),
        }
        assert_eq!(value.to_minified(), r#"{"b":1,"a":[true,null,"x"]}"#);
    }

    #[test]
    fn test_pretty_uses_two_space_indent() {
        let raw: serde_json::Value = serde_json::from_str(r#"{"a":1}"#).expect("valid json");
        assert_eq!(JsonValue::from(raw).to_pretty(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(JsonValue::Null.type_name(), "null");
        assert_eq!(JsonValue::Array(Vec::new()).type_name(), "array");
        assert_eq!(JsonValue::Object(IndexMap::new()).type_name(), "object");
    }
}
