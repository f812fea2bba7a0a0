//! JSON parsing into [`JsonValue`].

use crate::error::ParseErrorKind;
use crate::model::JsonValue;

/// Parse JSON text into a value tree, keeping object key order.
pub fn parse_json(content: &str) -> Result<JsonValue, ParseErrorKind> {
    if content.trim().is_empty() {
        return Err(ParseErrorKind::EmptyDocument);
    }

    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| ParseErrorKind::InvalidJson(e.to_string()))?;
    Ok(JsonValue::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_key_order() {
        let value = parse_json(r#"{"b": 1, "a": [true, null, "x"]}"#).expect("valid json");
        let JsonValue::Object(map) = value else {
            panic!("expected object");
        };
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(
            map["a"],
            JsonValue::Array(vec![
                JsonValue::Bool(true),
                JsonValue::Null,
                JsonValue::String("x".to_string())
            ])
        );
    }

    #[test]
    fn test_parse_scalars() {
        assert_eq!(parse_json("null"), Ok(JsonValue::Null));
        assert_eq!(parse_json(" \"s\" "), Ok(JsonValue::String("s".to_string())));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            parse_json("{\"a\": }"),
            Err(ParseErrorKind::InvalidJson(_))
        ));
        assert!(matches!(parse_json("{"), Err(ParseErrorKind::InvalidJson(_))));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(parse_json("  \n"), Err(ParseErrorKind::EmptyDocument));
    }
}
