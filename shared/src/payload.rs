//! Normalization of the availability webhook payload.
//!
//! The webhook is fronted by a workflow tool that sometimes returns the record
//! list directly, sometimes wraps it in `{"data": [...]}`, and sometimes
//! serializes the whole thing into a (possibly HTML-escaped) JSON string.
//! [`normalize_payload`] peels those layers until it reaches the record list.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde_json::Value;

use crate::error::{CalendarError, CalendarResult};

static TEXTAREA: Lazy<Selector> = Lazy::new(|| Selector::parse("textarea").unwrap());

/// Reduce a decoded payload to the raw record list.
///
/// Unknown shapes yield an empty list; only a string that fails to parse as
/// JSON, both as-is and after entity decoding, is an error.
pub fn normalize_payload(payload: Value) -> CalendarResult<Vec<Value>> {
    match payload {
        Value::Array(records) => Ok(records),
        Value::String(text) => normalize_text(&text),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(records)) => Ok(records),
            _ => Ok(Vec::new()),
        },
        _ => Ok(Vec::new()),
    }
}

/// Normalize a response body that was not declared as JSON.
pub fn normalize_text(text: &str) -> CalendarResult<Vec<Value>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if let Ok(parsed) = serde_json::from_str::<Value>(trimmed) {
        if let Ok(records) = normalize_payload(parsed) {
            return Ok(records);
        }
    }

    let decoded = decode_html_entities(trimmed);
    let parsed: Value =
        serde_json::from_str(&decoded).map_err(|_| CalendarError::PayloadFormat)?;
    normalize_payload(parsed).map_err(|_| CalendarError::PayloadFormat)
}

/// Decode HTML character references the way a `<textarea>` would.
///
/// Markup is not interpreted: the value is tokenized as RCDATA, so only
/// entities such as `&quot;` or `&#39;` change. Every `<` is re-escaped
/// first so a literal `</textarea>` cannot end the element early.
pub fn decode_html_entities(value: &str) -> String {
    let escaped = value.replace('<', "&lt;");
    let fragment = Html::parse_fragment(&format!("<textarea>{escaped}</textarea>"));
    fragment
        .select(&TEXTAREA)
        .next()
        .map(|textarea| textarea.text().collect())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_and_empty_payloads() {
        assert!(normalize_payload(Value::Null).unwrap().is_empty());
        assert!(normalize_payload(json!("")).unwrap().is_empty());
        assert!(normalize_payload(json!("   ")).unwrap().is_empty());
        assert!(normalize_payload(json!(false)).unwrap().is_empty());
    }

    #[test]
    fn test_array_is_returned_unchanged() {
        let records = json!([{"data": "2025-03-10", "n_volontari": 2}, {"x": 1}]);
        let once = normalize_payload(records.clone()).unwrap();
        assert_eq!(Value::Array(once.clone()), records);

        let twice = normalize_payload(Value::Array(once.clone())).unwrap();
        assert_eq!(twice, once);
    }

    #[test]
    fn test_object_with_data_array() {
        let payload = json!({"data": [{"data": "2025-03-10"}], "count": 1});
        let records = normalize_payload(payload).unwrap();
        assert_eq!(records, vec![json!({"data": "2025-03-10"})]);
    }

    #[test]
    fn test_unknown_shapes_are_empty() {
        assert!(normalize_payload(json!({"data": "nope"})).unwrap().is_empty());
        assert!(normalize_payload(json!({"rows": []})).unwrap().is_empty());
        assert!(normalize_payload(json!(42)).unwrap().is_empty());
    }

    #[test]
    fn test_string_empty_array() {
        assert!(normalize_payload(json!("[]")).unwrap().is_empty());
    }

    #[test]
    fn test_string_wrapped_object() {
        let payload = json!(r#" {"data":[{"data":"2025-04-01"}]} "#);
        let records = normalize_payload(payload).unwrap();
        assert_eq!(records, vec![json!({"data": "2025-04-01"})]);
    }

    #[test]
    fn test_html_escaped_string() {
        let payload = json!("[{&quot;data&quot;:&quot;2025-03-10&quot;,&quot;volontario_1&quot;:&quot;Anna &amp; Luca&quot;}]");
        let records = normalize_payload(payload).unwrap();
        assert_eq!(
            records,
            vec![json!({"data": "2025-03-10", "volontario_1": "Anna & Luca"})]
        );
    }

    #[test]
    fn test_doubly_encoded_string() {
        let inner = serde_json::to_string(&json!([{"data": "2025-05-02"}])).unwrap();
        let outer = serde_json::to_string(&Value::String(inner)).unwrap();
        let records = normalize_payload(Value::String(outer)).unwrap();
        assert_eq!(records, vec![json!({"data": "2025-05-02"})]);
    }

    #[test]
    fn test_malformed_string_is_an_error() {
        let err = normalize_payload(json!("<html>oops</html>")).unwrap_err();
        assert_eq!(err, CalendarError::PayloadFormat);
    }

    #[test]
    fn test_decode_html_entities() {
        assert_eq!(decode_html_entities("&lt;b&gt; &quot;x&quot;"), "<b> \"x\"");
        assert_eq!(decode_html_entities("&#39;a&#x27;"), "'a'");
        assert_eq!(decode_html_entities("plain"), "plain");
    }

    #[test]
    fn test_decode_keeps_literal_closing_textarea() {
        assert_eq!(
            decode_html_entities("[&quot;a</textarea>b&quot;]"),
            "[\"a</textarea>b\"]"
        );
        assert_eq!(decode_html_entities("1 < 2 &amp;&lt; 3"), "1 < 2 &< 3");
    }

    #[test]
    fn test_escaped_payload_with_closing_textarea_parses() {
        let payload = json!("[{&quot;data&quot;:&quot;2025-03-10&quot;,&quot;volontario_1&quot;:&quot;x</textarea>y&quot;}]");
        let records = normalize_payload(payload).unwrap();
        assert_eq!(
            records,
            vec![json!({"data": "2025-03-10", "volontario_1": "x</textarea>y"})]
        );
    }
}
