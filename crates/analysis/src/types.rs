//! Request/result contract shared by every operation.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Input to an operation: a single optional `text` field.
///
/// Deserialization is lenient. A `text` that is missing, `null`, or not a
/// JSON string becomes `None`; any other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRequest {
    #[serde(
        default,
        deserialize_with = "string_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,
}

impl OperationRequest {
    /// Request carrying `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Request with no usable text.
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Parses a raw request body.
    ///
    /// Never fails: a body that is not JSON, or JSON that is not an object,
    /// produces a request with absent text.
    ///
    /// ```rust
    /// use analysis::OperationRequest;
    ///
    /// assert_eq!(OperationRequest::from_json_slice(br#"{"text":"hi"}"#).text(), Some("hi"));
    /// assert_eq!(OperationRequest::from_json_slice(br#"{"text":42}"#).text(), None);
    /// assert_eq!(OperationRequest::from_json_slice(b"not json").text(), None);
    /// ```
    pub fn from_json_slice(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(fields)) => Self {
                text: fields
                    .get("text")
                    .and_then(Value::as_str)
                    .map(str::to_owned),
            },
            _ => Self::default(),
        }
    }
}

impl From<&str> for OperationRequest {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<Option<String>> for OperationRequest {
    fn from(text: Option<String>) -> Self {
        Self { text }
    }
}

fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

/// Value produced by an operation.
///
/// Serializes untagged, so a count is a JSON integer, entropy a number,
/// a palindrome check a boolean and normalized text a string or `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OperationValue {
    Count(usize),
    Entropy(f64),
    Flag(bool),
    Text(Option<String>),
}

/// Output of an operation: `{key, value, cache_hit}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationResult {
    /// Constant identifying the operation that produced `value`.
    pub key: &'static str,
    pub value: OperationValue,
    /// Always `false` here. Reserved for a caching layer in front of the
    /// core.
    pub cache_hit: bool,
}

impl OperationResult {
    pub fn new(key: &'static str, value: OperationValue) -> Self {
        Self {
            key,
            value,
            cache_hit: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lenient_text_field() {
        let cases = [
            (json!({"text": "hello"}), Some("hello")),
            (json!({"text": ""}), Some("")),
            (json!({"text": null}), None),
            (json!({"text": 17}), None),
            (json!({"text": ["a", "b"]}), None),
            (json!({"text": {"nested": "x"}}), None),
            (json!({}), None),
            (json!({"other": "field"}), None),
        ];
        for (body, expected) in cases {
            let request: OperationRequest =
                serde_json::from_value(body.clone()).expect("lenient deserialize");
            assert_eq!(request.text(), expected, "body {body}");
        }
    }

    #[test]
    fn from_json_slice_never_fails() {
        let bodies: [&[u8]; 7] = [
            b"",
            b"{",
            b"null",
            b"[\"text\"]",
            b"\"text\"",
            b"42",
            b"\xff\xfe",
        ];
        for body in bodies {
            assert_eq!(OperationRequest::from_json_slice(body), OperationRequest::absent());
        }
    }

    #[test]
    fn from_json_slice_ignores_extra_fields() {
        let request = OperationRequest::from_json_slice(
            br#"{"text": "abc", "deps": {"normalized": "xyz"}}"#,
        );
        assert_eq!(request.text(), Some("abc"));
    }

    #[test]
    fn result_serialization_shape() {
        let cases = [
            (OperationValue::Count(4), json!(4)),
            (OperationValue::Entropy(1.585), json!(1.585)),
            (OperationValue::Entropy(0.0), json!(0.0)),
            (OperationValue::Flag(true), json!(true)),
            (OperationValue::Text(Some("hi".into())), json!("hi")),
            (OperationValue::Text(None), json!(null)),
        ];
        for (value, expected) in cases {
            let result = OperationResult::new("k", value);
            assert_eq!(
                serde_json::to_value(&result).expect("serialize"),
                json!({"key": "k", "value": expected, "cache_hit": false})
            );
        }
    }
}
