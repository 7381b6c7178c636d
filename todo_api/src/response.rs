//! Normalized response bodies.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Error;

/// Fallback when an error body carries no usable message.
pub const DEFAULT_ERROR_MESSAGE: &str = "API request failed";

/// What a request resolved to after reading the body once.
///
/// A non-empty body that is not valid JSON is kept as raw text rather than
/// treated as an error.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    Empty,
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Parses response text: empty stays empty, JSON is decoded, anything
    /// else is returned verbatim.
    pub fn parse(text: String) -> Self {
        if text.is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Decodes the body into `T`. An empty body decodes as JSON `null`, so
    /// `Option<T>` targets accept it.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, Error> {
        let value = match self {
            Self::Empty => Value::Null,
            Self::Json(value) => value,
            Self::Text(text) => {
                return Err(Error::Decode(format!(
                    "expected JSON, got text: {}",
                    truncate_body(&text)
                )))
            }
        };
        serde_json::from_value(value).map_err(|e| Error::Decode(e.to_string()))
    }

    /// The `message` field of a JSON object body, or the raw text body.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Json(value) => value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            Self::Text(text) => Some(text.clone()),
            Self::Empty => None,
        }
    }

    /// Picks the raw error message from a failed response: the first truthy
    /// of `err`, `error`, `message`, else [`DEFAULT_ERROR_MESSAGE`].
    pub fn error_message(&self) -> String {
        let Self::Json(value) = self else {
            return DEFAULT_ERROR_MESSAGE.to_string();
        };
        ["err", "error", "message"]
            .iter()
            .filter_map(|key| value.get(key))
            .find(|field| is_truthy(field))
            .map(|field| match field {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parse_empty() {
        assert_eq!(ResponseBody::parse(String::new()), ResponseBody::Empty);
    }

    #[test]
    fn parse_json_and_primitives() {
        assert_eq!(
            ResponseBody::parse(r#"{"a":[1,2]}"#.to_string()),
            ResponseBody::Json(json!({"a": [1, 2]}))
        );
        assert_eq!(
            ResponseBody::parse("42".to_string()),
            ResponseBody::Json(json!(42))
        );
        assert_eq!(
            ResponseBody::parse(r#""hi""#.to_string()),
            ResponseBody::Json(json!("hi"))
        );
    }

    #[test]
    fn parse_falls_back_to_text() {
        assert_eq!(
            ResponseBody::parse("Internal Server Error".to_string()),
            ResponseBody::Text("Internal Server Error".to_string())
        );
    }

    #[test]
    fn error_message_field_order() {
        let body = ResponseBody::Json(json!({"message": "m", "error": "e", "err": "x"}));
        assert_eq!(body.error_message(), "x");
        let body = ResponseBody::Json(json!({"message": "m", "error": "e"}));
        assert_eq!(body.error_message(), "e");
        let body = ResponseBody::Json(json!({"message": "m"}));
        assert_eq!(body.error_message(), "m");
    }

    #[test]
    fn error_message_skips_falsy_fields() {
        let body = ResponseBody::Json(json!({"err": "", "error": null, "message": "m"}));
        assert_eq!(body.error_message(), "m");
        let body = ResponseBody::Json(json!({"err": false, "error": 0}));
        assert_eq!(body.error_message(), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn error_message_renders_non_string_values() {
        let body = ResponseBody::Json(json!({"error": {"code": 7}}));
        assert_eq!(body.error_message(), r#"{"code":7}"#);
    }

    #[test]
    fn error_message_defaults_for_text_and_empty() {
        assert_eq!(
            ResponseBody::Text("oops".to_string()).error_message(),
            DEFAULT_ERROR_MESSAGE
        );
        assert_eq!(ResponseBody::Empty.error_message(), DEFAULT_ERROR_MESSAGE);
        assert_eq!(
            ResponseBody::Json(json!(["a"])).error_message(),
            DEFAULT_ERROR_MESSAGE
        );
    }

    #[test]
    fn decode_empty_as_option() {
        let decoded: Option<Vec<i32>> = ResponseBody::Empty.decode().unwrap();
        assert!(decoded.is_none());
    }

    #[test]
    fn decode_text_is_error() {
        let err = ResponseBody::Text("nope".to_string())
            .decode::<Vec<i32>>()
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn truncate_long_body() {
        let body = "a".repeat(2500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert_eq!(out.len(), 2000 + "...[truncated]".len());
    }
}
