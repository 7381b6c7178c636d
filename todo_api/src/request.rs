//! Per-call request descriptor consumed by [`Client::execute`](crate::Client::execute).

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::Error;

/// Method, path, optional JSON body and extra headers for a single call.
///
/// Built fresh for every request and never persisted.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    /// Path appended verbatim to the client's base URL, e.g. `/api/todos`.
    pub path: String,
    pub body: Option<Value>,
    /// Caller headers. Applied after the default `Content-Type`, so they can
    /// override it.
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Serializes `body` to JSON and attaches it.
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, Error> {
        self.body = Some(serde_json::to_value(body).map_err(Error::Encode)?);
        Ok(self)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Renders the body as sent on the wire. Field order follows the
    /// serialized struct.
    pub fn body_string(&self) -> Option<String> {
        self.body.as_ref().map(Value::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Payload<'a> {
        title: &'a str,
        description: &'a str,
        deadline: &'a str,
    }

    #[test]
    fn json_body_keeps_field_order() {
        let req = ApiRequest::post("/api/todos")
            .with_json(&Payload {
                title: "Buy milk",
                description: "",
                deadline: "2025-01-01",
            })
            .unwrap();
        insta::assert_snapshot!(
            req.body_string().unwrap(),
            @r#"{"title":"Buy milk","description":"","deadline":"2025-01-01"}"#
        );
    }

    #[test]
    fn headers_accumulate_in_order() {
        let req = ApiRequest::get("/api/todos")
            .with_header("X-One", "1")
            .with_header("Content-Type", "text/plain");
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.headers.len(), 2);
        assert_eq!(req.headers[1].0, "Content-Type");
        assert!(req.body.is_none());
        assert!(req.body_string().is_none());
    }
}
