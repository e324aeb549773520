//! Declarative request descriptions.

use std::collections::HashMap;
use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;

use crate::compile::{compile, CompileError};
use crate::method::Method;
use crate::request::ConcreteRequest;

/// Content type assumed for serialized bodies unless the caller overrides it.
const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Declarative description of one HTTP call.
///
/// A `RequestSpec` is plain data: where the request goes (`path`), how it is
/// sent (`method`, `parameters`, `headers`) and what it carries (`body`).
/// Compiling it against a base URL produces a transport-ready
/// [`ConcreteRequest`]. A spec describes a single logical call; it is built,
/// compiled once, and discarded.
///
/// The type parameter `T` tags the response type the caller expects the
/// decoding side to produce. The crate never inspects it — the tag only
/// rides along into [`ConcreteRequest`] so the expected shape stays attached
/// to the request end to end.
///
/// Defaults: `method` is `GET`, `content_type` is `"application/json"`, and
/// `body`, `parameters` and `headers` start absent.
///
/// # Example
/// ```
/// use reqspec::{Method, RequestSpec};
///
/// let spec: RequestSpec = RequestSpec::get("/articles").with_param("page", "2");
/// assert_eq!(spec.path, "/articles");
/// assert_eq!(spec.method, Method::Get);
/// ```
#[derive(Debug, Clone)]
pub struct RequestSpec<T = ()> {
    /// Path appended verbatim to the base URL's path component.
    pub path: String,

    /// HTTP method, `GET` unless overridden.
    pub method: Method,

    /// Content type attached alongside a serialized body.
    pub content_type: String,

    /// Structured JSON body, serialized to bytes at compile time.
    pub body: Option<Value>,

    /// Ordered query pairs; order and duplicates are preserved on the wire.
    pub parameters: Option<Vec<(String, String)>>,

    /// Headers copied verbatim into the compiled request.
    pub headers: Option<HashMap<String, String>>,

    /// Tags the response type the decoding side should produce.
    pub response: PhantomData<T>,
}

impl<T> RequestSpec<T> {
    /// New spec for `path` with every default in place.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::default(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            body: None,
            parameters: None,
            headers: None,
            response: PhantomData,
        }
    }

    /// `GET` spec for `path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(path)
    }

    /// `POST` spec for `path`.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(path).with_method(Method::Post)
    }

    /// `PUT` spec for `path`.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(path).with_method(Method::Put)
    }

    /// `DELETE` spec for `path`.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(path).with_method(Method::Delete)
    }

    /// Set the HTTP method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Override the content type attached alongside a serialized body.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Set the structured JSON body directly.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize `body` into the JSON body value.
    ///
    /// Fails with [`CompileError::BodySerialization`] when the payload has no
    /// JSON representation, for example a map with non-string keys.
    pub fn json<B: Serialize>(self, body: &B) -> Result<Self, CompileError> {
        let value = serde_json::to_value(body)?;
        Ok(self.with_body(value))
    }

    /// Append one query pair; call order becomes wire order.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    /// Replace the query pairs wholesale, keeping the iterator's order.
    pub fn with_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters = Some(
            params
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Add one header, replacing any previous value for the same key.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Compile this spec against `base_url`.
    ///
    /// Method form of [`compile`]; consumes the spec, matching its
    /// single-use lifecycle.
    pub fn compile(self, base_url: &str) -> Result<ConcreteRequest<T>, CompileError> {
        compile(self, base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_fills_documented_defaults() {
        let spec: RequestSpec = RequestSpec::new("/articles");
        assert_eq!(spec.path, "/articles");
        assert_eq!(spec.method, Method::Get);
        assert_eq!(spec.content_type, "application/json");
        assert!(spec.body.is_none());
        assert!(spec.parameters.is_none());
        assert!(spec.headers.is_none());
    }

    #[test]
    fn convenience_constructors_set_methods() {
        assert_eq!(RequestSpec::<()>::get("/a").method, Method::Get);
        assert_eq!(RequestSpec::<()>::post("/a").method, Method::Post);
        assert_eq!(RequestSpec::<()>::put("/a").method, Method::Put);
        assert_eq!(RequestSpec::<()>::delete("/a").method, Method::Delete);
    }

    #[test]
    fn params_accumulate_in_call_order() {
        let spec: RequestSpec = RequestSpec::get("/a")
            .with_param("b", "1")
            .with_param("a", "2")
            .with_param("b", "3");
        assert_eq!(
            spec.parameters.unwrap(),
            vec![
                ("b".to_string(), "1".to_string()),
                ("a".to_string(), "2".to_string()),
                ("b".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn with_params_replaces_previous_pairs() {
        let spec: RequestSpec = RequestSpec::get("/a")
            .with_param("old", "1")
            .with_params([("page", "2"), ("category", "sports")]);
        assert_eq!(
            spec.parameters.unwrap(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("category".to_string(), "sports".to_string()),
            ]
        );
    }

    #[test]
    fn with_header_overwrites_same_key() {
        let spec: RequestSpec = RequestSpec::get("/a")
            .with_header("X-Api-Key", "first")
            .with_header("X-Api-Key", "second");
        let headers = spec.headers.unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("X-Api-Key").map(String::as_str), Some("second"));
    }

    #[test]
    fn json_builder_stores_value() {
        #[derive(Serialize)]
        struct NewArticle {
            title: String,
        }

        let spec: RequestSpec = RequestSpec::post("/articles")
            .json(&NewArticle {
                title: "Hello".to_string(),
            })
            .unwrap();
        assert_eq!(spec.body.unwrap(), json!({ "title": "Hello" }));
    }

    #[test]
    fn json_builder_surfaces_unrepresentable_payloads() {
        let payload: HashMap<Vec<u8>, u32> = HashMap::from([(vec![1], 2)]);
        let err = RequestSpec::<()>::post("/x").json(&payload).unwrap_err();
        assert!(matches!(err, CompileError::BodySerialization(_)));
    }
}
