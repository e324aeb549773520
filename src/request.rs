//! Transport-ready compiled requests.

use std::collections::HashMap;
use std::marker::PhantomData;

use bytes::Bytes;
use reqwest::header::{HeaderName, HeaderValue};
use url::Url;

use crate::compile::CompileError;
use crate::method::Method;

/// A compiled, transport-ready request.
///
/// Produced by [`compile`](crate::compile::compile) and immutable from then
/// on: the URL is absolute (base path + spec path + encoded query), the body
/// is already serialized to bytes, and the headers are exactly what the
/// compiler resolved. Hand it to a [`Transport`](crate::transport::Transport)
/// implementor, or convert it with [`into_reqwest`](Self::into_reqwest) when
/// the consumer is a `reqwest::Client`.
///
/// The type parameter `T` is the response tag carried over from the
/// [`RequestSpec`](crate::spec::RequestSpec) this value was compiled from;
/// it tells the decoding side what shape to produce and is never inspected
/// here.
#[derive(Debug, Clone)]
pub struct ConcreteRequest<T = ()> {
    /// Absolute request URL.
    pub url: Url,

    /// HTTP method token.
    pub method: Method,

    /// Serialized JSON body, absent when the spec carried none.
    pub body: Option<Bytes>,

    /// Resolved headers; empty when the spec carried none.
    pub headers: HashMap<String, String>,

    /// Response tag carried over from the spec.
    pub response: PhantomData<T>,
}

impl<T> ConcreteRequest<T> {
    /// Convert into an inert [`reqwest::Request`].
    ///
    /// The produced request performs no I/O until a `reqwest::Client`
    /// executes it. Fails with [`CompileError::InvalidHeader`] when a header
    /// pair cannot be represented as a typed header name and value.
    pub fn into_reqwest(self) -> Result<reqwest::Request, CompileError> {
        let mut request = reqwest::Request::new(self.method.into(), self.url);

        for (key, value) in self.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| CompileError::InvalidHeader { name: key.clone() })?;
            let value = HeaderValue::from_str(&value)
                .map_err(|_| CompileError::InvalidHeader { name: key })?;
            request.headers_mut().insert(name, value);
        }

        if let Some(body) = self.body {
            *request.body_mut() = Some(reqwest::Body::from(body));
        }

        Ok(request)
    }
}
