//! The compiler: a [`RequestSpec`] plus a base URL in, a [`ConcreteRequest`] out.

use std::marker::PhantomData;

use bytes::Bytes;
use thiserror::Error;
use url::Url;

use crate::request::ConcreteRequest;
use crate::spec::RequestSpec;

/// Ways a compile can fail.
///
/// Every failure is returned to the immediate caller as a value; a failed
/// compile never yields a partially-built request and never panics.
#[derive(Error, Debug)]
pub enum CompileError {
    /// The base URL string could not be parsed.
    #[error("invalid base URL `{url}`: {source}")]
    InvalidBaseUrl { url: String, source: url::ParseError },

    /// The base URL parsed, but base + path + query do not form a valid
    /// request URL.
    #[error("invalid final URL for base `{url}`: {reason}")]
    InvalidFinalUrl { url: String, reason: &'static str },

    /// The body has no JSON representation.
    #[error("body serialization failed: {0}")]
    BodySerialization(#[from] serde_json::Error),

    /// A header could not be converted into a typed header pair.
    #[error("header `{name}` is not a valid HTTP header")]
    InvalidHeader { name: String },
}

/// Compile `spec` into a transport-ready request against `base_url`.
///
/// `base_url` must be an absolute URL (scheme and host, with an optional
/// path prefix). The spec's path is appended to the base path verbatim —
/// no slash normalization — and its parameters replace the query string in
/// the order given. A body is serialized to JSON bytes with the spec's
/// content type attached, unless the caller already set that header.
///
/// # Example
/// ```
/// use reqspec::RequestSpec;
///
/// let request = RequestSpec::<()>::get("/articles")
///     .with_param("page", "2")
///     .compile("https://api.example.com/v1")
///     .unwrap();
/// assert_eq!(
///     request.url.as_str(),
///     "https://api.example.com/v1/articles?page=2"
/// );
/// ```
pub fn compile<T>(
    spec: RequestSpec<T>,
    base_url: &str,
) -> Result<ConcreteRequest<T>, CompileError> {
    let mut url = Url::parse(base_url).map_err(|source| CompileError::InvalidBaseUrl {
        url: base_url.to_string(),
        source,
    })?;

    if url.cannot_be_a_base() {
        return Err(CompileError::InvalidFinalUrl {
            url: base_url.to_string(),
            reason: "base cannot be extended with a path",
        });
    }

    // A bare authority parses to the path "/"; treat that as empty so the
    // spec path lands directly after the host. Deeper base paths are kept
    // verbatim, duplicate slashes included.
    let base_path = match url.path() {
        "/" => "",
        path => path,
    };
    let path = format!("{base_path}{}", spec.path);
    if !path.is_empty() && !path.starts_with('/') && url.has_host() {
        return Err(CompileError::InvalidFinalUrl {
            url: base_url.to_string(),
            reason: "composed path is relative to a host",
        });
    }
    url.set_path(&path);

    // The compiled query is exactly the spec's parameters; a query carried
    // by the base URL never survives.
    url.set_query(None);
    if let Some(parameters) = spec.parameters {
        url.query_pairs_mut().extend_pairs(parameters);
    }

    let body = match spec.body {
        Some(value) => Some(Bytes::from(serde_json::to_vec(&value)?)),
        None => None,
    };

    let mut headers = spec.headers.unwrap_or_default();
    if body.is_some()
        && !headers
            .keys()
            .any(|key| key.eq_ignore_ascii_case("content-type"))
    {
        headers.insert("Content-Type".to_string(), spec.content_type);
    }

    tracing::trace!("compiled {} {}", spec.method, url);

    Ok(ConcreteRequest {
        url,
        method: spec.method,
        body,
        headers,
        response: PhantomData,
    })
}
