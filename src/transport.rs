//! The transport seam: where compiled requests leave the crate.

use async_trait::async_trait;
use bytes::Bytes;

use crate::request::ConcreteRequest;

/// What a transport hands back after executing a request.
///
/// Plain data. This crate never constructs one and never looks inside;
/// decoding the body into the type tagged on the request belongs to the
/// call site.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,

    /// Response headers in arrival order.
    pub headers: Vec<(String, String)>,

    /// Raw body bytes.
    pub body: Bytes,
}

impl RawResponse {
    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// External collaborator that executes compiled requests.
///
/// The crate defines the seam but ships no implementation: anything that can
/// turn a [`ConcreteRequest`] into a [`RawResponse`] qualifies, whether a
/// reqwest-backed client or a canned fixture in tests. Implementors own
/// every networking concern (connections, retries, timeouts); none of that
/// leaks back into request construction.
///
/// # Associated Types
/// - `Error`: transport-specific failure type
///
/// # Example
/// ```rust,ignore
/// struct ClientTransport {
///     client: reqwest::Client,
/// }
///
/// #[async_trait]
/// impl Transport for ClientTransport {
///     type Error = ApiError;
///
///     async fn send<T: Send>(
///         &self,
///         request: ConcreteRequest<T>,
///     ) -> Result<RawResponse, Self::Error> {
///         let response = self.client.execute(request.into_reqwest()?).await?;
///         // ... collect status, headers and body into a RawResponse
///     }
/// }
/// ```
#[async_trait]
pub trait Transport {
    /// Transport-specific failure type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Execute `request` and hand back the raw response.
    ///
    /// The response tag `T` rides along so implementors can thread it
    /// through to a decoding step; the transport itself has no reason to
    /// constrain it beyond `Send`.
    async fn send<T: Send>(
        &self,
        request: ConcreteRequest<T>,
    ) -> Result<RawResponse, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::Method;
    use crate::spec::RequestSpec;
    use serde::Deserialize;

    /// Answers every request with a canned JSON body.
    struct FixtureTransport {
        body: &'static str,
    }

    #[async_trait]
    impl Transport for FixtureTransport {
        type Error = std::convert::Infallible;

        async fn send<T: Send>(
            &self,
            _request: ConcreteRequest<T>,
        ) -> Result<RawResponse, Self::Error> {
            Ok(RawResponse {
                status: 200,
                headers: vec![(
                    "content-type".to_string(),
                    "application/json".to_string(),
                )],
                body: Bytes::from_static(self.body.as_bytes()),
            })
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Article {
        title: String,
    }

    #[tokio::test]
    async fn compiled_request_round_trips_through_a_transport() {
        let transport = FixtureTransport {
            body: r#"{"title":"Hello"}"#,
        };

        let request = RequestSpec::<Article>::get("/articles/1")
            .compile("https://api.example.com/v1")
            .unwrap();
        assert_eq!(request.method, Method::Get);

        let response = transport.send(request).await.unwrap();
        assert!(response.is_success());

        let article: Article = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(
            article,
            Article {
                title: "Hello".to_string()
            }
        );
    }

    #[test]
    fn success_covers_exactly_the_2xx_range() {
        let response = |status| RawResponse {
            status,
            headers: Vec::new(),
            body: Bytes::new(),
        };
        assert!(!response(199).is_success());
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(response(299).is_success());
        assert!(!response(300).is_success());
        assert!(!response(404).is_success());
        assert!(!response(500).is_success());
    }
}
