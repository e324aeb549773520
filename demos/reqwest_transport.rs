//! Execute a compiled request with a reqwest-backed transport.
//!
//! The library only builds request values; this demo supplies the two
//! collaborators it leaves to callers — a `Transport` implementation over
//! `reqwest::Client` and a decode step for the tagged response type — and
//! round-trips a request through httpbin.org, which echoes what it received.
//!
//! Run with:
//! ```bash
//! cargo run --example reqwest_transport
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use reqspec::{CompileError, ConcreteRequest, RawResponse, RequestSpec, Transport};

/// Errors a call site can hit between describing a request and decoding
/// its response.
#[derive(Error, Debug)]
enum ApiError {
    #[error("request could not be built: {0}")]
    Compile(#[from] CompileError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("server returned status {0}")]
    Status(u16),
}

/// Transport that executes compiled requests with a shared `reqwest::Client`.
struct ClientTransport {
    client: reqwest::Client,
}

#[async_trait]
impl Transport for ClientTransport {
    type Error = ApiError;

    async fn send<T: Send>(
        &self,
        request: ConcreteRequest<T>,
    ) -> Result<RawResponse, Self::Error> {
        let response = self.client.execute(request.into_reqwest()?).await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes().await?;
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Compile, send and decode one call.
///
/// The decoding collaborator lives here at the call site, driven by the
/// spec's response tag.
async fn fetch<T>(
    transport: &impl Transport<Error = ApiError>,
    spec: RequestSpec<T>,
    base_url: &str,
) -> Result<T, ApiError>
where
    T: DeserializeOwned + Send,
{
    let request = spec.compile(base_url)?;
    println!("{} {}", request.method, request.url);

    let response = transport.send(request).await?;
    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }

    Ok(serde_json::from_slice(&response.body)?)
}

#[derive(Serialize)]
struct NewArticle {
    title: String,
}

/// What httpbin.org/anything echoes back about the request it received.
#[derive(Debug, Deserialize)]
struct Echo {
    args: serde_json::Value,
    json: Option<serde_json::Value>,
    method: String,
    url: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let base_url =
        std::env::var("HTTPBIN_BASE_URL").unwrap_or_else(|_| "https://httpbin.org".to_string());

    let transport = ClientTransport {
        client: reqwest::Client::new(),
    };

    let spec: RequestSpec<Echo> = RequestSpec::post("/anything/articles")
        .with_param("page", "2")
        .with_header("X-Api-Key", "demo-key")
        .json(&NewArticle {
            title: "Hello".to_string(),
        })?;

    println!("Sending request to {}...", base_url);

    match fetch(&transport, spec, &base_url).await {
        Ok(echo) => {
            println!("\n=== Echoed request ===");
            println!("method: {}", echo.method);
            println!("url:    {}", echo.url);
            println!("args:   {}", echo.args);
            if let Some(json) = echo.json {
                println!("json:   {}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
