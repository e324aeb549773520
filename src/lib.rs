//! # reqspec - Declarative HTTP Request Compiler
//!
//! A small, pragmatic Rust library that turns declarative HTTP request
//! descriptions into concrete, transport-ready request values.
//!
//! ## Features
//! - Pure request construction: no I/O, no retries, no response parsing
//! - Ordered query parameters with standard percent-encoding
//! - JSON bodies via `serde`, serialized once at compile time
//! - A typed response tag that rides from description to transport
//! - Conversion into an inert `reqwest::Request` for the common case
//!
//! ## Architecture
//!
//! The library is a single transformation with plain values on either side:
//!
//! 1. **Describe** the call as a [`RequestSpec`]: path, method, headers,
//!    body, query parameters.
//! 2. **Compile** it against a base URL into a [`ConcreteRequest`]: absolute
//!    URL, method token, serialized body bytes, resolved headers.
//!
//! Execution belongs to an external collaborator behind the [`Transport`]
//! trait, which takes a compiled request and returns a [`RawResponse`].
//! Decoding that response into the type tagged on the request happens at
//! the call site; nothing in this crate touches the network.
//!
//! ### Core Types
//!
//! - **`RequestSpec<T>`**: declarative description of one HTTP call
//! - **`ConcreteRequest<T>`**: the compiled, transport-ready value
//! - **`CompileError`**: every way the transformation can fail
//!
//! ## Example
//! ```
//! use reqspec::{Method, RequestSpec};
//!
//! fn main() -> Result<(), reqspec::CompileError> {
//!     let request = RequestSpec::<()>::get("/articles")
//!         .with_param("page", "2")
//!         .compile("https://api.example.com/v1")?;
//!
//!     assert_eq!(
//!         request.url.as_str(),
//!         "https://api.example.com/v1/articles?page=2"
//!     );
//!     assert_eq!(request.method, Method::Get);
//!     assert!(request.body.is_none());
//!     Ok(())
//! }
//! ```

pub mod compile;
pub mod method;
pub mod request;
pub mod spec;
pub mod transport;

// Re-exports for convenience
pub use compile::{compile, CompileError};
pub use method::Method;
pub use request::ConcreteRequest;
pub use spec::RequestSpec;
pub use transport::{RawResponse, Transport};
