//! Compile declarative request descriptions into transport-ready values.
//!
//! Everything here is pure: no request is sent, only built.
//!
//! Run with:
//! ```bash
//! cargo run --example compile_basic
//! ```

use reqspec::{CompileError, RequestSpec};
use serde::Serialize;

#[derive(Serialize)]
struct NewArticle {
    title: String,
    tags: Vec<String>,
}

fn main() -> Result<(), CompileError> {
    tracing_subscriber::fmt().init();

    let base_url = "https://api.example.com/v1";

    // A plain GET with ordered query parameters.
    let listing = RequestSpec::<()>::get("/articles")
        .with_param("page", "2")
        .with_param("category", "sports")
        .compile(base_url)?;

    println!("=== GET with query parameters ===");
    println!("url:    {}", listing.url);
    println!("method: {}", listing.method);
    println!("body:   {:?}", listing.body);

    // A POST with a typed payload serialized through the json builder.
    let creation = RequestSpec::<()>::post("/articles")
        .with_header("X-Api-Key", "demo-key")
        .json(&NewArticle {
            title: "Hello".to_string(),
            tags: vec!["breaking".to_string(), "news".to_string()],
        })?
        .compile(base_url)?;

    println!("\n=== POST with JSON body ===");
    println!("url:    {}", creation.url);
    println!("method: {}", creation.method);
    if let Some(body) = &creation.body {
        println!("body:   {}", String::from_utf8_lossy(body));
    }
    for (key, value) in &creation.headers {
        println!("header: {}: {}", key, value);
    }

    // Failed compiles are plain error values; no request is ever half-built.
    println!("\n=== Error cases ===");
    for base in ["", "api.example.com", "mailto:newsroom@example.com"] {
        match RequestSpec::<()>::get("/articles").compile(base) {
            Ok(request) => println!("{:?} compiled to {}", base, request.url),
            Err(e) => println!("{:?} rejected: {}", base, e),
        }
    }

    Ok(())
}
