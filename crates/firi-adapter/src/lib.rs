/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Firi adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Thin async client for the [Firi](https://developers.firi.com/) exchange
//! REST API.
//!
//! Every endpoint method funnels through one request gateway that attaches
//! the `miraiex-access-key` header, paces consecutive requests, and
//! normalizes failures into [`FiriError`]. Responses are returned as
//! schema-agnostic [`serde_json::Value`]s, exactly as the API sent them.
//!
//! ```no_run
//! use firi_adapter::FiriClient;
//!
//! # async fn run() -> firi_adapter::Result<()> {
//! let client = FiriClient::new("my-api-token")?;
//! let balances = client.balances().await?;
//! println!("{balances}");
//! client.close();
//! # Ok(())
//! # }
//! ```

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    FiriClient,
    FiriError,
    Result,
};

// Re-export all types
pub use types::*;
