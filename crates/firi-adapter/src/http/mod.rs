/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses as schema-agnostic JSON values
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod history;
pub mod public;
pub mod trade;
pub mod wallet;

pub use client::{ClientConfig, FiriClient};
pub use error::{FiriError, Result};
