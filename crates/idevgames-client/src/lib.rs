//! idevgames-client
//!
//! Typed HTTP client for the iDevGames REST API. Thin, stateless
//! request/response mapping over JSON with a shared cookie jar for the
//! login session. No retries and no caching.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod wire;

pub use crate::api::{BoxFuture, SnippetApi};
pub use crate::config::{ClientConfig, Environment};
pub use crate::error::ClientError;
pub use crate::http::HttpClient;
pub use reqwest::Url;
