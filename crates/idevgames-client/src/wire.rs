//! Request and response bodies that only exist on the wire.
//!
//! Shapes shared with the rest of the front-end (`Snippet`, `SnippetPage`,
//! `Session`) live in `idevgames-core`.

use serde::{Deserialize, Serialize};

use idevgames_core::Snippet;

/// Query string of `GET /snippets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSnippetsQuery {
    pub taxonomy: String,
    pub page: u32,
    pub show_hidden: bool,
}

/// Body of `GET /snippets/:id`, `POST /snippets` and `PUT /snippets/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetOutput {
    pub snippet: Snippet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubAuthorizationUrlOutput {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubCallbackQuery {
    pub code: String,
}

/// `DELETE /session` answers with `{}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Empty {}

/// Error body the server may attach to non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
