//! idevgames-core
//!
//! Pure domain types for the iDevGames front-end: snippets, the icon
//! catalog, session identity, pagination math, and route conventions.
//! No HTTP dependency, this is the shared vocabulary of the other crates.

pub mod error;
pub mod models;
pub mod pager;
pub mod routes;
pub mod wire_date;

pub use crate::error::CoreError;
pub use crate::models::icon::Icon;
pub use crate::models::page::SnippetPage;
pub use crate::models::session::{Permissions, Session, SessionIdentity};
pub use crate::models::snippet::{Snippet, SnippetFields};
pub use crate::pager::Pager;
