use std::future::Future;
use std::pin::Pin;

use idevgames_core::{Session, Snippet, SnippetFields, SnippetPage};

use crate::error::ClientError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Everything the front-end asks of the server.
///
/// [`crate::HttpClient`] is the real implementation; views hold an
/// `Arc<dyn SnippetApi>` so tests can drive them with stubs.
///
/// Methods return boxed futures for dyn compatibility.
pub trait SnippetApi: Send + Sync {
    /// One page of snippets in `taxonomy`. Hidden snippets are only
    /// returned to admins, regardless of `show_hidden`.
    fn list_snippets<'a>(
        &'a self,
        taxonomy: &'a str,
        page: u32,
        show_hidden: bool,
    ) -> BoxFuture<'a, Result<SnippetPage, ClientError>>;

    fn get_snippet(&self, id: i32) -> BoxFuture<'_, Result<Snippet, ClientError>>;

    fn create_snippet<'a>(
        &'a self,
        fields: &'a SnippetFields,
    ) -> BoxFuture<'a, Result<Snippet, ClientError>>;

    fn update_snippet<'a>(
        &'a self,
        id: i32,
        fields: &'a SnippetFields,
    ) -> BoxFuture<'a, Result<Snippet, ClientError>>;

    /// The identity behind the current session cookie, if any.
    fn get_session(&self) -> BoxFuture<'_, Result<Session, ClientError>>;

    /// Where to send the user to start the GitHub OAuth flow.
    fn get_github_authorization_url(&self) -> BoxFuture<'_, Result<String, ClientError>>;

    /// Exchange the code GitHub handed back for a session.
    fn get_github_callback<'a>(
        &'a self,
        code: &'a str,
    ) -> BoxFuture<'a, Result<Session, ClientError>>;

    fn delete_session(&self) -> BoxFuture<'_, Result<(), ClientError>>;
}
