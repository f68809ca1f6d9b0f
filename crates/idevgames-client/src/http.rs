use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use idevgames_core::{Session, Snippet, SnippetFields, SnippetPage};

use crate::api::{BoxFuture, SnippetApi};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::wire::{
    Empty, ErrorBody, GithubAuthorizationUrlOutput, GithubCallbackQuery, ListSnippetsQuery,
    SnippetOutput,
};

/// A client which talks to the iDevGames server.
///
/// Every request carries the cookies in the shared jar, which is how the
/// server recognizes the logged-in user. Clones share the jar.
#[derive(Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    config: ClientConfig,
    cookies: Arc<Jar>,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        Self::with_cookies(config, Arc::new(Jar::default()))
    }

    pub fn with_cookies(config: ClientConfig, cookies: Arc<Jar>) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .cookie_provider(cookies.clone())
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            config,
            cookies,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The `Cookie` header the next request would send, for persisting the
    /// session between runs.
    pub fn cookie_header(&self) -> Option<String> {
        self.cookies
            .cookies(self.config.base_url())
            .and_then(|v| v.to_str().ok().map(str::to_string))
    }

    /// Seed the jar from a previously saved `Cookie` header.
    pub fn restore_cookies(&self, header: &str) {
        for pair in header.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            self.cookies.add_cookie_str(pair, self.config.base_url());
        }
    }

    pub async fn list_snippets(
        &self,
        taxonomy: &str,
        page: u32,
        show_hidden: bool,
    ) -> Result<SnippetPage, ClientError> {
        let query = ListSnippetsQuery {
            taxonomy: taxonomy.to_string(),
            page,
            show_hidden,
        };
        let req = self.request(Method::GET, "/snippets")?.query(&query);
        self.send(req, Method::GET, "/snippets").await
    }

    pub async fn get_snippet(&self, id: i32) -> Result<Snippet, ClientError> {
        let path = format!("/snippets/{id}");
        let req = self.request(Method::GET, &path)?;
        let output: SnippetOutput = self.send(req, Method::GET, &path).await?;
        Ok(output.snippet)
    }

    pub async fn create_snippet(&self, fields: &SnippetFields) -> Result<Snippet, ClientError> {
        let output: SnippetOutput = self.send_json(Method::POST, "/snippets", fields).await?;
        Ok(output.snippet)
    }

    pub async fn update_snippet(
        &self,
        id: i32,
        fields: &SnippetFields,
    ) -> Result<Snippet, ClientError> {
        let path = format!("/snippets/{id}");
        let output: SnippetOutput = self.send_json(Method::PUT, &path, fields).await?;
        Ok(output.snippet)
    }

    pub async fn get_session(&self) -> Result<Session, ClientError> {
        let req = self.request(Method::GET, "/session")?;
        self.send(req, Method::GET, "/session").await
    }

    pub async fn get_github_authorization_url(&self) -> Result<String, ClientError> {
        let path = "/session/github_authorization_url";
        let req = self.request(Method::GET, path)?;
        let output: GithubAuthorizationUrlOutput = self.send(req, Method::GET, path).await?;
        Ok(output.url)
    }

    pub async fn get_github_callback(&self, code: &str) -> Result<Session, ClientError> {
        let path = "/session/github_callback";
        let query = GithubCallbackQuery {
            code: code.to_string(),
        };
        let req = self.request(Method::GET, path)?.query(&query);
        self.send(req, Method::GET, path).await
    }

    pub async fn delete_session(&self) -> Result<(), ClientError> {
        let req = self.request(Method::DELETE, "/session")?;
        let _: Empty = self.send(req, Method::DELETE, "/session").await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        Ok(self.http.request(method, self.config.endpoint(path)?))
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let req = self.request(method.clone(), path)?.json(body);
        self.send(req, method, path).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        method: Method,
        path: &str,
    ) -> Result<T, ClientError> {
        debug!(method = %method, path, "api request");

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.error)
                .unwrap_or(text);
            debug!(method = %method, path, status = status.as_u16(), "api request failed");
            return Err(ClientError::Status {
                method: method.to_string(),
                path: path.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

impl SnippetApi for HttpClient {
    fn list_snippets<'a>(
        &'a self,
        taxonomy: &'a str,
        page: u32,
        show_hidden: bool,
    ) -> BoxFuture<'a, Result<SnippetPage, ClientError>> {
        Box::pin(HttpClient::list_snippets(self, taxonomy, page, show_hidden))
    }

    fn get_snippet(&self, id: i32) -> BoxFuture<'_, Result<Snippet, ClientError>> {
        Box::pin(HttpClient::get_snippet(self, id))
    }

    fn create_snippet<'a>(
        &'a self,
        fields: &'a SnippetFields,
    ) -> BoxFuture<'a, Result<Snippet, ClientError>> {
        Box::pin(HttpClient::create_snippet(self, fields))
    }

    fn update_snippet<'a>(
        &'a self,
        id: i32,
        fields: &'a SnippetFields,
    ) -> BoxFuture<'a, Result<Snippet, ClientError>> {
        Box::pin(HttpClient::update_snippet(self, id, fields))
    }

    fn get_session(&self) -> BoxFuture<'_, Result<Session, ClientError>> {
        Box::pin(HttpClient::get_session(self))
    }

    fn get_github_authorization_url(&self) -> BoxFuture<'_, Result<String, ClientError>> {
        Box::pin(HttpClient::get_github_authorization_url(self))
    }

    fn get_github_callback<'a>(
        &'a self,
        code: &'a str,
    ) -> BoxFuture<'a, Result<Session, ClientError>> {
        Box::pin(HttpClient::get_github_callback(self, code))
    }

    fn delete_session(&self) -> BoxFuture<'_, Result<(), ClientError>> {
        Box::pin(HttpClient::delete_session(self))
    }
}
