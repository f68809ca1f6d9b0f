//! The paginated snippet list.
//!
//! A view fetches one page whenever its parameters change by value. Each
//! fetch is stamped with a generation; a response is only applied if no
//! newer fetch was issued while it was in flight, so a slow response for
//! page 0 can never replace page 1. The state lock is never held across
//! the network call.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use idevgames_client::SnippetApi;
use idevgames_core::{Pager, SnippetPage};

/// What a list shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListParams {
    pub taxonomy: String,
    pub page: u32,
    pub show_hidden: bool,
}

impl ListParams {
    pub fn new(taxonomy: &str, page: u32, show_hidden: bool) -> Self {
        Self {
            taxonomy: taxonomy.to_string(),
            page,
            show_hidden,
        }
    }

    pub fn first_page(taxonomy: &str) -> Self {
        Self::new(taxonomy, 0, false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    /// Nothing has arrived yet.
    Loading,
    Loaded(SnippetPage),
    /// The latest fetch failed. `retry` issues it again.
    Failed(String),
}

/// Footer under the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFooter {
    Pager,
    /// A "More" link to the full listing, as on the homepage.
    MoreLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// Parameters were unchanged; nothing was fetched.
    Unchanged,
    /// A newer fetch was issued before this one resolved; its result was
    /// dropped.
    Superseded,
}

struct Inner {
    params: Option<ListParams>,
    generation: u64,
    state: ListState,
}

pub struct SnippetListView {
    api: Arc<dyn SnippetApi>,
    footer: ListFooter,
    inner: Mutex<Inner>,
}

impl SnippetListView {
    pub fn new(api: Arc<dyn SnippetApi>, footer: ListFooter) -> Self {
        Self {
            api,
            footer,
            inner: Mutex::new(Inner {
                params: None,
                generation: 0,
                state: ListState::Loading,
            }),
        }
    }

    pub fn footer(&self) -> ListFooter {
        self.footer
    }

    pub async fn state(&self) -> ListState {
        self.inner.lock().await.state.clone()
    }

    pub async fn params(&self) -> Option<ListParams> {
        self.inner.lock().await.params.clone()
    }

    /// The pager for the loaded page, when this list shows one.
    pub async fn pager(&self) -> Option<Pager> {
        if self.footer != ListFooter::Pager {
            return None;
        }
        match &self.inner.lock().await.state {
            ListState::Loaded(page) => Some(page.pager()),
            _ => None,
        }
    }

    /// Show `params`. Fetches only if they differ from the current ones.
    pub async fn set_params(&self, params: ListParams) -> FetchOutcome {
        let generation = {
            let mut inner = self.inner.lock().await;
            if inner.params.as_ref() == Some(&params) {
                return FetchOutcome::Unchanged;
            }
            inner.params = Some(params.clone());
            inner.generation += 1;
            inner.generation
        };
        self.fetch(params, generation).await
    }

    /// Move to another page of the same taxonomy.
    pub async fn go_to_page(&self, page: u32) -> FetchOutcome {
        let Some(mut params) = self.params().await else {
            return FetchOutcome::Unchanged;
        };
        params.page = page;
        self.set_params(params).await
    }

    /// Re-issue the current request, e.g. after a failure.
    pub async fn retry(&self) -> FetchOutcome {
        let (params, generation) = {
            let mut inner = self.inner.lock().await;
            let Some(params) = inner.params.clone() else {
                return FetchOutcome::Unchanged;
            };
            inner.generation += 1;
            (params, inner.generation)
        };
        self.fetch(params, generation).await
    }

    async fn fetch(&self, params: ListParams, generation: u64) -> FetchOutcome {
        let result = self
            .api
            .list_snippets(&params.taxonomy, params.page, params.show_hidden)
            .await;

        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            debug!(
                taxonomy = %params.taxonomy,
                page = params.page,
                generation,
                latest = inner.generation,
                "dropping superseded snippet list response"
            );
            return FetchOutcome::Superseded;
        }

        inner.state = match result {
            Ok(page) => {
                // The server may answer with a different page than asked,
                // e.g. the last one when asked past the end.
                if page.current_page != params.page {
                    debug!(
                        requested = params.page,
                        served = page.current_page,
                        "adopting page reported by server"
                    );
                    if let Some(current) = inner.params.as_mut() {
                        current.page = page.current_page;
                    }
                }
                ListState::Loaded(page)
            }
            Err(e) => {
                warn!(taxonomy = %params.taxonomy, page = params.page, error = %e, "failed to list snippets");
                ListState::Failed(e.to_string())
            }
        };
        FetchOutcome::Applied
    }
}
