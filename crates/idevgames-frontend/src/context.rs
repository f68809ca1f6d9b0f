use std::sync::Arc;

use idevgames_client::SnippetApi;

use crate::list::{ListFooter, SnippetListView};
use crate::session::SessionStore;

/// State handed to every page: the API and the login session.
pub struct AppContext {
    pub api: Arc<dyn SnippetApi>,
    pub session: SessionStore,
}

impl AppContext {
    pub fn new(api: Arc<dyn SnippetApi>) -> Self {
        Self {
            session: SessionStore::new(api.clone()),
            api,
        }
    }

    pub fn list_view(&self, footer: ListFooter) -> SnippetListView {
        SnippetListView::new(self.api.clone(), footer)
    }
}
