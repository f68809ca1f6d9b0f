use serde::{Deserialize, Serialize};

use crate::models::snippet::Snippet;
use crate::pager::Pager;

/// One page of snippets for a taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetPage {
    pub snippets: Vec<Snippet>,
    /// Zero-based.
    pub current_page: u32,
    /// A count of pages, not the last index.
    pub total_pages: u32,
}

impl SnippetPage {
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn pager(&self) -> Pager {
        Pager::new(self.current_page, self.total_pages)
    }
}
