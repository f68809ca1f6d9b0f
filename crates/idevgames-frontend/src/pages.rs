//! Page-level flows. Each takes the [`AppContext`] explicitly; write
//! flows check the session before touching the API.

use futures::future::join_all;
use jiff::civil::Date;
use tracing::info;

use idevgames_core::{Snippet, routes};

use crate::context::AppContext;
use crate::error::FrontendError;
use crate::form::SnippetForm;
use crate::list::{ListFooter, ListParams, SnippetListView};

/// Taxonomies on the homepage, with their headings.
pub const HOMEPAGE_SECTIONS: [(&str, &str); 2] =
    [("udevgames", "uDevGames"), ("links", "Links and news")];

pub struct HomepageSection {
    pub heading: &'static str,
    pub taxonomy: &'static str,
    pub list: SnippetListView,
}

pub struct Homepage {
    pub sections: Vec<HomepageSection>,
}

impl Homepage {
    pub fn new(ctx: &AppContext) -> Self {
        let sections = HOMEPAGE_SECTIONS
            .into_iter()
            .map(|(taxonomy, heading)| HomepageSection {
                heading,
                taxonomy,
                list: ctx.list_view(ListFooter::MoreLink),
            })
            .collect();
        Self { sections }
    }

    /// Fetch the first page of every section concurrently.
    pub async fn load(&self) {
        join_all(
            self.sections
                .iter()
                .map(|s| s.list.set_params(ListParams::first_page(s.taxonomy))),
        )
        .await;
    }
}

/// The full listing of one taxonomy, with a pager.
pub async fn snippets_page(ctx: &AppContext, params: ListParams) -> SnippetListView {
    let view = ctx.list_view(ListFooter::Pager);
    view.set_params(params).await;
    view
}

pub async fn single_snippet(ctx: &AppContext, snippet_id: i32) -> Result<Snippet, FrontendError> {
    Ok(ctx.api.get_snippet(snippet_id).await?)
}

#[derive(Debug, Clone)]
pub struct CreatedSnippet {
    pub snippet: Snippet,
    /// Where the editor goes next.
    pub edit_route: String,
}

/// A blank form for a new snippet.
pub async fn new_snippet_form(ctx: &AppContext, today: Date) -> Result<SnippetForm, FrontendError> {
    ctx.session.require_admin().await?;
    Ok(SnippetForm::blank(today))
}

pub async fn create_snippet(
    ctx: &AppContext,
    taxonomy: &str,
    form: &SnippetForm,
) -> Result<CreatedSnippet, FrontendError> {
    ctx.session.require_admin().await?;
    let fields = form.to_fields(taxonomy)?;
    let snippet = ctx.api.create_snippet(&fields).await?;
    info!(id = snippet.id, taxonomy, "snippet created");
    Ok(CreatedSnippet {
        edit_route: routes::edit_snippet_page(taxonomy, snippet.id),
        snippet,
    })
}

/// The snippet being edited, and a form holding its current values.
#[derive(Debug, Clone)]
pub struct EditSnippet {
    pub snippet: Snippet,
    pub form: SnippetForm,
}

pub async fn edit_snippet_form(
    ctx: &AppContext,
    snippet_id: i32,
) -> Result<EditSnippet, FrontendError> {
    ctx.session.require_admin().await?;
    let snippet = ctx.api.get_snippet(snippet_id).await?;
    Ok(EditSnippet {
        form: SnippetForm::from_snippet(&snippet),
        snippet,
    })
}

/// Save `form` over `edit.snippet`. The taxonomy cannot change.
pub async fn update_snippet(
    ctx: &AppContext,
    edit: &mut EditSnippet,
    form: SnippetForm,
) -> Result<(), FrontendError> {
    ctx.session.require_admin().await?;
    let fields = form.to_fields(&edit.snippet.taxonomy)?;
    edit.snippet = ctx.api.update_snippet(edit.snippet.id, &fields).await?;
    edit.form = SnippetForm::from_snippet(&edit.snippet);
    info!(id = edit.snippet.id, "snippet updated");
    Ok(())
}
