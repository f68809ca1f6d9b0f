//! Front-end route conventions.
//!
//! Pure string functions. These define the canonical paths of the site's
//! pages; the API paths live in `idevgames-client`.

pub const HOME: &str = "/";

/// Where GitHub sends the user back after authorizing the app.
pub const GITHUB_CALLBACK: &str = "/github_callback";

pub fn snippets_page(taxonomy: &str, page: u32, show_hidden: bool) -> String {
    let mut route = format!("/snippets/{taxonomy}/page/{page}");
    if show_hidden {
        route.push_str("?showHidden=true");
    }
    route
}

pub fn snippet_page(taxonomy: &str, snippet_id: i32) -> String {
    format!("/snippets/{taxonomy}/{snippet_id}")
}

pub fn edit_snippet_page(taxonomy: &str, snippet_id: i32) -> String {
    format!("{}/edit", snippet_page(taxonomy, snippet_id))
}

pub fn new_snippet_page(taxonomy: &str) -> String {
    format!("/snippets/{taxonomy}/new")
}

pub fn more_link(taxonomy: &str) -> String {
    format!("/snippets/{taxonomy}?page=1")
}

/// The callback path itself, optionally followed by a query or fragment.
pub fn is_github_callback(path: &str) -> bool {
    match path.strip_prefix(GITHUB_CALLBACK) {
        Some(rest) => rest.is_empty() || rest.starts_with('?') || rest.starts_with('#'),
        None => false,
    }
}
