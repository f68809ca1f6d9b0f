//! Plain-text rendering for the terminal front-end.

use std::fmt::Write;

use idevgames_core::pager::Pager;
use idevgames_core::wire_date::format_date;
use idevgames_core::{Snippet, routes};

use crate::list::{ListFooter, ListParams, ListState};
use crate::session::AuthState;

/// One line per snippet:
/// `icon who shared on date: title <href> summary`, plus the edit route
/// for admins.
pub fn short_snippet(snippet: &Snippet, is_admin: bool) -> String {
    let mut line = format!(
        "{} {} shared on {}: {} <{}> {}",
        snippet.icon,
        snippet.shared_by,
        format_date(snippet.shared_on),
        snippet.title,
        snippet.href,
        snippet.summary,
    );
    if snippet.hidden {
        line.push_str(" (hidden)");
    }
    if is_admin {
        let _ = write!(
            line,
            " · edit: {}",
            routes::edit_snippet_page(&snippet.taxonomy, snippet.id)
        );
    }
    line
}

/// `« prev  0 1 [2] 3 4  next »`, disabled controls shown in parentheses.
pub fn pager(pager: &Pager) -> String {
    let mut out = String::new();
    out.push_str(if pager.previous.disabled {
        "(« prev)"
    } else {
        "« prev"
    });
    for page in &pager.pages {
        if pager.is_current(*page) {
            let _ = write!(out, " [{page}]");
        } else {
            let _ = write!(out, " {page}");
        }
    }
    out.push(' ');
    out.push_str(if pager.next.disabled {
        "(next »)"
    } else {
        "next »"
    });
    out
}

pub fn snippet_list(
    params: Option<&ListParams>,
    state: &ListState,
    footer: ListFooter,
    is_admin: bool,
) -> String {
    let page = match state {
        ListState::Loading => return "Loading...".to_string(),
        ListState::Failed(msg) => return format!("Failed to load snippets: {msg} (retry?)"),
        ListState::Loaded(page) => page,
    };

    let mut out = String::new();
    if page.is_empty() {
        out.push_str("No snippets here yet.\n");
    }
    for snippet in &page.snippets {
        out.push_str(&short_snippet(snippet, is_admin));
        out.push('\n');
    }

    match footer {
        ListFooter::Pager => {
            out.push_str(&pager(&page.pager()));
            out.push('\n');
        }
        ListFooter::MoreLink => {
            if let Some(params) = params {
                if is_admin {
                    let _ = write!(out, "New: {} · ", routes::new_snippet_page(&params.taxonomy));
                }
                let _ = writeln!(out, "More → {}", routes::more_link(&params.taxonomy));
            }
        }
    }
    out
}

pub fn session_button(state: &AuthState) -> String {
    match state {
        AuthState::Authenticated { identity, .. } => {
            format!("Hello {}! Logout", identity.login)
        }
        AuthState::AwaitingProviderRedirect { url } => {
            format!("Finish logging in at {url}")
        }
        AuthState::ExchangingCode => "Logging you in...".to_string(),
        AuthState::Anonymous => "Editors of the site can login.".to_string(),
    }
}
