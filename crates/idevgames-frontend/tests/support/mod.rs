//! An in-memory `SnippetApi` for driving the front-end without a server.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use jiff::civil::date;
use tokio::sync::Notify;

use idevgames_client::{BoxFuture, ClientError, SnippetApi};
use idevgames_core::models::session::ADMIN;
use idevgames_core::{
    Icon, Permissions, Session, SessionIdentity, Snippet, SnippetFields, SnippetPage,
};

pub const PAGE_SIZE: usize = 5;
pub const GOOD_CODE: &str = "abc123";

#[derive(Default)]
pub struct StubApi {
    pub snippets: Mutex<Vec<Snippet>>,
    pub session: Mutex<Session>,
    pub list_calls: AtomicUsize,
    pub session_calls: AtomicUsize,
    pub fail_lists: AtomicBool,
    pub fail_session: AtomicBool,
    /// When set, page 0 waits for page 1 to be answered first.
    pub page_zero_gate: Option<Arc<Notify>>,
    /// When set, `get_session` answers with the session as it was when
    /// called, but only after a callback exchange has been served.
    pub session_gate: Option<Arc<Notify>>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// One visible `links` snippet, and nothing else.
    pub fn with_one_link() -> Self {
        let api = Self::new();
        api.insert(fields("links", "Blender 2.82 released", false));
        api
    }

    pub fn with_links(count: usize) -> Self {
        let api = Self::new();
        for n in 0..count {
            api.insert(fields("links", &format!("link {n}"), false));
        }
        api
    }

    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.page_zero_gate = Some(gate.clone());
        (self, gate)
    }

    pub fn session_gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.session_gate = Some(gate.clone());
        (self, gate)
    }

    pub fn logged_in_as_admin(self) -> Self {
        *self.session.lock().unwrap() = admin_session();
        self
    }

    pub fn insert(&self, fields: SnippetFields) -> Snippet {
        let mut snippets = self.snippets.lock().unwrap();
        let stamp = date(2021, 6, 1).at(12, 0, 0, 0);
        let mut snippet = Snippet {
            id: snippets.len() as i32 + 1,
            creator_id: 1,
            taxonomy: String::new(),
            hidden: false,
            title: String::new(),
            icon: Icon::default(),
            shared_by: String::new(),
            shared_on: stamp.date(),
            summary: String::new(),
            description: String::new(),
            href: String::new(),
            created_at: stamp,
            updated_at: stamp,
        };
        snippet.apply(fields);
        snippets.push(snippet.clone());
        snippet
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn page(&self, taxonomy: &str, page: u32, show_hidden: bool) -> SnippetPage {
        let snippets = self.snippets.lock().unwrap();
        let matching: Vec<Snippet> = snippets
            .iter()
            .filter(|s| s.taxonomy == taxonomy && (show_hidden || !s.hidden))
            .cloned()
            .collect();
        let total_pages = matching.len().div_ceil(PAGE_SIZE).max(1) as u32;
        // Past-the-end requests get the last page.
        let page = page.min(total_pages - 1);
        SnippetPage {
            snippets: matching
                .into_iter()
                .skip(page as usize * PAGE_SIZE)
                .take(PAGE_SIZE)
                .collect(),
            current_page: page,
            total_pages,
        }
    }
}

pub fn fields(taxonomy: &str, title: &str, hidden: bool) -> SnippetFields {
    SnippetFields {
        taxonomy: taxonomy.to_string(),
        hidden,
        title: title.to_string(),
        icon: Icon::Blender3D,
        shared_by: "mysteriouspants".to_string(),
        shared_on: date(2020, 2, 14),
        summary: "Blender 2.82 is out.".to_string(),
        description: String::new(),
        href: "https://www.blender.org/press/blender-2-82-released/".to_string(),
    }
}

pub fn admin_session() -> Session {
    Session {
        user: Some(SessionIdentity {
            id: 1,
            github_user_id: Some(1234),
            login: "mysteriouspants".to_string(),
        }),
        permissions: [ADMIN].into_iter().collect::<Permissions>(),
    }
}

fn server_error(path: &str, status: u16) -> ClientError {
    ClientError::Status {
        method: "GET".to_string(),
        path: path.to_string(),
        status,
        body: "boom".to_string(),
    }
}

impl SnippetApi for StubApi {
    fn list_snippets<'a>(
        &'a self,
        taxonomy: &'a str,
        page: u32,
        show_hidden: bool,
    ) -> BoxFuture<'a, Result<SnippetPage, ClientError>> {
        Box::pin(async move {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.page_zero_gate {
                match page {
                    0 => gate.notified().await,
                    _ => gate.notify_one(),
                }
            }
            if self.fail_lists.load(Ordering::SeqCst) {
                return Err(server_error("/snippets", 500));
            }
            Ok(self.page(taxonomy, page, show_hidden))
        })
    }

    fn get_snippet(&self, id: i32) -> BoxFuture<'_, Result<Snippet, ClientError>> {
        Box::pin(async move {
            self.snippets
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.id == id)
                .cloned()
                .ok_or_else(|| server_error(&format!("/snippets/{id}"), 404))
        })
    }

    fn create_snippet<'a>(
        &'a self,
        fields: &'a SnippetFields,
    ) -> BoxFuture<'a, Result<Snippet, ClientError>> {
        Box::pin(async move { Ok(self.insert(fields.clone())) })
    }

    fn update_snippet<'a>(
        &'a self,
        id: i32,
        fields: &'a SnippetFields,
    ) -> BoxFuture<'a, Result<Snippet, ClientError>> {
        Box::pin(async move {
            let mut snippets = self.snippets.lock().unwrap();
            let snippet = snippets
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or_else(|| server_error(&format!("/snippets/{id}"), 404))?;
            snippet.apply(fields.clone());
            snippet.updated_at = date(2021, 7, 1).at(9, 30, 0, 0);
            Ok(snippet.clone())
        })
    }

    fn get_session(&self) -> BoxFuture<'_, Result<Session, ClientError>> {
        Box::pin(async move {
            self.session_calls.fetch_add(1, Ordering::SeqCst);
            let session = self.session.lock().unwrap().clone();
            if let Some(gate) = &self.session_gate {
                gate.notified().await;
            }
            if self.fail_session.load(Ordering::SeqCst) {
                return Err(server_error("/session", 502));
            }
            Ok(session)
        })
    }

    fn get_github_authorization_url(&self) -> BoxFuture<'_, Result<String, ClientError>> {
        Box::pin(async move {
            Ok("https://github.com/login/oauth/authorize?client_id=stub".to_string())
        })
    }

    fn get_github_callback<'a>(
        &'a self,
        code: &'a str,
    ) -> BoxFuture<'a, Result<Session, ClientError>> {
        Box::pin(async move {
            if code != GOOD_CODE {
                return Err(server_error("/session/github_callback", 404));
            }
            let session = admin_session();
            *self.session.lock().unwrap() = session.clone();
            if let Some(gate) = &self.session_gate {
                gate.notify_one();
            }
            Ok(session)
        })
    }

    fn delete_session(&self) -> BoxFuture<'_, Result<(), ClientError>> {
        Box::pin(async move {
            *self.session.lock().unwrap() = Session::anonymous();
            Ok(())
        })
    }
}
