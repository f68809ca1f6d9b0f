//! Login state and the GitHub OAuth flow.
//!
//! ```text
//! Anonymous --begin_login--> AwaitingProviderRedirect
//!     --complete_callback--> ExchangingCode --> Authenticated
//! Authenticated --logout--> Anonymous
//! ```
//!
//! `probe` reconciles with the server's cookie state once per app load.
//! Every transition bumps a generation; a probe that resolves after some
//! other transition is discarded.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use idevgames_client::SnippetApi;
use idevgames_core::routes;
use idevgames_core::{Permissions, Session, SessionIdentity};

use crate::error::FrontendError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    /// The user has been handed the provider's authorization URL.
    AwaitingProviderRedirect { url: String },
    ExchangingCode,
    Authenticated {
        identity: SessionIdentity,
        permissions: Permissions,
    },
}

impl AuthState {
    /// A session without a user is anonymous, whatever permissions came
    /// with it.
    pub fn from_session(session: Session) -> Self {
        match session.user {
            Some(identity) => AuthState::Authenticated {
                identity,
                permissions: session.permissions,
            },
            None => AuthState::Anonymous,
        }
    }

    pub fn identity(&self) -> Option<&SessionIdentity> {
        match self {
            AuthState::Authenticated { identity, .. } => Some(identity),
            _ => None,
        }
    }

    pub fn permissions(&self) -> Permissions {
        match self {
            AuthState::Authenticated { permissions, .. } => permissions.clone(),
            _ => Permissions::none(),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, AuthState::Authenticated { permissions, .. } if permissions.is_admin())
    }
}

/// What `probe` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// On the OAuth callback path; the exchange owns the session.
    Skipped,
    /// A probe already ran during this app load.
    AlreadyProbed,
    Reconciled(AuthState),
    /// The state changed while the probe was in flight; its answer was
    /// dropped.
    Superseded,
}

struct Inner {
    auth: AuthState,
    generation: u64,
}

impl Inner {
    fn set(&mut self, next: AuthState) {
        self.auth = next;
        self.generation += 1;
    }
}

/// Session identity and permissions shared by every view.
pub struct SessionStore {
    api: Arc<dyn SnippetApi>,
    inner: Mutex<Inner>,
    probed: AtomicBool,
}

impl SessionStore {
    pub fn new(api: Arc<dyn SnippetApi>) -> Self {
        Self {
            api,
            inner: Mutex::new(Inner {
                auth: AuthState::Anonymous,
                generation: 0,
            }),
            probed: AtomicBool::new(false),
        }
    }

    pub async fn state(&self) -> AuthState {
        self.inner.lock().await.auth.clone()
    }

    pub async fn permissions(&self) -> Permissions {
        self.inner.lock().await.auth.permissions()
    }

    pub async fn is_admin(&self) -> bool {
        self.inner.lock().await.auth.is_admin()
    }

    /// Fails with [`FrontendError::NotAuthorized`] unless the session holds
    /// the admin capability. The server rejects non-admin writes anyway.
    pub async fn require_admin(&self) -> Result<(), FrontendError> {
        if self.is_admin().await {
            Ok(())
        } else {
            Err(FrontendError::NotAuthorized)
        }
    }

    /// Ask the server who the session cookie belongs to.
    ///
    /// Runs at most once per store. Skipped on the callback path so the
    /// probe cannot race the code exchange. Failures degrade to anonymous.
    pub async fn probe(&self, current_path: &str) -> ProbeOutcome {
        if routes::is_github_callback(current_path) {
            debug!(path = current_path, "skipping session probe on callback path");
            return ProbeOutcome::Skipped;
        }
        if self.probed.swap(true, Ordering::SeqCst) {
            return ProbeOutcome::AlreadyProbed;
        }

        let generation = self.inner.lock().await.generation;
        let next = match self.api.get_session().await {
            Ok(session) => AuthState::from_session(session),
            Err(e) => {
                warn!(error = %e, "failed to get session");
                AuthState::Anonymous
            }
        };

        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            debug!(generation, latest = inner.generation, "dropping stale session probe");
            return ProbeOutcome::Superseded;
        }
        inner.set(next.clone());
        ProbeOutcome::Reconciled(next)
    }

    /// Fetch the provider URL the user must visit to log in.
    pub async fn begin_login(&self) -> Result<String, FrontendError> {
        let url = self.api.get_github_authorization_url().await?;
        self.inner
            .lock()
            .await
            .set(AuthState::AwaitingProviderRedirect { url: url.clone() });
        info!("awaiting github authorization");
        Ok(url)
    }

    /// Exchange the code the provider redirected back with. On failure the
    /// store falls back to anonymous and the error is returned.
    pub async fn complete_callback(&self, code: &str) -> Result<AuthState, FrontendError> {
        self.inner.lock().await.set(AuthState::ExchangingCode);

        match self.api.get_github_callback(code).await {
            Ok(session) => {
                let next = AuthState::from_session(session);
                if let Some(identity) = next.identity() {
                    info!(login = %identity.login, "logged in");
                }
                self.inner.lock().await.set(next.clone());
                Ok(next)
            }
            Err(e) => {
                warn!(error = %e, "failed to process github callback");
                self.inner.lock().await.set(AuthState::Anonymous);
                Err(e.into())
            }
        }
    }

    /// Destroy the server session. Local state is only cleared once the
    /// server has confirmed.
    pub async fn logout(&self) -> Result<(), FrontendError> {
        self.api.delete_session().await?;
        self.inner.lock().await.set(AuthState::Anonymous);
        info!("logged out");
        Ok(())
    }
}
