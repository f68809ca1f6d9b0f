use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

pub const PRODUCTION_URL: &str = "https://www.idevgames.com";
pub const DEVELOPMENT_URL: &str = "http://localhost:4000";

/// Every API path lives under this prefix.
pub const API_PREFIX: &str = "/api";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Which deployment the client talks to by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Production,
    #[default]
    Development,
}

impl Environment {
    /// Reads `IDEVGAMES_ENV`; anything other than `production` means
    /// development.
    pub fn from_env() -> Self {
        match std::env::var("IDEVGAMES_ENV") {
            Ok(v) if v.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn default_base_url(self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_URL,
            Environment::Development => DEVELOPMENT_URL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }
        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("idevgames-client/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    pub fn for_environment(env: Environment) -> Result<Self, ClientError> {
        Self::new(env.default_base_url())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of an API path such as `/snippets/4`.
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let raw = format!("{base}{API_PREFIX}{path}");
        Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))
    }
}
