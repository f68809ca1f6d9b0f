use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use idevgames_client::config::DEFAULT_TIMEOUT;
use idevgames_client::{ClientConfig, Environment};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Overrides the configured server for a single run.
pub const API_URL_ENV: &str = "IDEVGAMES_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Server to talk to. `None` follows `IDEVGAMES_ENV`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Added in v1.
    pub timeout_secs: u64,
    /// `Cookie` header of the logged-in session, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<jiff::Timestamp>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            api_url: None,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            session_cookie: None,
            saved_at: None,
        }
    }
}

impl FrontendConfig {
    /// The server URL: `IDEVGAMES_API_URL`, then this config, then the
    /// environment default.
    pub fn resolve_api_url(&self, env_override: Option<String>, env: Environment) -> String {
        env_override
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| env.default_base_url().to_string())
    }

    pub fn client_config(&self, api_url: &str) -> eyre::Result<ClientConfig> {
        let config = ClientConfig::new(api_url)?;
        Ok(config.with_timeout(Duration::from_secs(self.timeout_secs)))
    }
}

/// Redacted config info safe to print.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigInfo {
    pub api_url: Option<String>,
    pub timeout_secs: u64,
    pub logged_in: bool,
    pub session_hint: Option<String>,
    pub saved_at: Option<String>,
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("idevgames"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// The saved config, or defaults when none has been written yet.
pub fn load_or_default() -> eyre::Result<FrontendConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(FrontendConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> eyre::Result<FrontendConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: FrontendConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update idevgames."
        ));
    }

    // v0 → v1: add timeout_secs
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("timeout_secs")
            .or_insert(serde_json::Value::Number(DEFAULT_TIMEOUT.as_secs().into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(CURRENT_VERSION.into()),
        );
        tracing::info!("migrated config v0 → v1 (added timeout_secs)");
    }

    Ok(json)
}

pub fn save_config(config: &FrontendConfig) -> eyre::Result<()> {
    save_config_to(&config_path()?, config)
}

pub fn save_config_to(path: &Path, config: &FrontendConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    stamped.saved_at = Some(jiff::Timestamp::now());

    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // The session cookie is a credential.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn delete_config() -> eyre::Result<bool> {
    delete_config_at(&config_path()?)
}

/// Remove the config file, forgetting the saved server and session.
/// Returns whether there was anything to remove.
pub fn delete_config_at(path: &Path) -> eyre::Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "config deleted");
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(eyre::eyre!("failed to delete config at {}: {e}", path.display())),
    }
}

pub fn config_info(config: &FrontendConfig) -> ConfigInfo {
    ConfigInfo {
        api_url: config.api_url.clone(),
        timeout_secs: config.timeout_secs,
        logged_in: config.session_cookie.is_some(),
        session_hint: config.session_cookie.as_deref().map(redact_cookie),
        saved_at: config.saved_at.map(|t| t.to_string()),
    }
}

/// Keeps cookie names, hides values: `gh_user_id=****`.
pub fn redact_cookie(header: &str) -> String {
    header
        .split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((name, _)) => format!("{name}=****"),
            None => "****".to_string(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}
