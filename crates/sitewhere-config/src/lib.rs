//! Profile configuration for SiteWhere clients.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext), and
//! translation to `sitewhere_api::ClientConfig`. Applications embedding the
//! SDK use this instead of assembling a `ClientConfig` by hand.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use sitewhere_api::{ClientConfig, Credentials, DefaultTenant, TenantId, TlsMode, TransportConfig};

const KEYRING_SERVICE: &str = "sitewhere";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no profile named '{profile}'")]
    UnknownProfile { profile: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when none is named.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named platform profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Look up `name`, or the default profile when `name` is `None`.
    pub fn profile<'a>(&'a self, name: Option<&'a str>) -> Result<(&'a str, &'a Profile), ConfigError> {
        let name = name
            .or(self.default_profile.as_deref())
            .unwrap_or("default");
        self.profiles
            .get(name)
            .map(|p| (name, p))
            .ok_or_else(|| ConfigError::UnknownProfile {
                profile: name.into(),
            })
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

/// A named SiteWhere instance plus the identity used against it.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Platform root URL (e.g., "http://localhost:8080").
    pub url: String,

    /// Username for the token endpoint and unscoped calls.
    pub username: Option<String>,

    /// Password (plaintext -- prefer keyring or env var).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Tenant sent on calls made without a tenant context.
    pub tenant_id: Option<String>,

    /// Tenant auth token (plaintext -- prefer keyring or env var).
    pub tenant_auth_token: Option<String>,

    /// Environment variable name containing the tenant auth token.
    pub tenant_auth_env: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout, in seconds.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "sitewhere", "sitewhere").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("sitewhere");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from `path` merged with `SITEWHERE_` environment variables.
///
/// Nested keys use a double underscore: `SITEWHERE_DEFAULTS__TIMEOUT=60`.
/// A missing file is not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SITEWHERE_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    debug!(path = %path.display(), "saved config");
    Ok(())
}

// ── Credential resolution ───────────────────────────────────────────

/// Look up one secret: named env var, then system keyring, then plaintext.
fn resolve_secret(
    env_name: Option<&str>,
    profile_name: &str,
    keyring_key: &str,
    plaintext: Option<&str>,
) -> Option<SecretString> {
    // 1. Env var named by the profile
    if let Some(val) = env_name.and_then(|name| std::env::var(name).ok()) {
        return Some(SecretString::from(val));
    }

    // 2. System keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/{keyring_key}")) {
        if let Ok(secret) = entry.get_password() {
            return Some(SecretString::from(secret));
        }
    }

    // 3. Plaintext in config
    plaintext.map(|s| SecretString::from(s.to_owned()))
}

/// Resolve basic credentials for a profile.
///
/// The username comes from the profile or `SITEWHERE_USERNAME`; the
/// password from `password_env`, the keyring entry
/// `sitewhere/{profile}/password`, or the plaintext field, in that order.
pub fn resolve_credentials(profile: &Profile, profile_name: &str) -> Result<Credentials, ConfigError> {
    let no_credentials = || ConfigError::NoCredentials {
        profile: profile_name.into(),
    };

    let username = profile
        .username
        .clone()
        .or_else(|| std::env::var("SITEWHERE_USERNAME").ok())
        .ok_or_else(no_credentials)?;

    let password = resolve_secret(
        profile.password_env.as_deref(),
        profile_name,
        "password",
        profile.password.as_deref(),
    )
    .ok_or_else(no_credentials)?;

    Ok(Credentials { username, password })
}

/// Resolve the default tenant headers, if the profile names a tenant.
pub fn resolve_default_tenant(
    profile: &Profile,
    profile_name: &str,
) -> Result<Option<DefaultTenant>, ConfigError> {
    let Some(tenant_id) = profile.tenant_id.as_deref() else {
        return Ok(None);
    };

    let tenant_auth_token = resolve_secret(
        profile.tenant_auth_env.as_deref(),
        profile_name,
        "tenant-auth",
        profile.tenant_auth_token.as_deref(),
    )
    .ok_or_else(|| ConfigError::Validation {
        field: "tenant_auth_token".into(),
        reason: format!("tenant '{tenant_id}' has no auth token"),
    })?;

    Ok(Some(DefaultTenant {
        tenant_id: TenantId::new(tenant_id),
        tenant_auth_token,
    }))
}

/// Store a profile's password in the system keyring.
pub fn store_password(profile_name: &str, password: &str) -> Result<(), ConfigError> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password"))
        .map_err(|e| keyring_error(&e))?;
    entry.set_password(password).map_err(|e| keyring_error(&e))
}

fn keyring_error(err: &keyring::Error) -> ConfigError {
    ConfigError::Validation {
        field: "keyring".into(),
        reason: err.to_string(),
    }
}

// ── Translation ─────────────────────────────────────────────────────

/// Build a `ClientConfig` from a profile.
///
/// A profile without a username yields a client with no basic credentials;
/// only explicit tenant contexts will authenticate its calls.
pub fn profile_to_client_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<ClientConfig, ConfigError> {
    let url: url::Url = profile.url.parse().map_err(|_| ConfigError::Validation {
        field: "url".into(),
        reason: format!("invalid URL: {}", profile.url),
    })?;

    let tls = if profile.insecure.unwrap_or(defaults.insecure) {
        TlsMode::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsMode::CustomCa(ca_path.clone())
    } else {
        TlsMode::System
    };

    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));
    let transport = TransportConfig {
        tls,
        ..TransportConfig::default()
    }
    .with_timeout(timeout);

    let mut config = ClientConfig::new(url).with_transport(transport);

    match resolve_credentials(profile, profile_name) {
        Ok(credentials) => config = config.with_credentials(credentials),
        Err(ConfigError::NoCredentials { .. }) if profile.username.is_none() => {
            debug!(profile = profile_name, "profile has no basic credentials");
        }
        Err(e) => return Err(e),
    }

    if let Some(tenant) = resolve_default_tenant(profile, profile_name)? {
        config = config.with_default_tenant(tenant);
    }

    Ok(config)
}
