//! Webapp configuration
//!
//! The configuration snapshot is built once at bootstrap from the environment
//! and the location the webapp is served from, then only read. It lives in a
//! [`ConfigState`] owned by the caller rather than in a global.

use serde::Serialize;
use std::env;
use std::fmt;
use url::Url;

use crate::error::{Error, Result};

/// Environment used when `VITE_ENV` is unset or empty
pub const DEFAULT_ENV: &str = "production";

/// Environment name that enables development defaults
pub const DEV_ENV: &str = "dev";

/// Port suffix of published websites in development
pub const DEV_SITES_PORT: &str = ":4000";

/// Path the OIDC provider redirects back to
pub const OIDC_REDIRECT_PATH: &str = "/auth";

pub const CMS_BASE_URL: &str = "https://cms.markdown.ninja";
pub const GITHUB_REPOSITORY: &str = "https://github.com/bloom42/markdown-ninja";

/// Location used when `WEBAPP_URL` is not set
pub const DEFAULT_WEBAPP_URL: &str = "https://markdown.ninja";

/// Scheme and host the webapp is served from.
///
/// `protocol` always carries its trailing colon (`"https:"`) and `host`
/// includes the port when there is one (`"localhost:8080"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    protocol: String,
    host: String,
}

impl Location {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        let mut protocol = protocol.into();
        if !protocol.ends_with(':') {
            protocol.push(':');
        }

        Self {
            protocol,
            host: host.into(),
        }
    }

    /// Parse an absolute URL, keeping only what `window.location` exposes as
    /// `protocol` and `host`: the scheme, the lowercased host, and the port
    /// when it is not the scheme's default. Userinfo, path, query and fragment
    /// are dropped.
    pub fn parse(url: &str) -> Result<Self> {
        let parsed = Url::parse(url.trim()).map_err(|e: url::ParseError| {
            Error::InvalidLocation(format!("'{}': {}", url, e))
        })?;

        let host = parsed
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| Error::InvalidLocation(format!("missing host in '{}'", url)))?;

        let host = match parsed.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };

        Ok(Self::new(parsed.scheme(), host))
    }

    /// Load the location from `WEBAPP_URL`
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let url = env::var("WEBAPP_URL").unwrap_or_else(|_| DEFAULT_WEBAPP_URL.to_string());
        Self::parse(&url)
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

impl fmt::Display for Location {
    #[mutants::skip] // Formatting only, covered through Config tests
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}//{}", self.protocol, self.host)
    }
}

/// Immutable configuration snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub env: String,
    pub sites_port: String,
    pub oidc_redirect_uri: String,
    pub cms_base_url: String,
    pub github_repository: String,
}

impl Config {
    /// Build a snapshot from an environment name and the serving location.
    ///
    /// An absent or empty `env` falls back to [`DEFAULT_ENV`].
    pub fn new(env: Option<&str>, location: &Location) -> Self {
        let env = env
            .filter(|env| !env.is_empty())
            .unwrap_or(DEFAULT_ENV)
            .to_string();

        let sites_port = if env == DEV_ENV {
            DEV_SITES_PORT.to_string()
        } else {
            String::new()
        };

        // redirect URIs are allowlisted on the OIDC server
        let oidc_redirect_uri = format!("{}{}", location, OIDC_REDIRECT_PATH);

        Self {
            env,
            sites_port,
            oidc_redirect_uri,
            cms_base_url: CMS_BASE_URL.to_string(),
            github_repository: GITHUB_REPOSITORY.to_string(),
        }
    }

    pub fn is_dev(&self) -> bool {
        self.env == DEV_ENV
    }

    /// URL of a published website, e.g. `http://blog.localhost:4000` in development
    pub fn website_url(&self, location: &Location, domain: &str) -> String {
        format!("{}//{}{}", location.protocol(), domain, self.sites_port)
    }
}

/// Holder for the configuration snapshot.
///
/// Starts uninitialized (`None`) and becomes ready (`Some`) on the first
/// [`ConfigState::create`]; there is no way back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigState {
    snapshot: Option<Config>,
}

impl ConfigState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and store the snapshot.
    ///
    /// Calling this again replaces the stored snapshot.
    pub fn create(&mut self, env: Option<&str>, location: &Location) -> &Config {
        let config = Config::new(env, location);

        if self.is_initialized() {
            tracing::warn!(env = %config.env, "Replacing an already created configuration");
        }
        tracing::info!(
            env = %config.env,
            oidc_redirect_uri = %config.oidc_redirect_uri,
            "Configuration created"
        );

        self.snapshot.insert(config)
    }

    /// Build and store the snapshot, reading the environment name from `VITE_ENV`
    pub fn create_from_env(&mut self, location: &Location) -> &Config {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let env = env::var("VITE_ENV").ok();
        self.create(env.as_deref(), location)
    }

    /// Read the snapshot; fails until [`ConfigState::create`] has been called
    pub fn get(&self) -> Result<&Config> {
        match &self.snapshot {
            Some(config) => Ok(config),
            None => Err(Error::NotInitialized),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.snapshot.is_some()
    }
}
