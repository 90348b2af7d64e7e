//! Client configuration and per-dialect request policy.

use std::fmt;

/// Endpoint of the legacy v5 API.
pub const KRAKEN_ENDPOINT: &str = "https://api.twitch.tv/kraken/";
/// Endpoint of the Helix API.
pub const HELIX_ENDPOINT: &str = "https://api.twitch.tv/helix/";

pub const ACCESS_TOKEN_ENV_VAR: &str = "TWITCH_ACCESS_TOKEN";
pub const CLIENT_ID_ENV_VAR: &str = "TWITCH_CLIENT_ID";
pub const CLIENT_SECRET_ENV_VAR: &str = "TWITCH_CLIENT_SECRET";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const KRAKEN_ACCEPT: &str = "application/vnd.twitchtv.v5+json";

/// API generation a [`crate::Client`] speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Legacy v5 API.
    Kraken,
    /// New API.
    Helix,
}

impl Dialect {
    pub fn default_endpoint(self) -> &'static str {
        match self {
            Self::Kraken => KRAKEN_ENDPOINT,
            Self::Helix => HELIX_ENDPOINT,
        }
    }

    /// Scheme prefix of the `Authorization` header.
    pub fn auth_scheme(self) -> &'static str {
        match self {
            Self::Kraken => "OAuth",
            Self::Helix => "Bearer",
        }
    }

    /// Kraken wants `key=a&key=b` where callers pass `key=a,b`.
    pub fn expands_comma_lists(self) -> bool {
        matches!(self, Self::Kraken)
    }

    /// Version-pinning `Accept` header, if the dialect needs one.
    pub fn accept(self) -> Option<&'static str> {
        match self {
            Self::Kraken => Some(KRAKEN_ACCEPT),
            Self::Helix => None,
        }
    }
}

/// Credentials, endpoint and HTTP client for one API client instance.
///
/// Construct it once at startup and move it into [`crate::Kraken`] or
/// [`crate::Helix`]; library calls never read the environment.
#[derive(Clone, Default)]
pub struct Config {
    /// Base URL. `None` selects the dialect's default endpoint.
    pub endpoint: Option<String>,
    pub access_token: String,
    pub client_id: String,
    /// Accepted for completeness; no current endpoint needs it.
    pub client_secret: String,
    /// HTTP client to dispatch through. `None` uses `reqwest::Client::new()`.
    pub http: Option<reqwest::Client>,
}

impl Config {
    pub fn new(access_token: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            client_id: client_id.into(),
            ..Self::default()
        }
    }

    /// Read credentials from `TWITCH_ACCESS_TOKEN`, `TWITCH_CLIENT_ID` and
    /// `TWITCH_CLIENT_SECRET`. Unset variables are left empty.
    pub fn from_env() -> Self {
        let var = |key: &str| std::env::var(key).unwrap_or_default();
        Self {
            endpoint: None,
            access_token: var(ACCESS_TOKEN_ENV_VAR),
            client_id: var(CLIENT_ID_ENV_VAR),
            client_secret: var(CLIENT_SECRET_ENV_VAR),
            http: None,
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    #[must_use]
    pub fn with_client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = secret.into();
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |s: &str| if s.is_empty() { "" } else { "***" };
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("access_token", &mask(&self.access_token))
            .field("client_id", &self.client_id)
            .field("client_secret", &mask(&self.client_secret))
            .field("http", &self.http.is_some())
            .finish()
    }
}
