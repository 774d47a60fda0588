//! Configuration for the GitHub user client.
//!
//! The base URL and token are passed explicitly to the client constructor. Loading
//! them from a file or a secret store is the caller's job; [`ClientConfig::from_env`]
//! covers the common environment-variable case.

use secrecy::SecretString;
use tracing::debug;
use url::Url;

use crate::Error;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Base URL of the public GitHub REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// User agent sent when none is configured. GitHub rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = concat!("user-browser/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding an alternative API base URL.
pub const BASE_URL_ENV_VAR: &str = "GITHUB_API_URL";

/// Environment variable holding the access token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Settings needed to talk to the GitHub users API.
///
/// The token is wrapped in a [`SecretString`] so that it never shows up in
/// `Debug` output or logs.
#[derive(Debug)]
pub struct ClientConfig {
    /// Root of the REST API, e.g. `https://api.github.com` or
    /// `https://github.example.com/api/v3` for GitHub Enterprise
    pub base_url: Url,

    /// Token forwarded as `Authorization: token {token}` on every request
    pub token: Option<SecretString>,

    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration for the given base URL and optional token.
    ///
    /// An empty token is treated as no token.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if `base_url` is not an absolute `http` or
    /// `https` URL.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, Error> {
        let base_url = parse_base_url(base_url)?;
        let token = token
            .filter(|t| !t.trim().is_empty())
            .map(SecretString::from);

        Ok(Self {
            base_url,
            token,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    /// Builds a configuration from `GITHUB_API_URL` and `GITHUB_TOKEN`.
    ///
    /// A missing or empty `GITHUB_API_URL` falls back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self, Error> {
        let base_url = std::env::var(BASE_URL_ENV_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let token = std::env::var(TOKEN_ENV_VAR).ok();

        debug!(
            base_url = base_url,
            has_token = token.as_deref().is_some_and(|t| !t.is_empty()),
            "Loaded client configuration from environment"
        );

        Self::new(&base_url, token)
    }

    /// Replaces the user agent sent with every request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builds the URL for an endpoint below the base URL.
    ///
    /// Each segment is percent-encoded on its own. Segments that are exactly `.`
    /// or `..` are dropped by the `url` crate, so callers must reject those.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::Configuration(format!(
                    "base URL '{}' cannot be used as a base",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn parse_base_url(value: &str) -> Result<Url, Error> {
    let url = Url::parse(value.trim())
        .map_err(|e| Error::Configuration(format!("invalid base URL '{}': {}", value, e)))?;

    match url.scheme() {
        "http" | "https" if !url.cannot_be_a_base() => Ok(url),
        scheme => Err(Error::Configuration(format!(
            "base URL must use http or https, got '{}'",
            scheme
        ))),
    }
}
