//! HTTP transport used by the user client.
//!
//! The transport is the only part of the crate that performs I/O. It issues a
//! single authenticated `GET` and hands back the raw status and body without
//! interpreting either, which keeps the client logic testable against an
//! in-memory transport.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use secrecy::ExposeSecret;
use tracing::{debug, error, instrument};
use url::Url;

use crate::{ClientConfig, Error};

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;

/// Media type requested from the GitHub REST API.
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Raw outcome of an HTTP request that reached the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code
    pub status: u16,
    /// The unparsed response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` when the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Issues GET requests on behalf of the user client.
///
/// Implementations must return `Ok` for every response the server sends,
/// whatever its status, and `Error::TransportFailure` when no response was
/// received at all.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: Url) -> Result<HttpResponse, Error>;
}

/// [`HttpTransport`] backed by a `reqwest` client.
///
/// Authentication, `Accept` and `User-Agent` headers are installed once as
/// default headers. Requests are attempted exactly once.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport that sends the headers described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the token or user agent cannot be sent
    /// as a header value, or if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

        let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|_| {
            Error::Configuration("user agent contains invalid header characters".to_string())
        })?;
        headers.insert(USER_AGENT, user_agent);

        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("token {}", token.expose_secret()))
                .map_err(|_| {
                    Error::Configuration("token contains invalid header characters".to_string())
                })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client. The caller is responsible for its headers.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self), fields(url = %url))]
    async fn get(&self, url: Url) -> Result<HttpResponse, Error> {
        let response = self.client.get(url).send().await.map_err(|e| {
            error!(error = %e, "Failed to send request");
            Error::TransportFailure(describe_transport_error(&e))
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            error!(status, error = %e, "Failed to read response body");
            Error::TransportFailure(describe_transport_error(&e))
        })?;

        debug!(status, body_length = body.len(), "Received response");

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

fn describe_transport_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "the request timed out".to_string()
    } else if e.is_connect() {
        "could not connect to the server".to_string()
    } else if e.is_body() || e.is_decode() {
        "the response body could not be read".to_string()
    } else if e.is_redirect() {
        "too many redirects".to_string()
    } else {
        "the request could not be completed".to_string()
    }
}
