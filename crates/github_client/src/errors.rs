//! Error types for GitHub user API operations.
//!
//! Every failure the client can produce is a variant of [`Error`]. The `Display`
//! text of each variant is short and free of protocol detail so that callers can
//! show it to an end user as-is.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while fetching users from the GitHub API.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::{Error, UserService};
///
/// match client.fetch_user_by_username("octocat").await {
///     Ok(user) => println!("Found {}", user.login),
///     Err(Error::NotFound) => eprintln!("No such user"),
///     Err(Error::RequestFailed { status }) => eprintln!("GitHub answered {}", status),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced an HTTP response.
    ///
    /// Covers DNS resolution failures, TLS errors, timeouts and connection resets.
    /// The contained string describes the underlying cause.
    #[error("Network request failed: {0}")]
    TransportFailure(String),

    /// GitHub answered with a status outside the 2xx range.
    #[error("Request failed with status {status}")]
    RequestFailed {
        /// The HTTP status code returned by the server
        status: u16,
    },

    /// The response body could not be decoded into the expected shape.
    ///
    /// This happens when the body is not JSON at all, when the top level has the
    /// wrong shape, or when a required field (`id`, `login`) is missing or has the
    /// wrong type. The serde error is kept as the source for logging.
    #[error("Failed to decode GitHub response")]
    DecodeFailure(#[from] serde_json::Error),

    /// The user list request succeeded but contained no users.
    #[error("No users found")]
    Empty,

    /// The requested user does not exist (HTTP 404 on a single-user lookup).
    #[error("User not found")]
    NotFound,

    /// The login passed to a single-user lookup cannot be used.
    #[error("Invalid login: {0}")]
    InvalidLogin(String),

    /// The client could not be constructed from the supplied configuration.
    #[error("Invalid client configuration: {0}")]
    Configuration(String),
}

impl Error {
    /// Returns the HTTP status code associated with the error, if there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RequestFailed { status } => Some(*status),
            Error::NotFound => Some(404),
            _ => None,
        }
    }
}
