//! The GitHub user API client.
//!
//! [`UserClient`] combines an [`HttpTransport`] with the response decoder and
//! applies one success/failure contract to both operations:
//!
//! - a transport failure becomes `Error::TransportFailure`
//! - a status outside 2xx becomes `Error::RequestFailed` (or `Error::NotFound`
//!   for a 404 on a single-user lookup)
//! - a body that does not decode becomes `Error::DecodeFailure`
//!
//! Each call is a single attempt. Nothing is cached or retried.

use async_trait::async_trait;
use tracing::{debug, error, info, instrument};

use crate::decoder::{decode_user, decode_users};
use crate::transport::{HttpResponse, HttpTransport, ReqwestTransport};
use crate::{ClientConfig, Error, User};

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;

const USERS_SEGMENT: &str = "users";

/// Read-only operations on GitHub user accounts.
///
/// This is the seam used by consumers that need to swap the real client for a
/// test double.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Fetches the first page of users from `GET /users`.
    ///
    /// Users are returned in the order the server sent them.
    ///
    /// # Errors
    ///
    /// Returns `Error::Empty` if the server returned an empty list, in addition to
    /// the transport, status and decode failures every request can produce.
    async fn fetch_all_users(&self) -> Result<Vec<User>, Error>;

    /// Fetches a single user profile from `GET /users/{login}`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidLogin` for an empty login or one with characters
    /// other than ASCII letters, digits, `-` and `_`, and `Error::NotFound` if
    /// the user does not exist, in addition to the transport, status and decode
    /// failures every request can produce.
    async fn fetch_user_by_username(&self, login: &str) -> Result<User, Error>;
}

/// A client for the GitHub users API.
///
/// # Example
///
/// ```rust,no_run
/// use github_client::{ClientConfig, UserClient, UserService};
///
/// # async fn example() -> Result<(), github_client::Error> {
/// let config = ClientConfig::new("https://api.github.com", Some("ghp_example".to_string()))?;
/// let client = UserClient::new(config)?;
///
/// let user = client.fetch_user_by_username("octocat").await?;
/// println!("{} has {:?} followers", user.login, user.followers);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct UserClient<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl UserClient<ReqwestTransport> {
    /// Creates a client that talks HTTP through `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the transport cannot be built from
    /// `config`.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self { config, transport })
    }
}

impl<T> UserClient<T>
where
    T: HttpTransport,
{
    /// Creates a client that sends its requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get(&self, segments: &[&str]) -> Result<HttpResponse, Error> {
        let url = self.config.endpoint(segments)?;
        debug!(url = %url, "Sending GET request");
        self.transport.get(url).await
    }
}

#[async_trait]
impl<T> UserService for UserClient<T>
where
    T: HttpTransport,
{
    #[instrument(skip(self))]
    async fn fetch_all_users(&self) -> Result<Vec<User>, Error> {
        let response = self.get(&[USERS_SEGMENT]).await?;

        if !response.is_success() {
            error!(
                status = response.status,
                "Request for user list failed with non-success status"
            );
            return Err(Error::RequestFailed {
                status: response.status,
            });
        }

        let users = decode_users(&response.body)?;
        if users.is_empty() {
            info!("User list request succeeded but returned no users");
            return Err(Error::Empty);
        }

        info!(count = users.len(), "Fetched user list");
        Ok(users)
    }

    #[instrument(skip(self), fields(login = %login))]
    async fn fetch_user_by_username(&self, login: &str) -> Result<User, Error> {
        let login = validate_login(login)?;

        let response = self.get(&[USERS_SEGMENT, login]).await?;

        match response.status {
            404 => {
                error!(login = login, "User does not exist");
                Err(Error::NotFound)
            }
            status if !response.is_success() => {
                error!(
                    login = login,
                    status = status,
                    "Request for user failed with non-success status"
                );
                Err(Error::RequestFailed { status })
            }
            _ => {
                let user = decode_user(&response.body)?;
                info!(login = user.login, id = user.id, "Fetched user");
                Ok(user)
            }
        }
    }
}

/// Trims `login` and checks it only holds characters GitHub allows in a login.
///
/// Dot segments are dropped by URL path normalization, so `.` and `..` would
/// otherwise turn a profile lookup into a request for the user list.
fn validate_login(login: &str) -> Result<&str, Error> {
    let login = login.trim();
    if login.is_empty() {
        return Err(Error::InvalidLogin("login must not be empty".to_string()));
    }

    if let Some(c) = login
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(Error::InvalidLogin(format!(
            "login must not contain '{}'",
            c
        )));
    }

    Ok(login)
}
