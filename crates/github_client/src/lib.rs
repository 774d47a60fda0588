//! Crate for reading GitHub user accounts from the GitHub REST API.
//!
//! This crate provides a small, read-only client for the two user endpoints:
//!
//! - `GET {base_url}/users` lists the first page of users
//! - `GET {base_url}/users/{login}` fetches a single profile
//!
//! Requests carry an `Authorization: token {token}` header when a token is
//! configured. Responses are decoded into [`User`] values and every failure is
//! reported as an [`Error`] variant whose message is safe to show to an end user.
//!
//! ```rust,no_run
//! use github_client::{ClientConfig, UserClient, UserService};
//!
//! # async fn example() -> Result<(), github_client::Error> {
//! let client = UserClient::new(ClientConfig::from_env()?)?;
//! for user in client.fetch_all_users().await? {
//!     println!("{} (id: {})", user.login, user.id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub use client::{UserClient, UserService};

pub mod config;
pub use config::{ClientConfig, DEFAULT_BASE_URL};

pub mod decoder;

pub mod errors;
pub use errors::Error;

pub mod transport;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};

pub mod user;
pub use user::User;
