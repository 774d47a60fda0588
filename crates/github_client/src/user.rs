//! User domain types.
//!
//! This module contains the type representing a GitHub user account, both as it
//! appears in the `/users` listing and as a full `/users/{login}` profile.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;

/// Represents a GitHub user account.
///
/// Only `id` and `login` are guaranteed to be present. The listing endpoint
/// returns little more than those plus the avatar URL; the profile fields are
/// filled in only when a single user is fetched. A missing or `null` field in
/// the response decodes to `None`.
///
/// Values are created fresh on every successful decode and never mutated.
///
/// # Examples
///
/// ```rust
/// use github_client::User;
///
/// let user = User {
///     id: 583231,
///     login: "octocat".to_string(),
///     ..Default::default()
/// };
///
/// assert_eq!(user.display_name(), "octocat");
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct User {
    /// The unique numeric ID of the user
    pub id: u64,
    /// The login name of the user
    pub login: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// ISO 8601 timestamp of the last profile update, as sent by GitHub
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_repos: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_gists: Option<u64>,
}

impl User {
    /// Returns the user's display name, falling back to the login when the
    /// profile has no (or an empty) name.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.login,
        }
    }
}
