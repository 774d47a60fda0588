//! Decoding of GitHub user response bodies.
//!
//! These functions are pure: they take the raw body of a successful response and
//! turn it into [`User`] values. Fields other than the ones modelled on [`User`]
//! are ignored.

use tracing::warn;

use crate::{Error, User};

#[cfg(test)]
#[path = "decoder_tests.rs"]
mod tests;

/// Decodes the body of a `GET /users` response.
///
/// The body must be a JSON array of user objects. The order of the array is
/// preserved. An empty array decodes successfully to an empty vector.
///
/// # Errors
///
/// Returns `Error::DecodeFailure` if the body is not valid JSON, is not an array,
/// or contains an element without a valid `id` or `login`.
pub fn decode_users(body: &[u8]) -> Result<Vec<User>, Error> {
    serde_json::from_slice::<Vec<User>>(body).map_err(|e| {
        warn!(
            error = %e,
            body_length = body.len(),
            "Failed to decode user list"
        );
        Error::from(e)
    })
}

/// Decodes the body of a `GET /users/{login}` response.
///
/// # Errors
///
/// Returns `Error::DecodeFailure` if the body is not a JSON object with a valid
/// `id` and `login`.
pub fn decode_user(body: &[u8]) -> Result<User, Error> {
    serde_json::from_slice::<User>(body).map_err(|e| {
        warn!(
            error = %e,
            body_length = body.len(),
            "Failed to decode user"
        );
        Error::from(e)
    })
}
