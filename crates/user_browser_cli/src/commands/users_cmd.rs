//! Commands that fetch and display GitHub users.
//!
//! Each command drives a [`UserStateStream`] and prints the state it settles
//! in. `browse` strings the list and profile views together the way a
//! graphical client would: pick a login from the list, view its profile, go
//! back to the list.

use std::io::{BufRead, Write};
use std::sync::Arc;

use github_client::UserClient;
use tracing::{debug, info, instrument};
use user_browser_core::{FetchState, SelectedLogin, UserStateStream};

use crate::config::AppConfig;
use crate::errors::Error;
use crate::render::render_state;

#[cfg(test)]
#[path = "users_cmd_tests.rs"]
mod tests;

pub const SELECT_PROMPT: &str = "Select a login (leave blank to quit): ";

/// Creates a fetch stream backed by the real GitHub client.
pub fn build_stream(config: &AppConfig) -> Result<UserStateStream, Error> {
    let client = UserClient::new(config.client_config()?)?;
    Ok(UserStateStream::new(Arc::new(client)))
}

/// Fetches the user list and prints it.
#[instrument(skip(stream, out))]
pub async fn list_users<W: Write>(
    stream: &UserStateStream,
    out: &mut W,
) -> Result<FetchState, Error> {
    stream.begin_fetch_all_users();
    let state = stream.settled().await;
    writeln!(out, "{}", render_state(&state))?;
    Ok(state)
}

/// Fetches the profile of `login` and prints it.
#[instrument(skip(stream, out))]
pub async fn show_user<W: Write>(
    stream: &UserStateStream,
    login: &str,
    out: &mut W,
) -> Result<FetchState, Error> {
    if login.trim().is_empty() {
        return Err(Error::InvalidArguments(
            "a login is required".to_string(),
        ));
    }

    stream.begin_fetch_user(login);
    let state = stream.settled().await;
    writeln!(out, "{}", render_state(&state))?;
    Ok(state)
}

/// Alternates between the user list and a selected profile until the user
/// enters a blank login or input ends.
///
/// Returns the state of the last list fetch. A failing profile fetch is shown
/// and browsing continues; a failing list fetch ends the session.
#[instrument(skip(stream, input, out))]
pub async fn browse<R: BufRead, W: Write>(
    stream: &UserStateStream,
    input: &mut R,
    out: &mut W,
) -> Result<FetchState, Error> {
    let mut selection = SelectedLogin::new();

    loop {
        let list = list_users(stream, out).await?;
        if !matches!(list, FetchState::SuccessList(_)) {
            return Ok(list);
        }

        let answer = ask_user_for_value(input, out, SELECT_PROMPT)?;
        selection.select(&answer);

        let Some(login) = selection.take() else {
            info!("Leaving user browser");
            return Ok(list);
        };

        debug!(login = login, "Showing selected user");
        writeln!(out)?;
        show_user(stream, &login, out).await?;
        writeln!(out)?;
    }
}

fn ask_user_for_value<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    request: &str,
) -> Result<String, Error> {
    write!(out, "{}", request)?;
    out.flush().map_err(|_| Error::StdOutFlushFailed)?;

    let mut temp = String::new();
    input
        .read_line(&mut temp)
        .map_err(|_| Error::StdInReadFailed)?;
    Ok(temp.trim().to_string())
}
