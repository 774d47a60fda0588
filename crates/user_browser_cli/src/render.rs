//! Text rendering of fetch states.

use github_client::User;
use user_browser_core::FetchState;

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;

pub const LOADING_TEXT: &str = "Loading...";

/// Renders any state of a fetch stream.
pub fn render_state(state: &FetchState) -> String {
    match state {
        FetchState::Loading => LOADING_TEXT.to_string(),
        FetchState::SuccessList(users) => render_user_list(users),
        FetchState::SuccessUser(user) => render_user_profile(user),
        FetchState::Error(message) => format!("Error: {}", message),
    }
}

/// One line per user: the login followed by the numeric id.
pub fn render_user_list(users: &[User]) -> String {
    let width = users.iter().map(|u| u.login.len()).max().unwrap_or(0);
    users
        .iter()
        .map(|u| format!("{:<width$}  id:{}", u.login, u.id, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a user profile. Fields the server did not send are left out.
pub fn render_user_profile(user: &User) -> String {
    let mut lines = Vec::new();

    if user.display_name() == user.login {
        lines.push(format!("@{}", user.login));
    } else {
        lines.push(format!("{} (@{})", user.display_name(), user.login));
    }

    if let Some(location) = &user.location {
        lines.push(format!("Location: {}", location));
    }

    let social: Vec<String> = [
        user.followers.map(|n| format!("{} Followers", n)),
        user.following.map(|n| format!("{} Following", n)),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !social.is_empty() {
        lines.push(social.join(" | "));
    }

    if let Some(bio) = user.bio.as_deref().filter(|b| !b.trim().is_empty()) {
        lines.push(String::new());
        lines.push("Bio:".to_string());
        lines.extend(bio.lines().map(|l| format!("  {}", l.trim_end())));
    }

    let details: Vec<String> = [
        user.public_repos
            .map(|n| format!("Public repositories: {}", n)),
        user.public_gists.map(|n| format!("Public gists: {}", n)),
        user.updated_at
            .as_ref()
            .map(|at| format!("Updated at: {}", at)),
        user.avatar_url.as_ref().map(|url| format!("Avatar: {}", url)),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !details.is_empty() {
        lines.push(String::new());
        lines.extend(details);
    }

    lines.join("\n")
}
