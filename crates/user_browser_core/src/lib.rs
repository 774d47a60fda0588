//! Presentation-facing state for browsing GitHub users.
//!
//! This crate sits between the [`github_client`] and whatever renders users on
//! screen. It exposes each fetch as an observable [`FetchState`] and carries the
//! login selected in the list over to the profile view.

pub mod selection;
pub use selection::SelectedLogin;

pub mod state;
pub use state::{FetchState, UserStateStream};
