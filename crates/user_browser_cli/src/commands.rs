//! Command modules for the user browser CLI.
//!
//! - `config_cmd`: Configuration management commands
//! - `users_cmd`: Listing, showing and browsing GitHub users

pub mod config_cmd;
pub mod users_cmd;
