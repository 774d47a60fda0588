use std::io;

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the user browser CLI.
///
/// A fetch that ends in an error state is not an `Error`; it is rendered like
/// any other state. These variants cover problems with the CLI itself: its
/// configuration, its arguments and its terminal I/O.
#[derive(Error, Debug)]
pub enum Error {
    /// The GitHub client could not be set up.
    #[error("GitHub client error: {0}")]
    Client(#[from] github_client::Error),

    /// Configuration error occurred while loading or parsing configuration.
    ///
    /// This error is returned when there are issues with the configuration file,
    /// such as invalid values or file access problems.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid command-line arguments were provided.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Writing to the terminal failed.
    #[error("Failed to write output.")]
    Output(#[from] io::Error),

    /// Failed to flush the standard output buffer.
    ///
    /// This error occurs when the CLI cannot write output to the terminal,
    /// typically due to broken pipes or terminal issues.
    #[error("Failed to flush the std out buffer.")]
    StdOutFlushFailed,

    /// Failed to read a line of user input.
    #[error("Failed to read user input.")]
    StdInReadFailed,
}
