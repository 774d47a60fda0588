use super::*;

#[test]
fn test_client_error_display() {
    let error = Error::from(github_client::Error::Configuration(
        "token contains invalid header characters".to_string(),
    ));
    assert_eq!(
        error.to_string(),
        "GitHub client error: Invalid client configuration: token contains invalid header characters"
    );
}

#[test]
fn test_config_error_display() {
    let error = Error::Config("Missing field 'base_url'".to_string());
    assert_eq!(
        error.to_string(),
        "Configuration error: Missing field 'base_url'"
    );
}

#[test]
fn test_error_debug_format() {
    let error = Error::InvalidArguments("test".to_string());
    let debug_output = format!("{:?}", error);
    assert!(debug_output.contains("InvalidArguments"));
    assert!(debug_output.contains("test"));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}

#[test]
fn test_invalid_arguments_error_display() {
    let error = Error::InvalidArguments("login is required".to_string());
    assert_eq!(error.to_string(), "Invalid arguments: login is required");
}

#[test]
fn test_output_error_display() {
    let io_error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
    let error = Error::from(io_error);
    assert_eq!(error.to_string(), "Failed to write output.");
}

#[test]
fn test_stdout_flush_failed_error_display() {
    let error = Error::StdOutFlushFailed;
    assert_eq!(error.to_string(), "Failed to flush the std out buffer.");
}

#[test]
fn test_stdin_read_failed_error_display() {
    let error = Error::StdInReadFailed;
    assert_eq!(error.to_string(), "Failed to read user input.");
}
