//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// No usable place names were given
    NoPlaces,
    /// Configuration error
    ConfigError(String),
    /// The coordinator thread stopped abnormally
    WorkerPanic,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::NoPlaces => write!(f, "No place names to search for"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::WorkerPanic => write!(f, "Search aborted: worker thread panicked"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("places.txt".to_string());
        assert_eq!(error.to_string(), "File not found: places.txt");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("threshold out of range".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: threshold out of range"
        );
    }

    #[test]
    fn test_no_places_display() {
        assert_eq!(
            CliError::NoPlaces.to_string(),
            "No place names to search for"
        );
    }

    #[test]
    fn test_cli_result_carries_cli_error() {
        let failure: CliResult<()> = Err(CliError::WorkerPanic.into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("worker thread panicked"));
    }
}
