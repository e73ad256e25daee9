//! Error types for the search command builder
//!
//! Provides structured error handling with context and exit-status mapping.

use std::path::PathBuf;
use thiserror::Error;

/// Exit status for every usage-family error
pub const USAGE_EXIT_CODE: u8 = 1;

/// Exit status when a delegate program cannot be started
pub const SPAWN_EXIT_CODE: u8 = 127;

/// Exit status for local failures (temporary files, configuration)
pub const INTERNAL_EXIT_CODE: u8 = 2;

/// Main error type for the search command builder
#[derive(Error, Debug)]
pub enum SearchError {
    /// Bad or missing command-line arguments
    #[error("{message}")]
    Usage { message: String },

    /// A value-taking flag was the last token
    #[error("missing value for {flag}")]
    MissingValue { flag: String },

    /// `--help` was given
    #[error("help requested")]
    HelpRequested,

    /// The parsed request failed validation
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    /// A delegate program could not be started
    #[error("failed to start {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A delegate program finished unsuccessfully
    #[error("{command} {}", describe_status(*exit_code))]
    Delegate {
        command: String,
        exit_code: Option<i32>,
    },

    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl SearchError {
    /// Create a new usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a new missing-value error for a flag token
    pub fn missing_value(flag: impl Into<String>) -> Self {
        Self::MissingValue { flag: flag.into() }
    }

    /// Create a new request validation error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create a new spawn error
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Create a new delegate execution error
    pub fn delegate(command: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self::Delegate {
            command: command.into(),
            exit_code,
        }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error should print the usage synopsis
    pub const fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::Usage { .. }
                | Self::MissingValue { .. }
                | Self::HelpRequested
                | Self::InvalidRequest { .. }
        )
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            _ if self.is_usage() => USAGE_EXIT_CODE,
            Self::Delegate { exit_code, .. } => exit_code
                .and_then(|code| u8::try_from(code).ok())
                .filter(|code| *code != 0)
                .unwrap_or(1),
            Self::Spawn { .. } => SPAWN_EXIT_CODE,
            _ => INTERNAL_EXIT_CODE,
        }
    }
}

fn describe_status(exit_code: Option<i32>) -> String {
    exit_code.map_or_else(
        || "was terminated by a signal".to_string(),
        |code| format!("exited with status {code}"),
    )
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_family_exit_code() {
        assert_eq!(SearchError::usage("x").exit_code(), USAGE_EXIT_CODE);
        assert_eq!(SearchError::missing_value("--dir").exit_code(), USAGE_EXIT_CODE);
        assert_eq!(SearchError::HelpRequested.exit_code(), USAGE_EXIT_CODE);
        assert!(SearchError::invalid_request("empty exclusion").is_usage());
    }

    #[test]
    fn test_delegate_status_is_propagated() {
        assert_eq!(SearchError::delegate("find .", Some(4)).exit_code(), 4);
        assert_eq!(SearchError::delegate("find .", None).exit_code(), 1);
        assert_eq!(SearchError::delegate("find .", Some(300)).exit_code(), 1);
        assert!(!SearchError::delegate("find .", Some(1)).is_usage());
    }

    #[test]
    fn test_delegate_display() {
        let err = SearchError::delegate("find .", Some(2));
        assert_eq!(err.to_string(), "find . exited with status 2");

        let err = SearchError::delegate("vim /tmp/x", None);
        assert_eq!(err.to_string(), "vim /tmp/x was terminated by a signal");
    }

    #[test]
    fn test_spawn_exit_code() {
        let err = SearchError::spawn(
            "nope",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.exit_code(), SPAWN_EXIT_CODE);
        assert_eq!(err.to_string(), "failed to start nope");
    }
}
