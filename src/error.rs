//! Error types for Ansel
//!
//! Uses `thiserror` for library errors. External tools print their own
//! diagnostics on inherited stdio; these variants only carry the exit
//! status needed to propagate failure to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Ansel operations
pub type AnselResult<T> = Result<T, AnselError>;

/// Main error type for Ansel operations
#[derive(Error, Debug)]
pub enum AnselError {
    /// Remote target descriptor is not configured
    #[error("no remote target configured - set SCP_TARGET or [remote] target in ansel.toml")]
    MissingRemoteTarget,

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Gallery builder binary could not be started
    #[error("gallery builder '{command}' could not be started: {source}")]
    BuilderNotFound {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Gallery builder exited with a non-zero status
    #[error("gallery build failed with exit code {code:?}")]
    BuilderFailed { code: Option<i32> },

    /// rsync binary could not be started
    #[error("rsync could not be started: {source}")]
    TransferNotFound {
        #[source]
        source: std::io::Error,
    },

    /// Transfer agent exited with a non-zero status
    #[error("transfer failed with exit code {code:?}")]
    TransferFailed { code: Option<i32> },

    /// Build output directory is absent or empty
    #[error("build output {path} is missing or empty - run 'ansel build' first")]
    BuildOutputMissing { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnselError {
    /// Process exit code for this error.
    ///
    /// Configuration errors exit 2; tool failures propagate the child's
    /// own exit code where it exited normally.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingRemoteTarget | Self::InvalidConfig { .. } => 2,
            Self::BuilderFailed { code: Some(code) } | Self::TransferFailed { code: Some(code) }
                if *code > 0 =>
            {
                *code
            }
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_missing_remote_target() {
        let err = AnselError::MissingRemoteTarget;
        assert_eq!(
            err.to_string(),
            "no remote target configured - set SCP_TARGET or [remote] target in ansel.toml"
        );
    }

    #[test]
    fn test_error_display_build_output_missing() {
        let err = AnselError::BuildOutputMissing {
            path: PathBuf::from("/site/build"),
        };
        assert_eq!(
            err.to_string(),
            "build output /site/build is missing or empty - run 'ansel build' first"
        );
    }

    #[test]
    fn test_exit_code_config_errors() {
        assert_eq!(AnselError::MissingRemoteTarget.exit_code(), 2);
        assert_eq!(
            AnselError::InvalidConfig {
                file: PathBuf::from("ansel.toml"),
                message: "bad".to_string(),
            }
            .exit_code(),
            2
        );
    }

    #[test]
    fn test_exit_code_propagates_tool_status() {
        assert_eq!(AnselError::BuilderFailed { code: Some(2) }.exit_code(), 2);
        assert_eq!(AnselError::TransferFailed { code: Some(23) }.exit_code(), 23);
    }

    #[test]
    fn test_exit_code_killed_tool_falls_back_to_one() {
        // A child killed by a signal has no exit code
        assert_eq!(AnselError::BuilderFailed { code: None }.exit_code(), 1);
        assert_eq!(AnselError::TransferFailed { code: Some(0) }.exit_code(), 1);
    }
}
