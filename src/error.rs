use std::io;
use thiserror::Error;

/// Errors raised while reading, tokenizing or running a command line.
///
/// Fatal variants end the whole shell; every other variant is reported on
/// stderr and the read loop carries on.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("allocation error")]
    Allocation,

    #[error("command stream error: {0}")]
    Input(#[source] io::Error),

    #[error("expected argument to \"{0}\"")]
    MissingArgument(&'static str),

    #[error("cd: {path}: {source}")]
    ChangeDir {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{0}: command not found")]
    CommandNotFound(String),

    #[error("{program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl ShellError {
    /// Whether the error must terminate the process rather than just the
    /// current command.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ShellError::Allocation | ShellError::Input(_))
    }
}

impl From<std::collections::TryReserveError> for ShellError {
    fn from(_: std::collections::TryReserveError) -> Self {
        ShellError::Allocation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_allocation_and_input_are_fatal() {
        assert!(ShellError::Allocation.is_fatal());
        assert!(ShellError::Input(io::Error::other("closed")).is_fatal());

        assert!(!ShellError::MissingArgument("cd").is_fatal());
        assert!(!ShellError::CommandNotFound("nope".into()).is_fatal());
        assert!(!ShellError::Output(io::Error::other("pipe")).is_fatal());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ShellError::MissingArgument("cd").to_string(),
            "expected argument to \"cd\""
        );
        assert_eq!(
            ShellError::CommandNotFound("xyz".into()).to_string(),
            "xyz: command not found"
        );
        assert_eq!(ShellError::Allocation.to_string(), "allocation error");
    }
}
