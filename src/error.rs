//! Error types and exit status for cmdhost.
//!
//! Three classes of failure exist, each with its own exit status:
//!
//! - configuration errors ([`ConfigError`]), raised while the host registers
//!   its commands or loads its settings
//! - usage errors, the user asked for something that does not exist
//! - runtime errors, a command's own run failed
//!
//! Command run functions use [`CmdResult`], an alias for `anyhow::Result`,
//! so they can attach context freely:
//!
//! ```ignore
//! let text = std::fs::read_to_string(path).context("reading manifest")?;
//! anyhow::ensure!(!text.is_empty(), "manifest is empty");
//! ```

use std::fmt;

/// Result type returned by command run functions.
pub type CmdResult<T> = anyhow::Result<T>;

/// Process exit status of one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The command completed.
    Success,
    /// The command reported a runtime error.
    Failure,
    /// The arguments did not name anything runnable.
    Usage,
    /// The command asked for a specific exit code through [`Exit`].
    Code(u8),
}

impl Status {
    /// Numeric process exit code.
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Failure => 1,
            Status::Usage => 2,
            Status::Code(code) => code,
        }
    }

    pub fn is_success(self) -> bool {
        self.code() == 0
    }
}

impl From<Status> for std::process::ExitCode {
    fn from(status: Status) -> Self {
        std::process::ExitCode::from(status.code())
    }
}

/// Error a command returns to end the process with an explicit exit code.
///
/// The dispatcher prints no diagnostic for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exit(pub u8);

impl fmt::Display for Exit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exit status {}", self.0)
    }
}

impl std::error::Error for Exit {}

/// Errors raised while setting up an application.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("command name must not be empty")]
    EmptyName,
    #[error("duplicate command name: {0}")]
    Duplicate(String),
    #[error("figment: {0}")]
    Figment(#[from] figment::Error),
}

/// Errors raised while resolving and running one invocation.
#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error("missing command")]
    MissingCommand,
    #[error("unknown subcommand {0}")]
    UnknownCommand(String),
    #[error("{source}")]
    InvalidFlags {
        command: String,
        #[source]
        source: clap::Error,
    },
    #[error("unknown help topic {0}")]
    UnknownTopic(String),
    #[error("too many arguments")]
    TooManyArguments,
    #[error("{source:#}")]
    Failed {
        command: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("exit status {0}")]
    Exit(u8),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl DispatchError {
    /// Exit status this error ends the process with.
    pub fn status(&self) -> Status {
        match self {
            DispatchError::MissingCommand
            | DispatchError::UnknownCommand(_)
            | DispatchError::InvalidFlags { .. }
            | DispatchError::UnknownTopic(_)
            | DispatchError::TooManyArguments => Status::Usage,
            DispatchError::Failed { .. } | DispatchError::Io(_) => Status::Failure,
            DispatchError::Exit(code) => Status::Code(*code),
        }
    }

    /// Wraps a run error, unless the command signalled an explicit exit.
    pub(crate) fn from_run(command: &str, source: anyhow::Error) -> Self {
        match source.downcast::<Exit>() {
            Ok(Exit(code)) => DispatchError::Exit(code),
            Err(source) => DispatchError::Failed {
                command: command.to_owned(),
                source,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Status::Success.code(), 0);
        assert_eq!(Status::Failure.code(), 1);
        assert_eq!(Status::Usage.code(), 2);
        assert_eq!(Status::Code(42).code(), 42);
        assert!(Status::Code(0).is_success());
        assert!(!Status::Usage.is_success());
    }

    #[test]
    fn test_run_error_classification() {
        let err = DispatchError::from_run("build", anyhow::Error::new(Exit(3)));
        assert_eq!(err.status(), Status::Code(3));

        let err = DispatchError::from_run("build", anyhow::anyhow!("no sources"));
        assert_eq!(err.status(), Status::Failure);
        assert_eq!(err.to_string(), "no sources");
    }

    #[test]
    fn test_failed_keeps_context_chain() {
        let source = anyhow::anyhow!("disk full").context("writing output");
        let err = DispatchError::from_run("build", source);
        assert_eq!(err.to_string(), "writing output: disk full");
    }
}
