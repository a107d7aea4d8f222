use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::shell::{ExitCode, FAILURE};

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("empty input")]
    EmptyInput,

    #[error("input is not valid UTF-8 (byte {offset})")]
    InvalidUtf8 { offset: usize },

    #[error("argument {index} is {len} bytes long (limit is {max})")]
    ArgumentTooLong { index: usize, len: usize, max: usize },

    #[error("Command {0} not found!")]
    CommandNotFound(String),

    #[error("cd: Too many arguments")]
    TooManyArguments,

    #[error("cd: HOME not set")]
    HomeNotSet,

    #[error("cd: {}: {source}", .path.display())]
    ChangeDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cd: {}: Not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("{}: cannot execute: {source}", .program.display())]
    SpawnFailed {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: wait failed: {source}", .program.display())]
    Wait {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ShellError {
    /// Status reported for a command that failed with this error.
    pub fn status(&self) -> ExitCode {
        match self {
            ShellError::SpawnFailed { .. } => 126,
            _ => FAILURE,
        }
    }

    /// Not-found is the one diagnostic that belongs on the output stream.
    pub fn goes_to_stdout(&self) -> bool {
        matches!(self, ShellError::CommandNotFound(_))
    }
}
