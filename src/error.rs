use crate::command::CommandLine;
use crate::runner::ProgramResult;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RunError>;

#[derive(Error, Debug)]
pub enum RunError {
    #[error("No program given")]
    EmptyCommand,

    #[error("Failed to run program {:?}: {source}", .cmd_line.as_slice())]
    Launch {
        cmd_line: CommandLine,
        source: std::io::Error,
    },

    #[error("{}", .result.error_msg().unwrap_or_default())]
    NonZeroExit { result: Box<ProgramResult> },
}

impl RunError {
    /// The captured result of a program that exited non-zero, if that is what failed.
    pub fn result(&self) -> Option<&ProgramResult> {
        match self {
            RunError::NonZeroExit { result } => Some(result),
            _ => None,
        }
    }

    pub fn into_result(self) -> Option<ProgramResult> {
        match self {
            RunError::NonZeroExit { result } => Some(*result),
            _ => None,
        }
    }
}
