//! Run a program to completion and capture what it did.
//!
//! [`run_program`] launches a command, waits for it to exit and returns a [`ProgramResult`]
//! with the command line, exit code, trimmed output and the resolved executable path.

pub mod command;
pub mod error;
pub mod runner;

pub use command::CommandLine;
pub use error::{Result, RunError};
pub use runner::{run_program, run_program_async, ProgramResult};
