use crate::command::CommandLine;
use crate::error::{Result, RunError};
use log::{debug, error, warn};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output, Stdio};
use std::{env, fs};

/// What a single program invocation produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramResult {
    cmd_line: CommandLine,
    exit_code: i32,
    stdout: String,
    stderr: String,
    error_msg: Option<String>,
    program_path: PathBuf,
}

impl ProgramResult {
    pub fn cmd_line(&self) -> &CommandLine {
        &self.cmd_line
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Captured standard output, whitespace-trimmed.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Captured standard error, whitespace-trimmed.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Set exactly when the exit code is non-zero.
    pub fn error_msg(&self) -> Option<&str> {
        self.error_msg.as_deref()
    }

    /// Absolute, symlink-resolved path of the executable.
    pub fn program_path(&self) -> &Path {
        &self.program_path
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/**
Run a program to completion and collect its exit code and output.

The calling thread blocks until the child exits; there is no timeout. Standard input is
inherited, standard output and error are captured in full.

- `cmd` a program name or an argument list with the program first.
- `error_ok` when false, a non-zero exit is returned as [`RunError::NonZeroExit`]; when true it
  is returned as a [`ProgramResult`] carrying an error message.
*/
pub fn run_program(cmd: impl Into<CommandLine>, error_ok: bool) -> Result<ProgramResult> {
    let cmd_line = cmd.into();
    let program = cmd_line.program().ok_or(RunError::EmptyCommand)?;

    debug!("Running program {:?}", cmd_line.as_slice());
    let output = std::process::Command::new(program)
        .args(cmd_line.args())
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output();

    match output {
        Ok(output) => finish(cmd_line, output, error_ok),
        Err(source) => Err(launch_failed(cmd_line, source)),
    }
}

/// Same as [`run_program`], awaiting the child on the tokio runtime instead of blocking.
pub async fn run_program_async(
    cmd: impl Into<CommandLine>,
    error_ok: bool,
) -> Result<ProgramResult> {
    let cmd_line = cmd.into();
    let program = cmd_line.program().ok_or(RunError::EmptyCommand)?;

    debug!("Running program {:?}", cmd_line.as_slice());
    let output = tokio::process::Command::new(program)
        .args(cmd_line.args())
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await;

    match output {
        Ok(output) => finish(cmd_line, output, error_ok),
        Err(source) => Err(launch_failed(cmd_line, source)),
    }
}

fn launch_failed(cmd_line: CommandLine, source: std::io::Error) -> RunError {
    error!("Failed to run program {:?}: {}", cmd_line.as_slice(), source);
    RunError::Launch { cmd_line, source }
}

fn finish(cmd_line: CommandLine, output: Output, error_ok: bool) -> Result<ProgramResult> {
    let exit_code = exit_code(output.status);
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    let error_msg = (exit_code != 0).then(|| {
        format!(
            "Non-zero exit code {} from: {:?}, stdout: '{}', stderr: '{}'",
            exit_code,
            cmd_line.as_slice(),
            stdout,
            stderr
        )
    });

    let program_path = resolve_program_path(cmd_line.program().unwrap_or_default());
    let result = ProgramResult {
        cmd_line,
        exit_code,
        stdout,
        stderr,
        error_msg,
        program_path,
    };

    if result.error_msg.is_some() && !error_ok {
        return Err(RunError::NonZeroExit {
            result: Box::new(result),
        });
    }
    if let Some(msg) = &result.error_msg {
        warn!("{}", msg);
    }
    Ok(result)
}

/// The OS exit code, or the negated signal number for a child killed by a signal.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}

fn resolve_program_path(program: &str) -> PathBuf {
    which::which(program)
        .ok()
        .and_then(|path| fs::canonicalize(path).ok())
        .unwrap_or_else(|| {
            let joined = env::current_dir()
                .map(|cwd| cwd.join(program))
                .unwrap_or_else(|_| PathBuf::from(program));
            fs::canonicalize(&joined).unwrap_or(joined)
        })
}
