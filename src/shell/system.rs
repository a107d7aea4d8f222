use crate::shell::command::Command;
use crate::shell::context::ShellContext;
use crate::shell::error::ShellError;
use crate::shell::ExitCode;
use log::debug;
use std::path::PathBuf;
use std::process::{self, ExitStatus, Stdio};

/// Runs an already resolved command as a child and blocks until it exits.
///
/// Argument 0 must hold the resolved path. The child inherits the
/// environment and all three standard streams and starts in `ctx.cwd`.
/// A program that cannot be loaded is reported here, in the parent, by the
/// spawn call itself; no shell code ever runs in the child.
pub fn spawn_and_wait(cmd: &Command, ctx: &ShellContext) -> Result<ExitCode, ShellError> {
    let program = PathBuf::from(cmd.verb());

    let mut child = process::Command::new(&program)
        .args(cmd.args())
        .current_dir(&ctx.cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| ShellError::SpawnFailed {
            program: program.clone(),
            source,
        })?;

    debug!("spawned {:?} as pid {}", cmd.argv(), child.id());

    let status = child
        .wait()
        .map_err(|source| ShellError::Wait { program, source })?;

    debug!("child exited with {}", status);
    Ok(status_code(status))
}

fn status_code(status: ExitStatus) -> ExitCode {
    match status.code() {
        Some(code) => code,
        None => terminated_by_signal(status),
    }
}

#[cfg(unix)]
fn terminated_by_signal(status: ExitStatus) -> ExitCode {
    use std::os::unix::process::ExitStatusExt;
    match status.signal() {
        Some(signal) => 128 + signal,
        None => 1,
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_status: ExitStatus) -> ExitCode {
    1
}
