use crate::shell::builtins::{self, Builtin};
use crate::shell::command::Command;
use crate::shell::context::ShellContext;
use crate::shell::error::ShellError;
use crate::shell::resolver::{find_full_path, is_builtin};
use crate::shell::system::spawn_and_wait;
use crate::shell::Outcome;
use log::debug;
use std::io::Write;

/// Where `Dispatch` sends a command. Exactly one branch runs per command.
enum Route {
    BuiltinRun(&'static dyn Builtin),
    ChildSpawn,
}

fn dispatch(cmd: &Command) -> Route {
    if is_builtin(cmd) {
        if let Some(builtin) = builtins::lookup(cmd.verb()) {
            return Route::BuiltinRun(builtin);
        }
    }
    Route::ChildSpawn
}

/// Runs one command to completion.
///
/// Failures never escape: they are written to `out` (command not found) or
/// `err` (everything else) and turned into a failure status.
pub fn execute(
    mut cmd: Command,
    ctx: &mut ShellContext,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Outcome {
    let result = match dispatch(&cmd) {
        Route::BuiltinRun(builtin) => {
            debug!("running builtin {}", builtin.name());
            builtin.run(&cmd, ctx)
        }
        Route::ChildSpawn => spawn_resolved(&mut cmd, ctx, out),
    };

    match result {
        Ok(outcome) => outcome,
        Err(e) => {
            report(&e, out, err);
            Outcome::Status(e.status())
        }
    }
}

fn spawn_resolved(
    cmd: &mut Command,
    ctx: &ShellContext,
    out: &mut dyn Write,
) -> Result<Outcome, ShellError> {
    find_full_path(cmd, ctx)?;
    // Anything we printed so far must land before the child's output.
    out.flush().ok();
    spawn_and_wait(cmd, ctx).map(Outcome::Status)
}

pub(crate) fn report(e: &ShellError, out: &mut dyn Write, err: &mut dyn Write) {
    if e.goes_to_stdout() {
        writeln!(out, "{}", e).ok();
        out.flush().ok();
    } else {
        writeln!(err, "{}", e).ok();
        err.flush().ok();
    }
}
