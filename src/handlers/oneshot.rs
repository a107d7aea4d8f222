use std::io;
use log::debug;
use crate::shell::context::ShellContext;
use crate::shell::{ExitCode, run_line};

/// `minish -c LINE`: run one line and report its status.
pub fn handle_command(line: &str, ctx: &mut ShellContext) -> ExitCode {
    debug!("one-shot: {:?}", line);
    let outcome = run_line(line, ctx, &mut io::stdout(), &mut io::stderr());
    outcome.status()
}
