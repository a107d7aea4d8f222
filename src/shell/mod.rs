pub mod builtins;
pub mod command;
pub mod context;
pub mod error;
pub mod executor;
pub mod parser;
pub mod resolver;
pub mod system;

use context::ShellContext;
use error::ShellError;
use executor::{execute, report};
use std::io::Write;


/// Conventional process status: 0 is success, anything else a failure.
pub type ExitCode = i32;

pub const SUCCESS: ExitCode = 0;
pub const FAILURE: ExitCode = 1;

/// What the driver should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading input; the command finished with this status.
    Status(ExitCode),
    /// Terminate the shell right away with this status.
    Exit(ExitCode),
}

impl Outcome {
    pub fn status(&self) -> ExitCode {
        match self {
            Outcome::Status(code) | Outcome::Exit(code) => *code,
        }
    }
}

/// Parses and executes one input line.
///
/// A blank line is a no-op that keeps the previous status.
pub fn run_line(
    line: &str,
    ctx: &mut ShellContext,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Outcome {
    let outcome = match parser::parse(line, ctx.config.max_arg_len) {
        Ok(cmd) => execute(cmd, ctx, out, err),
        Err(ShellError::EmptyInput) => Outcome::Status(ctx.last_status),
        Err(e) => {
            report(&e, out, err);
            Outcome::Status(e.status())
        }
    };
    ctx.last_status = outcome.status();
    outcome
}

/// [`run_line`] for raw input bytes.
///
/// Input that is not valid UTF-8 is refused rather than rewritten, so a child
/// never receives arguments that differ from what was typed.
pub fn run_raw_line(
    line: &[u8],
    ctx: &mut ShellContext,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Outcome {
    match std::str::from_utf8(line) {
        Ok(text) => run_line(text, ctx, out, err),
        Err(utf8) => {
            let e = ShellError::InvalidUtf8 {
                offset: utf8.valid_up_to(),
            };
            report(&e, out, err);
            ctx.last_status = e.status();
            Outcome::Status(ctx.last_status)
        }
    }
}
