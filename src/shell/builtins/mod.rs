pub mod cd;
pub mod exit;
mod common; // Private helpers

use crate::shell::command::Command;
use crate::shell::context::ShellContext;
use crate::shell::error::ShellError;
use crate::shell::Outcome;

/// A verb the shell carries out itself instead of spawning a program.
pub trait Builtin: Send + Sync {
    fn name(&self) -> &'static str;
    fn run(&self, cmd: &Command, ctx: &mut ShellContext) -> Result<Outcome, ShellError>;
}

/// Exact, case-sensitive match on the verb.
pub fn lookup(verb: &str) -> Option<&'static dyn Builtin> {
    match verb {
        "cd" => Some(&cd::CdCommand),
        "exit" => Some(&exit::ExitCommand),
        _ => None,
    }
}
