use crate::shell::builtins::Builtin;
use crate::shell::command::Command;
use crate::shell::context::ShellContext;
use crate::shell::error::ShellError;
use crate::shell::{Outcome, SUCCESS};
use log::warn;

pub struct ExitCommand;

impl Builtin for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn run(&self, cmd: &Command, _ctx: &mut ShellContext) -> Result<Outcome, ShellError> {
        if !cmd.args().is_empty() {
            warn!("exit: ignoring arguments {:?}", cmd.args());
        }
        Ok(Outcome::Exit(SUCCESS))
    }
}
