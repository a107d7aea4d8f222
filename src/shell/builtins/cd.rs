use crate::shell::builtins::Builtin;
use crate::shell::builtins::common::resolve_path;
use crate::shell::command::Command;
use crate::shell::context::ShellContext;
use crate::shell::error::ShellError;
use crate::shell::{Outcome, SUCCESS};
use log::info;
use std::fs;

pub struct CdCommand;

impl Builtin for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn run(&self, cmd: &Command, ctx: &mut ShellContext) -> Result<Outcome, ShellError> {
        let target = match cmd.args() {
            [] => ctx.config.home.clone().ok_or(ShellError::HomeNotSet)?,
            [dir] => dir.clone(),
            _ => return Err(ShellError::TooManyArguments),
        };

        let new_path = resolve_path(ctx, &target);
        let meta = fs::metadata(&new_path).map_err(|source| ShellError::ChangeDir {
            path: target.clone().into(),
            source,
        })?;
        if !meta.is_dir() {
            return Err(ShellError::NotADirectory(target.into()));
        }

        // Canonicalize to remove .. and .
        ctx.cwd = new_path.canonicalize().unwrap_or(new_path);
        info!("cd: now in {}", ctx.cwd.display());
        Ok(Outcome::Status(SUCCESS))
    }
}
