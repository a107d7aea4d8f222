mod cli;
mod config;
mod handlers;
mod shell;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::load_config;
use handlers::{oneshot, repl};
use shell::context::ShellContext;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if cli.strict_path {
        config.require_executable = true;
    }
    if let Some(prompt) = cli.prompt {
        config.prompt = prompt;
    }

    let mut ctx = ShellContext::new(config);
    let code = match cli.command {
        Some(line) => oneshot::handle_command(&line, &mut ctx),
        None => repl::handle_repl(&mut ctx)?,
    };

    // `exit` and end of input both end the process here, with no further work.
    std::process::exit(code);
}
