use anyhow::{Context, Result};
use colored::*;
use log::debug;
use std::io::{self, BufRead, IsTerminal, Write};
use crate::shell::context::ShellContext;
use crate::shell::{ExitCode, Outcome, run_raw_line};

/// Reads lines from stdin until `exit` or end of input.
///
/// The prompt is only printed when stdin is a terminal, so redirected runs
/// produce nothing but the commands' own output.
pub fn handle_repl(ctx: &mut ShellContext) -> Result<ExitCode> {
    let interactive = io::stdin().is_terminal();
    if interactive {
        // Ctrl-C should stop the foreground child, not the shell.
        ctrlc::set_handler(|| debug!("interrupt received"))
            .context("Failed to install interrupt handler")?;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::new();

    loop {
        if interactive {
            print!("{}", ctx.config.prompt.green().bold());
            io::stdout().flush().context("Failed to flush prompt")?;
        }

        buf.clear();
        let read = input.read_until(b'\n', &mut buf).context("Failed to read input")?;
        if read == 0 {
            if interactive {
                println!();
            }
            debug!("end of input, last status {}", ctx.last_status);
            return Ok(ctx.last_status);
        }

        let mut line = buf.as_slice();
        while let [rest @ .., b'\n' | b'\r'] = line {
            line = rest;
        }

        let outcome = run_raw_line(line, ctx, &mut io::stdout(), &mut io::stderr());
        if let Outcome::Exit(code) = outcome {
            return Ok(code);
        }
    }
}
