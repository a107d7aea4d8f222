use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "minish", version, about = "Minish: a minimal interactive command shell")]
pub struct Cli {
    /// Run a single command line, then exit with its status
    #[arg(short = 'c', long = "command")]
    pub command: Option<String>,

    /// Load settings (prompt, require_executable, max_arg_len) from a TOML file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Only resolve PATH entries that carry an executable bit
    #[arg(long = "strict-path")]
    pub strict_path: bool,

    /// Prompt shown before each line in interactive mode
    #[arg(long)]
    pub prompt: Option<String>,
}
