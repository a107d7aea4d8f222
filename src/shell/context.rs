use std::path::PathBuf;
use crate::config::ShellConfig;
use crate::shell::ExitCode;

/// Per-shell state threaded through the executor.
///
/// `cwd` is where `cd` lands and where every child starts; the process's own
/// working directory is never changed.
#[derive(Debug, Clone)]
pub struct ShellContext {
    pub cwd: PathBuf,
    pub config: ShellConfig,
    pub last_status: ExitCode,
}

impl ShellContext {
    pub fn new(config: ShellConfig) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::with_cwd(config, cwd)
    }

    pub fn with_cwd(config: ShellConfig, cwd: PathBuf) -> Self {
        Self {
            cwd,
            config,
            last_status: 0,
        }
    }
}
