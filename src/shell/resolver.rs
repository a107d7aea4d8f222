use std::fs;
use std::path::{Path, PathBuf};
use log::debug;
use crate::shell::builtins;
use crate::shell::command::Command;
use crate::shell::context::ShellContext;
use crate::shell::error::ShellError;

/// True only for the exact verbs `cd` and `exit`.
pub fn is_builtin(cmd: &Command) -> bool {
    builtins::lookup(cmd.verb()).is_some()
}

/// Looks the verb up on the configured `PATH` and rewrites argument 0 to the
/// first hit. On a miss the command is left untouched.
pub fn find_full_path(cmd: &mut Command, ctx: &ShellContext) -> Result<PathBuf, ShellError> {
    let search_path = ctx.config.path.as_deref().unwrap_or("");
    let found = find_in_search_path(
        cmd.verb(),
        search_path,
        &ctx.cwd,
        ctx.config.require_executable,
    );

    match found {
        Some(path) => {
            debug!("resolved {} to {}", cmd.verb(), path.display());
            cmd.set_verb(path.to_string_lossy().into_owned());
            Ok(path)
        }
        None => Err(ShellError::CommandNotFound(cmd.verb().to_string())),
    }
}

/// Walks `search_path` in order and returns `<dir>/<verb>` for the first
/// directory holding a regular file of that name. Empty entries are skipped;
/// relative ones are taken against `cwd`.
pub fn find_in_search_path(
    verb: &str,
    search_path: &str,
    cwd: &Path,
    require_executable: bool,
) -> Option<PathBuf> {
    if verb.is_empty() {
        return None;
    }

    for dir in search_path.split(':').filter(|d| !d.is_empty()) {
        let candidate = PathBuf::from(format!("{}/{}", dir.trim_end_matches('/'), verb));
        let candidate = if candidate.is_absolute() {
            candidate
        } else {
            cwd.join(candidate)
        };

        let Ok(meta) = fs::metadata(&candidate) else {
            continue;
        };
        if !meta.is_file() {
            continue;
        }
        if require_executable && !is_executable(&meta) {
            debug!("skipping {}: not executable", candidate.display());
            continue;
        }
        return Some(candidate);
    }
    None
}

#[cfg(unix)]
fn is_executable(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &fs::Metadata) -> bool {
    true
}
