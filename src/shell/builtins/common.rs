use std::path::{Path, PathBuf};
use crate::shell::context::ShellContext;

pub fn resolve_path(ctx: &ShellContext, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        ctx.cwd.join(p)
    }
}
