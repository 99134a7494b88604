use std::path::{Path, PathBuf};

use xshell::Shell;

/// Project root directory
pub fn project_root() -> PathBuf {
    let xtask = xtask_root();
    xtask.parent().map(Path::to_path_buf).unwrap_or(xtask)
}

/// Xtask directory
pub fn xtask_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Settings file shared by the app metadata and the tasks.
pub fn config_path() -> PathBuf {
    project_root().join("xtask.toml")
}

/// Shell rooted at the project directory.
pub fn project_shell() -> anyhow::Result<Shell> {
    let sh = Shell::new()?;
    sh.change_dir(project_root());
    Ok(sh)
}

/// Splits a comma separated list, dropping empty entries.
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
