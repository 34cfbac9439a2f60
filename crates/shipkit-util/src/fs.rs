use std::path::{Path, PathBuf};

/// Search `start` and each of its ancestors for a directory containing a
/// file named `marker`, returning the first match.
///
/// Deploy commands run from anywhere inside a project tree; this is how
/// they climb back up to the project root (the directory holding
/// `Shipkit.toml`).
pub fn ascend_to_marker(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_file())
        .map(Path::to_path_buf)
}

/// Create `path` and any missing parents. Safe to call on a directory
/// that already exists; generated output trees (`deploy/<target>/app`)
/// are rebuilt through this on every run.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}
