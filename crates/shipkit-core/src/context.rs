use std::path::{Path, PathBuf};

/// Context for one deploy invocation, passed through to every
/// per-platform hook.
///
/// Hooks receive the full context even when their logic only needs part
/// of it; the signature is shared across platforms.
#[derive(Debug, Clone)]
pub struct DeployArgs {
    /// Project root (the directory containing `Shipkit.toml`).
    pub project_dir: PathBuf,

    /// Directory the native project is generated into.
    pub output_dir: PathBuf,

    pub verbose: bool,
}

impl DeployArgs {
    pub fn new(project_dir: &Path, output_dir: &Path, verbose: bool) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            verbose,
        }
    }
}
