//! High-level operations wiring CLI commands to the shipkit subsystems.

pub mod ops_check;
pub mod ops_deploy;
pub mod ops_modules;

use std::path::{Path, PathBuf};

use shipkit_util::errors::ShipkitError;

/// Locate the project root by walking up from `start` until a
/// `Shipkit.toml` is found.
pub fn find_project_root(start: &Path) -> miette::Result<PathBuf> {
    shipkit_util::fs::ascend_to_marker(start, shipkit_core::MANIFEST_FILE).ok_or_else(|| {
        ShipkitError::Manifest {
            message: format!(
                "No {} found in {} or any parent directory",
                shipkit_core::MANIFEST_FILE,
                start.display()
            ),
        }
        .into()
    })
}
