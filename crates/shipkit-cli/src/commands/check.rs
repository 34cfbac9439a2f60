//! Check command implementation.

use miette::Result;
use shipkit_util::errors::ShipkitError;
use shipkit_util::progress::{status, status_info, status_warn};

pub fn exec(verbose: bool) -> Result<()> {
    let project_dir = super::project_root()?;

    let result = shipkit_ops::ops_check::check(&project_dir)?;

    if verbose {
        status_info(
            "Checked",
            &format!(
                "{} enabled module(s) in '{}'",
                result.modules_checked, result.project_name
            ),
        );
    }

    if !result.has_android_target {
        status_warn("Warning", "Shipkit.toml has no [android] section");
    }
    for name in &result.missing_classpath {
        status_warn(
            "Missing",
            &format!("module '{name}' is enabled but has no classpath"),
        );
    }

    if result.is_ok() {
        status("Finished", "manifest is deployable");
        Ok(())
    } else {
        Err(ShipkitError::Generic {
            message: "manifest check failed".to_string(),
        }
        .into())
    }
}
