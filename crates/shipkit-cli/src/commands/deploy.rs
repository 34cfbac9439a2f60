//! Deploy command implementation.

use std::path::Path;

use miette::Result;
use shipkit_util::progress::{status, status_info};

pub fn exec(target: &str, output: Option<&Path>, verbose: bool) -> Result<()> {
    let project_dir = super::project_root()?;

    let result = shipkit_ops::ops_deploy::deploy(&project_dir, target, output, verbose)?;

    status(
        "Deployed",
        &format!(
            "{target} project for '{}' ({} SDK module(s))",
            result.project_name, result.modules_registered
        ),
    );
    status_info("Output", &result.output_dir.display().to_string());
    if verbose {
        status_info("Build file", &result.build_gradle.display().to_string());
    }

    Ok(())
}
