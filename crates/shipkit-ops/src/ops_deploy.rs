//! Operation: generate the native project for a deploy target.

use std::path::{Path, PathBuf};

use shipkit_core::build_config::BuildConfig;
use shipkit_core::context::DeployArgs;
use shipkit_core::manifest::Manifest;
use shipkit_util::errors::ShipkitError;

/// Outcome of a deploy run, for the CLI layer to print.
#[derive(Debug)]
pub struct DeployResult {
    pub project_name: String,
    pub modules_registered: usize,
    pub output_dir: PathBuf,
    pub build_gradle: PathBuf,
}

/// Generate the Android project for the game in `project_dir`.
///
/// Loads `Shipkit.toml`, seeds the per-run build configuration, applies
/// every enabled SDK module in declaration order, and renders the Gradle
/// output into `output` (default `<project>/deploy/android`).
///
/// A module missing its `classpath` aborts the whole run; an enabled
/// module that cannot be registered must not be silently skipped.
pub fn deploy(
    project_dir: &Path,
    target: &str,
    output: Option<&Path>,
    verbose: bool,
) -> miette::Result<DeployResult> {
    if target != "android" {
        return Err(ShipkitError::Target {
            message: format!("unsupported deploy target '{target}' (supported: android)"),
        }
        .into());
    }

    let manifest = Manifest::from_path(&project_dir.join(shipkit_core::MANIFEST_FILE))?;

    let output_dir = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| project_dir.join("deploy").join("android"));
    let args = DeployArgs::new(project_dir, &output_dir, verbose);

    let mut config = BuildConfig::for_android(&manifest)?;

    let mut registered = 0;
    for module in manifest.enabled_modules() {
        shipkit_android::sdk_module::apply_sdk_module(&args, &module.name, &mut config, module)?;
        registered += 1;
    }
    tracing::info!("registered {registered} SDK module(s) for '{}'", manifest.project.name);

    let build_gradle = shipkit_android::gradle::write_project(&args, &config)?;

    Ok(DeployResult {
        project_name: manifest.project.name,
        modules_registered: registered,
        output_dir,
        build_gradle,
    })
}
