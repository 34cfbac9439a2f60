//! Gradle build-file rendering for the generated Android project.
//!
//! The build.gradle skeleton is compiled into the binary via `include_str!`
//! and filled with simple `{{variable}}` interpolation from the build
//! configuration.

use std::path::PathBuf;

use shipkit_core::build_config::BuildConfig;
use shipkit_core::context::DeployArgs;
use shipkit_util::errors::ShipkitError;

const BUILD_GRADLE_TEMPLATE: &str = include_str!("../templates/build.gradle");

/// Render the `build.gradle` content for the given build configuration.
///
/// Scalar values replace their `{{key}}` placeholders; the registered SDK
/// module classpath entries expand to one quoted line each, preserving
/// registration order. A run with no registered modules renders an empty
/// list.
pub fn render_build_gradle(config: &BuildConfig) -> String {
    let mut result = BUILD_GRADLE_TEMPLATE.to_string();
    for (key, value) in &config.values {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    let entries = config
        .sdk_classpath_entries()
        .iter()
        .map(|e| format!("        '{e}',"))
        .collect::<Vec<_>>()
        .join("\n");
    result.replace("{{sdkmodules_classpath}}", &entries)
}

/// Render the Android project skeleton into the output directory and
/// write `app/build.gradle`. Rerunning a deploy overwrites the previous
/// output.
pub fn write_project(args: &DeployArgs, config: &BuildConfig) -> miette::Result<PathBuf> {
    let app_dir = args.output_dir.join("app");
    shipkit_util::fs::ensure_dir(&app_dir).map_err(ShipkitError::Io)?;

    let gradle_path = app_dir.join("build.gradle");
    let content = render_build_gradle(config);
    std::fs::write(&gradle_path, content).map_err(ShipkitError::Io)?;

    tracing::debug!("wrote {}", gradle_path.display());
    Ok(gradle_path)
}
