//! Per-module Android hook: registers an SDK module's Java classpath in
//! the build configuration.

use shipkit_core::build_config::BuildConfig;
use shipkit_core::context::DeployArgs;
use shipkit_core::module::{module_type, SdkModule};
use shipkit_util::errors::ShipkitError;

/// Apply Android-specific changes to the build configuration for one SDK
/// module.
///
/// Appends `<type>-<classpath>` to the `sdk_modules_classpath` list,
/// creating the list on first registration. Entries accumulate in call
/// order and are never deduplicated; the generated Gradle file loads
/// module classes in exactly this order.
///
/// Fails with [`ShipkitError::MissingConfigKey`] when the module entry
/// carries no `classpath`, leaving `config` untouched. An enabled module
/// without a classpath cannot produce a working build, so the deploy run
/// aborts rather than silently skipping it.
pub fn apply_sdk_module(
    args: &DeployArgs,
    module_name: &str,
    config: &mut BuildConfig,
    module: &SdkModule,
) -> miette::Result<()> {
    let classpath = module
        .classpath
        .as_deref()
        .ok_or_else(|| ShipkitError::MissingConfigKey {
            module: module_name.to_string(),
            key: "classpath".to_string(),
        })?;

    let kind = module_type(module_name);
    let entry = format!("{kind}-{classpath}");
    tracing::debug!(
        "registering SDK module '{module_name}' as '{entry}' for {}",
        args.project_dir.display()
    );

    config
        .sdk_modules_classpath
        .get_or_insert_with(Vec::new)
        .push(entry);

    Ok(())
}
