use std::collections::BTreeMap;

use crate::manifest::Manifest;

/// Mutable build configuration for one target generation pass.
///
/// Seeded from the manifest when a deploy run starts, mutated in place by
/// per-platform hooks while SDK modules are applied, then rendered into
/// native build files and dropped. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct BuildConfig {
    /// Scalar settings fed to template interpolation (app name, package,
    /// SDK levels, ...).
    pub values: BTreeMap<String, String>,

    /// Classpath entries of registered SDK modules, in registration order.
    ///
    /// `None` until the first module registers; hooks create the list
    /// lazily. The list only grows within a run, and duplicate
    /// registrations produce duplicate entries.
    pub sdk_modules_classpath: Option<Vec<String>>,
}

impl BuildConfig {
    /// Seed a build configuration for the Android target from the manifest.
    ///
    /// Fails with a `Target` error when the manifest has no `[android]`
    /// section, since the Android pass cannot generate a project without
    /// at least a package name.
    pub fn for_android(manifest: &Manifest) -> miette::Result<Self> {
        let android = manifest.android.as_ref().ok_or_else(|| {
            shipkit_util::errors::ShipkitError::Target {
                message: format!(
                    "project '{}' has no [android] section in Shipkit.toml",
                    manifest.project.name
                ),
            }
        })?;

        let mut values = BTreeMap::new();
        values.insert("app_name".to_string(), manifest.project.name.clone());
        values.insert("app_version".to_string(), manifest.project.version.clone());
        values.insert("package".to_string(), android.package.clone());
        values.insert("min_sdk".to_string(), android.min_sdk.to_string());
        values.insert("target_sdk".to_string(), android.target_sdk.to_string());
        values.insert(
            "orientation".to_string(),
            android
                .orientation
                .clone()
                .unwrap_or_else(|| "landscape".to_string()),
        );

        Ok(Self {
            values,
            sdk_modules_classpath: None,
        })
    }

    /// Classpath entries registered so far, in registration order.
    /// An absent list reads the same as an empty one.
    pub fn sdk_classpath_entries(&self) -> &[String] {
        self.sdk_modules_classpath.as_deref().unwrap_or(&[])
    }
}
