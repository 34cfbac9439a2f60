//! Operation: validate the deployment manifest without generating output.

use std::path::Path;

use shipkit_core::manifest::Manifest;

/// Result of a manifest check.
#[derive(Debug)]
pub struct CheckResult {
    pub project_name: String,
    pub modules_checked: usize,
    /// Enabled modules missing their `classpath`, in declaration order.
    pub missing_classpath: Vec<String>,
    pub has_android_target: bool,
}

impl CheckResult {
    pub fn is_ok(&self) -> bool {
        self.missing_classpath.is_empty() && self.has_android_target
    }
}

/// Parse the manifest and report every enabled module that would make a
/// deploy run fail. Unlike [`crate::ops_deploy::deploy`], which aborts on
/// the first bad module, this collects all violations so they can be
/// fixed in one pass.
pub fn check(project_dir: &Path) -> miette::Result<CheckResult> {
    let manifest = Manifest::from_path(&project_dir.join(shipkit_core::MANIFEST_FILE))?;

    let mut missing = Vec::new();
    let mut checked = 0;
    for module in manifest.enabled_modules() {
        checked += 1;
        if module.classpath.is_none() {
            missing.push(module.name.clone());
        }
    }

    Ok(CheckResult {
        project_name: manifest.project.name,
        modules_checked: checked,
        missing_classpath: missing,
        has_android_target: manifest.android.is_some(),
    })
}
