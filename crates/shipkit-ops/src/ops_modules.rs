//! Operation: list SDK modules declared in the manifest.

use std::path::Path;

use serde::Serialize;
use shipkit_core::manifest::Manifest;
use shipkit_core::module::module_type;

/// One row of `shipkit modules` output.
#[derive(Debug, Serialize)]
pub struct ModuleInfo {
    pub name: String,
    /// Type prefix extracted from the name; empty for names outside the
    /// `<type>-<name>` convention.
    pub kind: String,
    pub classpath: Option<String>,
    pub enabled: bool,
}

/// List every declared SDK module (enabled or not) in declaration order.
pub fn list(project_dir: &Path) -> miette::Result<Vec<ModuleInfo>> {
    let manifest = Manifest::from_path(&project_dir.join(shipkit_core::MANIFEST_FILE))?;

    Ok(manifest
        .modules
        .iter()
        .map(|m| ModuleInfo {
            name: m.name.clone(),
            kind: module_type(&m.name).to_string(),
            classpath: m.classpath.clone(),
            enabled: m.enabled,
        })
        .collect())
}
