use serde::{Deserialize, Serialize};

/// One `[[modules]]` entry of the deployment manifest: a pluggable SDK
/// module (ads, analytics, social, etc.) integrated into the generated
/// native project.
///
/// Module names follow the `<type>-<name>` convention, e.g. `ads-admob`
/// or `analytics-flurry`. The part before the first hyphen is the module
/// type; see [`module_type`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdkModule {
    pub name: String,

    /// Fully-qualified Java class name the Android build must link for
    /// this module. Required by the Android deploy pass; validated there
    /// rather than at parse time so `shipkit check` can report every
    /// violation at once.
    #[serde(default)]
    pub classpath: Option<String>,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Extract the type prefix from a module name: the substring before the
/// first hyphen.
///
/// A name with no hyphen yields the empty string, not the full name.
/// Generated build files group classpath entries as `<type>-<classpath>`,
/// and a name outside the `<type>-<name>` convention deliberately maps to
/// an empty type rather than being mistaken for one.
///
/// ```
/// use shipkit_core::module::module_type;
///
/// assert_eq!(module_type("ads-admob"), "ads");
/// assert_eq!(module_type("analytics"), "");
/// ```
pub fn module_type(module_name: &str) -> &str {
    match module_name.find('-') {
        Some(pos) => &module_name[..pos],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_type_returns_prefix_before_first_hyphen() {
        assert_eq!(module_type("ads-admob"), "ads");
        assert_eq!(module_type("social-fb"), "social");
    }

    #[test]
    fn test_module_type_uses_first_hyphen_only() {
        assert_eq!(module_type("ads-admob-banner"), "ads");
    }

    #[test]
    fn test_module_type_no_hyphen_is_empty() {
        assert_eq!(module_type("analytics"), "");
    }

    #[test]
    fn test_module_type_leading_hyphen_is_empty() {
        assert_eq!(module_type("-admob"), "");
    }

    #[test]
    fn test_module_type_empty_input() {
        assert_eq!(module_type(""), "");
    }
}
