use shipkit_ops::ops_deploy::deploy;
use tempfile::TempDir;

const MANIFEST: &str = r#"
[project]
name = "mygame"
version = "1.0.0"

[android]
package = "com.example.mygame"

[[modules]]
name = "ads-admob"
classpath = "com.example.shipkit.AdMobModule"

[[modules]]
name = "social-fb"
classpath = "com.example.shipkit.FacebookModule"

[[modules]]
name = "analytics-flurry"
classpath = "com.example.shipkit.FlurryModule"
enabled = false
"#;

fn project_with(manifest: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("Shipkit.toml"), manifest).unwrap();
    tmp
}

#[test]
fn test_deploy_writes_gradle_with_enabled_modules() {
    let tmp = project_with(MANIFEST);
    let result = deploy(tmp.path(), "android", None, false).unwrap();

    assert_eq!(result.project_name, "mygame");
    assert_eq!(result.modules_registered, 2);
    assert_eq!(
        result.output_dir,
        tmp.path().join("deploy").join("android")
    );

    let content = std::fs::read_to_string(&result.build_gradle).unwrap();
    let ads = content.find("'ads-com.example.shipkit.AdMobModule',").unwrap();
    let social = content
        .find("'social-com.example.shipkit.FacebookModule',")
        .unwrap();
    assert!(ads < social, "declaration order not preserved");
    assert!(
        !content.contains("FlurryModule"),
        "disabled module must not be registered"
    );
}

#[test]
fn test_deploy_honors_explicit_output_dir() {
    let tmp = project_with(MANIFEST);
    let out = TempDir::new().unwrap();

    let result = deploy(tmp.path(), "android", Some(out.path()), false).unwrap();
    assert_eq!(result.output_dir, out.path());
    assert!(out.path().join("app").join("build.gradle").is_file());
}

#[test]
fn test_deploy_rejects_unknown_target() {
    let tmp = project_with(MANIFEST);
    let err = deploy(tmp.path(), "ios", None, false).unwrap_err();
    assert!(
        err.to_string().contains("unsupported deploy target 'ios'"),
        "got: {err}"
    );
}

#[test]
fn test_deploy_fails_without_manifest() {
    let tmp = TempDir::new().unwrap();
    let err = deploy(tmp.path(), "android", None, false).unwrap_err();
    assert!(err.to_string().contains("Manifest error"), "got: {err}");
}

#[test]
fn test_deploy_fails_without_android_section() {
    let tmp = project_with(
        r#"
[project]
name = "mygame"
version = "1.0"
"#,
    );
    let err = deploy(tmp.path(), "android", None, false).unwrap_err();
    assert!(err.to_string().contains("no [android] section"), "got: {err}");
}

#[test]
fn test_deploy_aborts_on_module_without_classpath() {
    let tmp = project_with(
        r#"
[project]
name = "mygame"
version = "1.0"

[android]
package = "com.example.mygame"

[[modules]]
name = "ads-admob"
"#,
    );
    let err = deploy(tmp.path(), "android", None, false).unwrap_err();
    assert!(
        err.to_string().contains("missing required key 'classpath'"),
        "got: {err}"
    );
    assert!(
        !tmp
            .path()
            .join("deploy")
            .join("android")
            .join("app")
            .join("build.gradle")
            .exists(),
        "no output must be written for a failed run"
    );
}

#[test]
fn test_deploy_without_modules_renders_empty_list() {
    let tmp = project_with(
        r#"
[project]
name = "mygame"
version = "1.0"

[android]
package = "com.example.mygame"
"#,
    );
    let result = deploy(tmp.path(), "android", None, false).unwrap();
    assert_eq!(result.modules_registered, 0);
    let content = std::fs::read_to_string(&result.build_gradle).unwrap();
    assert!(content.contains("sdkModulesClasspath = ["));
}
