use shipkit_util::fs::{ascend_to_marker, ensure_dir};
use tempfile::TempDir;

#[test]
fn test_ascend_to_marker_in_start_dir() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("Shipkit.toml"), "").unwrap();
    let result = ascend_to_marker(tmp.path(), "Shipkit.toml");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_ascend_to_marker_climbs_ancestors() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("Shipkit.toml"), "").unwrap();
    let nested = tmp.path().join("assets").join("sprites").join("ui");
    std::fs::create_dir_all(&nested).unwrap();
    let result = ascend_to_marker(&nested, "Shipkit.toml");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_ascend_to_marker_prefers_nearest_match() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("Shipkit.toml"), "").unwrap();
    let sub = tmp.path().join("demo-game");
    std::fs::create_dir(&sub).unwrap();
    std::fs::write(sub.join("Shipkit.toml"), "").unwrap();
    let result = ascend_to_marker(&sub, "Shipkit.toml");
    assert_eq!(result, Some(sub));
}

#[test]
fn test_ascend_to_marker_not_found() {
    let tmp = TempDir::new().unwrap();
    let result = ascend_to_marker(tmp.path(), "NonExistent.file");
    assert_eq!(result, None);
}

#[test]
fn test_ascend_to_marker_ignores_directories_named_like_marker() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join("Shipkit.toml")).unwrap();
    let result = ascend_to_marker(tmp.path(), "Shipkit.toml");
    assert_eq!(result, None);
}

#[test]
fn test_ensure_dir_creates_nested() {
    let tmp = TempDir::new().unwrap();
    let deep = tmp.path().join("deploy").join("android").join("app");
    assert!(!deep.exists());
    ensure_dir(&deep).unwrap();
    assert!(deep.is_dir());
}

#[test]
fn test_ensure_dir_idempotent() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("already");
    std::fs::create_dir(&dir).unwrap();
    ensure_dir(&dir).unwrap();
    assert!(dir.is_dir());
}
