use super::*;

#[test]
fn test_file_stem() {
    assert_eq!(file_stem("table.columns"), "table.columns");
    assert_eq!(file_stem("pro-table.columns"), "pro-table.columns");

    let slash = file_stem("a/b");
    let colon = file_stem("a:b");
    assert!(slash.starts_with("a_b-"));
    assert_ne!(slash, colon);
    assert_eq!(slash, file_stem("a/b"));

    assert!(!file_stem("..").starts_with('.'));
    assert!(!file_stem("").is_empty());
}

#[test]
fn test_get_prefs_dir() {
    let dir = get_prefs_dir();
    // 在测试环境中应该能获取到目录
    assert!(dir.is_some());
    let dir = dir.unwrap();
    assert!(dir.to_string_lossy().contains(APP_NAME));
    assert!(dir.to_string_lossy().contains(PREFS_DIR));
}

#[test]
fn test_get_log_dir() {
    let dir = get_log_dir();
    assert!(dir.is_some());
    let dir = dir.unwrap();
    assert!(dir.to_string_lossy().contains(APP_NAME));
    assert!(dir.to_string_lossy().contains(LOG_DIR));
}

#[test]
fn test_prefs_file_path() {
    let dir = std::path::Path::new("/tmp/colset");
    let path = prefs_file_path(dir, "table.columns");

    assert_eq!(path, dir.join("table.columns.json"));
}
