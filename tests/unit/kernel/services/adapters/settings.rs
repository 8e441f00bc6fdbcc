use super::*;
use tempfile::tempdir;

#[test]
fn default_settings_file_is_written_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".colset").join("setting.json");

    write_default_settings(&path).unwrap();
    let loaded = load_settings_from(&path).expect("defaults parse");
    assert!(loaded.storage_dir.is_none());

    std::fs::write(&path, r#"{"log_filter":"colset=trace"}"#).unwrap();
    write_default_settings(&path).unwrap();
    let loaded = load_settings_from(&path).expect("user settings parse");
    assert_eq!(loaded.log_filter(), "colset=trace");
}

#[test]
fn invalid_settings_file_loads_as_none() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("setting.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(load_settings_from(&path).is_none());
    assert!(load_settings_from(&dir.path().join("missing.json")).is_none());
}

#[test]
fn settings_path_lives_under_app_dir() {
    if let Some(path) = get_settings_path() {
        assert!(path.ends_with(".colset/setting.json"));
    }
}
