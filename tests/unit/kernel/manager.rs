use super::*;
use crate::kernel::services::adapters::MemoryStore;
use crate::kernel::services::ports::{StorageError, StorageResult};
use crate::kernel::ColumnKey;

const KEY: &str = "table.columns";

fn cols(items: &[&str]) -> Vec<ColumnDef> {
    items.iter().map(|k| ColumnDef::new(k, *k)).collect()
}

fn strs(keys: &[ColumnKey]) -> Vec<&str> {
    keys.iter().map(ColumnKey::as_str).collect()
}

fn titles(columns: Vec<&ColumnDef>) -> Vec<String> {
    columns.into_iter().map(|c| c.title.clone()).collect()
}

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> StorageResult<Option<Vec<u8>>> {
        Err(StorageError::Unavailable("disabled".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &[u8]) -> StorageResult<()> {
        Err(StorageError::Unavailable("disabled".to_string()))
    }
}

#[test]
fn load_without_saved_prefs_uses_caller_order() {
    let columns = cols(&["id", "name", "age"]);
    let settings = ColumnSettings::load(MemoryStore::new(), KEY, &columns);

    assert_eq!(strs(settings.committed().order()), vec!["id", "name", "age"]);
    assert!(settings.committed().hidden().is_empty());
    assert!(!settings.is_editing());
}

#[test]
fn load_falls_back_on_malformed_prefs() {
    let columns = cols(&["id", "name"]);
    for raw in ["{", "[\"name\",\"id\"]", r#"{"hidden":["id"]}"#] {
        let mut storage = MemoryStore::new();
        storage.insert_raw(KEY, raw);
        let settings = ColumnSettings::load(storage, KEY, &columns);
        assert_eq!(strs(settings.committed().order()), vec!["id", "name"]);
        assert!(settings.committed().hidden().is_empty());
    }
}

#[test]
fn load_reconciles_saved_prefs() {
    let mut storage = MemoryStore::new();
    storage.insert_raw(KEY, r#"{"order":["city","gone","id"],"hidden":["gone","id"]}"#);

    let columns = cols(&["id", "name", "city"]);
    let settings = ColumnSettings::load(storage, KEY, &columns);

    assert_eq!(strs(settings.committed().order()), vec!["city", "id", "name"]);
    assert_eq!(strs(settings.committed().hidden()), vec!["id"]);
    assert_eq!(titles(settings.visible_columns(&columns)), vec!["city", "name"]);
}

#[test]
fn load_survives_unreadable_storage() {
    let columns = cols(&["a", "b"]);
    let settings = ColumnSettings::load(BrokenStore, KEY, &columns);
    assert_eq!(strs(settings.committed().order()), vec!["a", "b"]);
}

#[test]
fn visible_columns_filter() {
    let columns = cols(&["a", "b", "c"]);
    let mut settings = ColumnSettings::load(MemoryStore::new(), KEY, &columns);

    settings.open_editor(&columns);
    settings.toggle_visibility_draft("b", false);
    assert_eq!(settings.commit_editor(&columns), CommitOutcome::Persisted);

    assert_eq!(titles(settings.visible_columns(&columns)), vec!["a", "c"]);
}

#[test]
fn new_column_is_appended_on_query_and_edit() {
    let columns = cols(&["a", "b"]);
    let mut settings = ColumnSettings::load(MemoryStore::new(), KEY, &columns);

    let grown = cols(&["a", "b", "c"]);
    assert_eq!(strs(settings.prefs(&grown).order()), vec!["a", "b", "c"]);
    assert_eq!(titles(settings.visible_columns(&grown)), vec!["a", "b", "c"]);

    settings.open_editor(&grown);
    let draft = settings.draft().unwrap();
    assert_eq!(strs(draft.order()), vec!["a", "b", "c"]);
    assert!(!draft.is_hidden("c"));
}

#[test]
fn stale_column_is_dropped_on_query_and_commit() {
    let columns = cols(&["a", "b", "c"]);
    let mut settings = ColumnSettings::load(MemoryStore::new(), KEY, &columns);
    settings.open_editor(&columns);
    settings.toggle_visibility_draft("b", false);
    settings.commit_editor(&columns);

    let shrunk = cols(&["a", "c"]);
    let seen = settings.prefs(&shrunk);
    assert_eq!(strs(seen.order()), vec!["a", "c"]);
    assert!(seen.hidden().is_empty());

    settings.open_editor(&shrunk);
    settings.commit_editor(&shrunk);
    assert_eq!(strs(settings.committed().order()), vec!["a", "c"]);
    assert!(settings.committed().hidden().is_empty());
}

#[test]
fn reorder_draft_moves_not_swaps() {
    let columns = cols(&["a", "b", "c", "d"]);
    let mut settings = ColumnSettings::load(MemoryStore::new(), KEY, &columns);

    settings.open_editor(&columns);
    assert!(settings.reorder_draft(0, 2));
    assert_eq!(strs(settings.draft().unwrap().order()), vec!["b", "c", "a", "d"]);
    assert!(!settings.reorder_draft(0, 4));
}

#[test]
fn commit_round_trips_through_fresh_instance() {
    let columns = cols(&["a", "b", "c"]);
    let mut settings = ColumnSettings::load(MemoryStore::new(), KEY, &columns);

    settings.open_editor(&columns);
    settings.toggle_visibility_draft("b", false);
    settings.reorder_draft(2, 0);
    assert_eq!(settings.commit_editor(&columns), CommitOutcome::Persisted);

    let reloaded = ColumnSettings::load(settings.into_storage(), KEY, &columns);
    assert_eq!(strs(reloaded.committed().order()), vec!["c", "a", "b"]);
    assert_eq!(strs(reloaded.committed().hidden()), vec!["b"]);
}

#[test]
fn cancel_leaves_record_and_storage_untouched() {
    let columns = cols(&["a", "b", "c"]);
    let mut storage = MemoryStore::new();
    storage.insert_raw(KEY, r#"{"order":["b","a","c"],"hidden":[]}"#);
    let mut settings = ColumnSettings::load(storage, KEY, &columns);

    let committed_before = settings.committed().clone();
    let bytes_before = settings.storage().raw(KEY).map(<[u8]>::to_vec);

    settings.open_editor(&columns);
    settings.reorder_draft(0, 2);
    settings.toggle_visibility_draft("a", false);
    assert!(settings.cancel_editor());

    assert_eq!(settings.committed(), &committed_before);
    assert_eq!(settings.storage().raw(KEY).map(<[u8]>::to_vec), bytes_before);
    assert!(settings.draft().is_none());
}

#[test]
fn commit_without_session_is_rejected() {
    let columns = cols(&["a"]);
    let mut settings = ColumnSettings::load(MemoryStore::new(), KEY, &columns);

    assert_eq!(settings.commit_editor(&columns), CommitOutcome::NotEditing);
    assert!(settings.storage().is_empty());
}

#[test]
fn persist_failure_keeps_in_memory_commit() {
    let columns = cols(&["a", "b"]);
    let mut settings = ColumnSettings::load(MemoryStore::with_quota(4), KEY, &columns);

    settings.open_editor(&columns);
    settings.toggle_visibility_draft("a", false);
    assert_eq!(settings.commit_editor(&columns), CommitOutcome::PersistFailed);

    assert!(!settings.is_editing());
    assert_eq!(strs(settings.committed().hidden()), vec!["a"]);
    assert_eq!(titles(settings.visible_columns(&columns)), vec!["b"]);

    // 下次加载找不到最新偏好，退回默认
    let reloaded = ColumnSettings::load(settings.into_storage(), KEY, &columns);
    assert!(reloaded.committed().hidden().is_empty());
}

#[test]
fn persist_failure_on_unavailable_storage() {
    let columns = cols(&["a", "b"]);
    let mut settings = ColumnSettings::load(BrokenStore, KEY, &columns);

    settings.open_editor(&columns);
    settings.reorder_draft(0, 1);
    assert_eq!(settings.commit_editor(&columns), CommitOutcome::PersistFailed);
    assert_eq!(strs(settings.committed().order()), vec!["b", "a"]);
}

#[test]
fn dispatch_runs_persist_effect() {
    let columns = cols(&["a", "b"]);
    let mut settings = ColumnSettings::load(MemoryStore::new(), KEY, &columns);

    settings.dispatch(ColumnAction::OpenEditor, &columns);
    settings.dispatch(ColumnAction::ReorderDraft { from: 1, to: 0 }, &columns);
    let result = settings.dispatch(ColumnAction::CommitEditor, &columns);

    assert_eq!(result.effects.len(), 1);
    assert_eq!(
        settings.storage().raw(KEY),
        Some(br#"{"order":["b","a"],"hidden":[]}"#.as_slice())
    );
}
