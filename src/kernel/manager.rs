//! Column preferences manager: reducer + storage port.
//!
//! Loads the committed record once, hosts the edit session and writes the record back
//! through a [`KeyValueStore`] on commit. Storage faults never escape; they are logged
//! and the in-memory record stays authoritative.

use super::column::ColumnDef;
use super::prefs::ColumnPrefs;
use super::services::ports::KeyValueStore;
use super::state::DraftRow;
use super::store::{ColumnStore, DispatchResult};
use super::{ColumnAction, ColumnState, Effect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    NotEditing,
    Persisted,
    /// Committed in memory only.
    PersistFailed,
}

pub struct ColumnSettings<S: KeyValueStore> {
    store: ColumnStore,
    storage: S,
}

impl<S: KeyValueStore> ColumnSettings<S> {
    pub fn load(storage: S, storage_key: impl Into<String>, columns: &[ColumnDef]) -> Self {
        let storage_key = storage_key.into();
        let committed = match read_prefs(&storage, &storage_key) {
            Some(saved) => saved.reconcile_columns(columns),
            None => ColumnPrefs::from_columns(columns),
        };

        Self {
            store: ColumnStore::new(ColumnState::new(storage_key, committed)),
            storage,
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.store.state().storage_key
    }

    pub fn committed(&self) -> &ColumnPrefs {
        &self.store.state().committed
    }

    pub fn prefs(&self, columns: &[ColumnDef]) -> ColumnPrefs {
        self.store.prefs(columns)
    }

    pub fn visible_columns<'a>(&self, columns: &'a [ColumnDef]) -> Vec<&'a ColumnDef> {
        self.store.visible_columns(columns)
    }

    pub fn is_editing(&self) -> bool {
        self.store.state().editor.is_editing()
    }

    pub fn draft(&self) -> Option<&ColumnPrefs> {
        self.store.state().editor.draft()
    }

    pub fn draft_rows(&self, columns: &[ColumnDef]) -> Vec<DraftRow> {
        self.store.state().draft_rows(columns)
    }

    pub fn open_editor(&mut self, columns: &[ColumnDef]) -> bool {
        self.dispatch(ColumnAction::OpenEditor, columns).state_changed
    }

    pub fn reorder_draft(&mut self, from: usize, to: usize) -> bool {
        self.dispatch(ColumnAction::ReorderDraft { from, to }, &[])
            .state_changed
    }

    pub fn toggle_visibility_draft(&mut self, key: &str, visible: bool) -> bool {
        self.dispatch(
            ColumnAction::SetDraftVisible {
                key: key.into(),
                visible,
            },
            &[],
        )
        .state_changed
    }

    pub fn commit_editor(&mut self, columns: &[ColumnDef]) -> CommitOutcome {
        if !self.is_editing() {
            return CommitOutcome::NotEditing;
        }
        let result = self.store.dispatch(ColumnAction::CommitEditor, columns);
        if self.run_effects(&result.effects) {
            CommitOutcome::Persisted
        } else {
            CommitOutcome::PersistFailed
        }
    }

    pub fn cancel_editor(&mut self) -> bool {
        self.dispatch(ColumnAction::CancelEditor, &[]).state_changed
    }

    pub fn dispatch(&mut self, action: ColumnAction, columns: &[ColumnDef]) -> DispatchResult {
        let result = self.store.dispatch(action, columns);
        self.run_effects(&result.effects);
        result
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn run_effects(&mut self, effects: &[Effect]) -> bool {
        let mut ok = true;
        for effect in effects {
            match effect {
                Effect::PersistPrefs { storage_key, prefs } => {
                    ok &= write_prefs(&mut self.storage, storage_key, prefs);
                }
            }
        }
        ok
    }
}

fn read_prefs<S: KeyValueStore>(storage: &S, storage_key: &str) -> Option<ColumnPrefs> {
    let bytes = match storage.get(storage_key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(storage_key, error = %e, "read column prefs failed");
            return None;
        }
    };

    let prefs = ColumnPrefs::parse(&bytes);
    if prefs.is_none() {
        tracing::debug!(storage_key, bytes = bytes.len(), "ignoring malformed column prefs");
    }
    prefs
}

fn write_prefs<S: KeyValueStore>(storage: &mut S, storage_key: &str, prefs: &ColumnPrefs) -> bool {
    let bytes = match prefs.to_bytes() {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(storage_key, error = %e, "serialize column prefs failed");
            return false;
        }
    };

    match storage.set(storage_key, &bytes) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(storage_key, error = %e, "persist column prefs failed");
            false
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/manager.rs"]
mod tests;
