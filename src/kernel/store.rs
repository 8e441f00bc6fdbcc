use super::column::ColumnDef;
use super::prefs::ColumnPrefs;
use super::{ColumnAction, ColumnState, Effect, EditorState};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct ColumnStore {
    state: ColumnState,
}

impl ColumnStore {
    pub fn new(state: ColumnState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ColumnState {
        &self.state
    }

    /// Committed record as seen against the caller's current columns.
    pub fn prefs(&self, columns: &[ColumnDef]) -> ColumnPrefs {
        self.state.committed.reconcile_columns(columns)
    }

    pub fn visible_columns<'a>(&self, columns: &'a [ColumnDef]) -> Vec<&'a ColumnDef> {
        self.state.committed.visible_columns(columns)
    }

    pub fn dispatch(&mut self, action: ColumnAction, columns: &[ColumnDef]) -> DispatchResult {
        match action {
            ColumnAction::OpenEditor => {
                if self.state.editor.is_editing() {
                    return DispatchResult::unchanged();
                }
                let draft = self.state.committed.reconcile_columns(columns);
                self.state.editor = EditorState::Editing(draft);
                DispatchResult::changed(true)
            }
            ColumnAction::ReorderDraft { from, to } => {
                let Some(draft) = self.state.editor.draft_mut() else {
                    return DispatchResult::unchanged();
                };
                DispatchResult::changed(draft.reorder(from, to))
            }
            ColumnAction::SetDraftVisible { key, visible } => {
                let Some(draft) = self.state.editor.draft_mut() else {
                    return DispatchResult::unchanged();
                };
                DispatchResult::changed(draft.set_visible(key.as_str(), visible))
            }
            ColumnAction::CommitEditor => {
                let EditorState::Editing(draft) = std::mem::take(&mut self.state.editor) else {
                    return DispatchResult::unchanged();
                };

                let prefs = draft.reconcile_columns(columns);
                self.state.committed = prefs.clone();
                tracing::debug!(
                    storage_key = %self.state.storage_key,
                    order = prefs.order().len(),
                    hidden = prefs.hidden().len(),
                    "column preferences committed"
                );

                DispatchResult {
                    effects: vec![Effect::PersistPrefs {
                        storage_key: self.state.storage_key.clone(),
                        prefs,
                    }],
                    state_changed: true,
                }
            }
            ColumnAction::CancelEditor => {
                if !self.state.editor.is_editing() {
                    return DispatchResult::unchanged();
                }
                self.state.editor = EditorState::Idle;
                DispatchResult::changed(true)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
