use super::column::{ColumnDef, ColumnKey};
use super::prefs::ColumnPrefs;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    Editing(ColumnPrefs),
}

impl EditorState {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditorState::Editing(_))
    }

    pub fn draft(&self) -> Option<&ColumnPrefs> {
        match self {
            EditorState::Editing(draft) => Some(draft),
            EditorState::Idle => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut ColumnPrefs> {
        match self {
            EditorState::Editing(draft) => Some(draft),
            EditorState::Idle => None,
        }
    }
}

/// One line of the edit surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRow {
    pub key: ColumnKey,
    pub title: String,
    pub visible: bool,
}

#[derive(Debug, Clone)]
pub struct ColumnState {
    pub storage_key: String,
    pub committed: ColumnPrefs,
    pub editor: EditorState,
}

impl ColumnState {
    pub fn new(storage_key: impl Into<String>, committed: ColumnPrefs) -> Self {
        Self {
            storage_key: storage_key.into(),
            committed,
            editor: EditorState::Idle,
        }
    }

    pub fn draft_rows(&self, columns: &[ColumnDef]) -> Vec<DraftRow> {
        let Some(draft) = self.editor.draft() else {
            return Vec::new();
        };

        draft
            .order()
            .iter()
            .map(|key| {
                let title = columns
                    .iter()
                    .enumerate()
                    .find(|(idx, col)| col.resolve_key(*idx) == *key)
                    .map(|(_, col)| col.title.clone())
                    .unwrap_or_else(|| key.to_string());
                DraftRow {
                    key: key.clone(),
                    title,
                    visible: !draft.is_hidden(key.as_str()),
                }
            })
            .collect()
    }
}
