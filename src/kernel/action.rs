use super::column::ColumnKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnAction {
    OpenEditor,
    ReorderDraft { from: usize, to: usize },
    SetDraftVisible { key: ColumnKey, visible: bool },
    CommitEditor,
    CancelEditor,
}
