//! 表格页：列偏好管理 + 列设置弹窗 + 自定义列 + 列宽调整

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rustc_hash::FxHashMap;
use unicode_width::UnicodeWidthStr;

use super::data::{cell_text, Record};
use crate::kernel::services::ports::KeyValueStore;
use crate::kernel::{ColumnDef, ColumnKey, ColumnSettings, CommitOutcome, DraftRow};

const MIN_COLUMN_WIDTH: u16 = 3;
const MAX_COLUMN_WIDTH: u16 = 60;
const MAX_AUTO_WIDTH: u16 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Ignored,
    Changed,
    Back,
}

pub struct TablePage<S: KeyValueStore> {
    title: &'static str,
    columns: Vec<ColumnDef>,
    rows: Vec<Record>,
    settings: ColumnSettings<S>,
    focus: usize,
    widths: FxHashMap<ColumnKey, u16>,
    modal_selected: usize,
    custom_seq: usize,
    last_commit: Option<CommitOutcome>,
}

impl<S: KeyValueStore> TablePage<S> {
    pub fn new(
        title: &'static str,
        storage_key: &str,
        columns: Vec<ColumnDef>,
        rows: Vec<Record>,
        storage: S,
    ) -> Self {
        let settings = ColumnSettings::load(storage, storage_key, &columns);
        Self {
            title,
            columns,
            rows,
            settings,
            focus: 0,
            widths: FxHashMap::default(),
            modal_selected: 0,
            custom_seq: 0,
            last_commit: None,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn settings(&self) -> &ColumnSettings<S> {
        &self.settings
    }

    pub fn visible_columns(&self) -> Vec<&ColumnDef> {
        self.settings.visible_columns(&self.columns)
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn is_editing(&self) -> bool {
        self.settings.is_editing()
    }

    pub fn draft_rows(&self) -> Vec<DraftRow> {
        self.settings.draft_rows(&self.columns)
    }

    pub fn modal_selected(&self) -> usize {
        self.modal_selected
    }

    pub fn last_commit(&self) -> Option<CommitOutcome> {
        self.last_commit
    }

    /// Field a column reads from each record.
    pub fn field_of(&self, column: &ColumnDef) -> ColumnKey {
        let idx = self
            .columns
            .iter()
            .position(|c| std::ptr::eq(c, column))
            .unwrap_or(0);
        column.resolve_key(idx)
    }

    pub fn column_width(&self, column: &ColumnDef) -> u16 {
        let key = self.field_of(column);
        if let Some(width) = self.widths.get(&key) {
            return *width;
        }
        if let Some(width) = column.meta_u64("width") {
            return (width.min(MAX_COLUMN_WIDTH as u64) as u16).max(MIN_COLUMN_WIDTH);
        }

        let content = self
            .rows
            .iter()
            .map(|row| cell_text(row, key.as_str()).width())
            .max()
            .unwrap_or(0);
        let natural = column.title.width().max(content).saturating_add(2);
        (natural.min(MAX_AUTO_WIDTH as usize) as u16).max(MIN_COLUMN_WIDTH)
    }

    pub fn add_custom_column(&mut self) -> ColumnKey {
        let key = loop {
            self.custom_seq += 1;
            let candidate = ColumnKey::new(format!("custom_{}", self.custom_seq));
            let taken = self
                .columns
                .iter()
                .enumerate()
                .any(|(idx, col)| col.resolve_key(idx) == candidate);
            if !taken {
                break candidate;
            }
        };

        let title = format!("Custom {}", self.custom_seq);
        self.columns
            .push(ColumnDef::anonymous(title).with_key(key.as_str()));
        tracing::info!(column = %key, "custom column added");
        key
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PageEvent {
        if self.settings.is_editing() {
            return self.handle_modal_key(key);
        }

        match key.code {
            KeyCode::Char('s') => {
                self.modal_selected = 0;
                changed(self.settings.open_editor(&self.columns))
            }
            KeyCode::Char('a') => {
                self.add_custom_column();
                PageEvent::Changed
            }
            KeyCode::Left => changed(self.move_focus(-1)),
            KeyCode::Right => changed(self.move_focus(1)),
            KeyCode::Char('[') => changed(self.resize_focused(-1)),
            KeyCode::Char(']') => changed(self.resize_focused(1)),
            KeyCode::Esc | KeyCode::Char('q') => PageEvent::Back,
            _ => PageEvent::Ignored,
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) -> PageEvent {
        let len = self.settings.draft().map_or(0, |d| d.order().len());
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Up if shift => changed(self.move_selected(-1)),
            KeyCode::Down if shift => changed(self.move_selected(1)),
            KeyCode::Char('K') => changed(self.move_selected(-1)),
            KeyCode::Char('J') => changed(self.move_selected(1)),
            KeyCode::Up | KeyCode::Char('k') => {
                let prev = self.modal_selected;
                self.modal_selected = self.modal_selected.saturating_sub(1);
                changed(prev != self.modal_selected)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let prev = self.modal_selected;
                if self.modal_selected + 1 < len {
                    self.modal_selected += 1;
                }
                changed(prev != self.modal_selected)
            }
            KeyCode::Char(' ') => {
                let rows = self.draft_rows();
                let Some(row) = rows.get(self.modal_selected) else {
                    return PageEvent::Ignored;
                };
                changed(
                    self.settings
                        .toggle_visibility_draft(row.key.as_str(), !row.visible),
                )
            }
            KeyCode::Enter => {
                let outcome = self.settings.commit_editor(&self.columns);
                self.last_commit = Some(outcome);
                self.modal_selected = 0;
                self.clamp_focus();
                PageEvent::Changed
            }
            KeyCode::Esc => {
                self.modal_selected = 0;
                changed(self.settings.cancel_editor())
            }
            _ => PageEvent::Ignored,
        }
    }

    fn move_selected(&mut self, delta: isize) -> bool {
        let from = self.modal_selected;
        let Some(to) = from.checked_add_signed(delta) else {
            return false;
        };
        if !self.settings.reorder_draft(from, to) {
            return false;
        }
        self.modal_selected = to;
        true
    }

    fn move_focus(&mut self, delta: isize) -> bool {
        let len = self.visible_columns().len();
        if len == 0 {
            return false;
        }
        let prev = self.focus;
        self.focus = self
            .focus
            .saturating_add_signed(delta)
            .min(len.saturating_sub(1));
        prev != self.focus
    }

    fn clamp_focus(&mut self) {
        let len = self.visible_columns().len();
        self.focus = self.focus.min(len.saturating_sub(1));
    }

    fn resize_focused(&mut self, delta: i32) -> bool {
        let Some(column) = self.visible_columns().get(self.focus).copied() else {
            return false;
        };
        let key = self.field_of(column);
        let current = self.column_width(column);
        let next = (current as i32 + delta).clamp(MIN_COLUMN_WIDTH as i32, MAX_COLUMN_WIDTH as i32)
            as u16;
        if next == current {
            return false;
        }
        self.widths.insert(key, next);
        true
    }
}

fn changed(state_changed: bool) -> PageEvent {
    if state_changed {
        PageEvent::Changed
    } else {
        PageEvent::Ignored
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/page.rs"]
mod tests;
