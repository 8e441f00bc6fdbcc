//! Headless column-settings core (state/action/effect).

pub mod action;
pub mod column;
pub mod effect;
pub mod manager;
pub mod prefs;
pub mod services;
pub mod state;
pub mod store;

pub use action::ColumnAction;
pub use column::{column_keys, ColumnDef, ColumnKey};
pub use effect::Effect;
pub use manager::{ColumnSettings, CommitOutcome};
pub use prefs::ColumnPrefs;
pub use state::{ColumnState, DraftRow, EditorState};
pub use store::{ColumnStore, DispatchResult};
