//! Service ports: traits + data contracts.

pub mod settings;
pub mod storage;

pub use settings::{Settings, ThemeSettings, DEFAULT_LOG_FILTER};
pub use storage::{KeyValueStore, Result as StorageResult, StorageError};
