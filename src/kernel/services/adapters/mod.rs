//! Service adapters: OS specific implementations.

pub mod paths;
pub mod settings;
pub mod storage;

pub use paths::{
    ensure_log_dir, ensure_prefs_dir, get_app_data_dir, get_log_dir, get_prefs_dir,
    prefs_file_path,
};
pub use settings::{ensure_settings_file, get_settings_path, load_settings, load_settings_from};
pub use storage::{FileStore, MemoryStore};
