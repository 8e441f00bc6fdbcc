//! 数据目录管理
//!
//! 跨平台的数据目录：
//! - macOS: ~/Library/Application Support/colset/{prefs,logs}
//! - Linux: ~/.local/share/colset/{prefs,logs}
//! - Windows: %APPDATA%\colset\{prefs,logs}

use std::path::{Path, PathBuf};

pub(crate) const APP_NAME: &str = "colset";
const PREFS_DIR: &str = "prefs";
const LOG_DIR: &str = "logs";

/// 获取应用数据目录
pub fn get_app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_NAME)
        })
    }

    #[cfg(target_os = "linux")]
    {
        // 优先使用 XDG_DATA_HOME，否则使用 ~/.local/share
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            Some(PathBuf::from(xdg).join(APP_NAME))
        } else {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME))
        }
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')
}

/// 存储 key -> 文件名（不含扩展名）
///
/// 安全字符原样保留；否则替换为 `_` 并追加 FNV-1a 哈希，避免不同 key 撞名。
/// 不用 `DefaultHasher`：它的输出不保证跨 Rust 版本稳定。
pub(crate) fn file_stem(key: &str) -> String {
    if !key.is_empty() && key.chars().all(is_safe_char) && !key.starts_with('.') {
        return key.to_string();
    }

    let sanitized: String = key
        .chars()
        .map(|c| if is_safe_char(c) { c } else { '_' })
        .collect();
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in key.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    format!("{}-{:016x}", sanitized.trim_start_matches('.'), hash)
}

pub fn get_prefs_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(PREFS_DIR))
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

/// 指定存储 key 在 `dir` 下的文件路径
pub fn prefs_file_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", file_stem(key)))
}

fn ensure_dir(dir: Option<PathBuf>, what: &str) -> std::io::Result<PathBuf> {
    let dir = dir.ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Cannot determine {} directory", what),
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

pub fn ensure_prefs_dir() -> std::io::Result<PathBuf> {
    ensure_dir(get_prefs_dir(), "prefs")
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    ensure_dir(get_log_dir(), "log")
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/paths.rs"]
mod tests;
