//! 终端集成层 (crossterm + ratatui)。
//!
//! `kernel` 不依赖终端 crate，这里只负责进入/恢复终端。

pub mod terminal_guard;

pub use terminal_guard::{CrosstermTerminalOps, TerminalGuard, TerminalOps, TerminalRestorer};
