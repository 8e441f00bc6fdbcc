//! colset - 表格列偏好（顺序 + 可见性）管理
//!
//! 模块结构：
//! - kernel: 无 UI 的核心（列定义、偏好、编辑器状态机、存储端口/适配器）
//! - app: 终端宿主（路由、表格页、列设置弹窗）
//! - tui: 终端进入/恢复

pub mod kernel;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
