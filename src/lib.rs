//! # Maestro Report Library / Maestro 报告库
//!
//! This library turns the artifacts left behind by a Maestro UI test run
//! (numbered step screenshots and an optional screen recording) into a
//! single static HTML report.
//!
//! 此库将 Maestro UI 测试运行留下的产物（编号的步骤截图和可选的屏幕录像）
//! 转换为单个静态 HTML 报告。
//!
//! ## Modules / 模块
//!
//! - `core` - Report input models and media discovery
//! - `infra` - File system helpers: report paths and writing
//! - `reporting` - HTML rendering and the console summary
//! - `cli` - Command-line interface and the `generate` command
//!
//! - `core` - 报告输入模型和媒体文件发现
//! - `infra` - 文件系统辅助功能：报告路径和写入
//! - `reporting` - HTML 渲染和控制台摘要
//! - `cli` - 命令行接口和 `generate` 命令

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items
pub use crate::core::models;
pub use crate::core::discovery;
pub use crate::cli::commands::generate::{generate, GenerateArgs};

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");

/// Picks the language used for console output and report labels.
///
/// An explicit request wins when a catalog exists for it. Otherwise the
/// system locale is tried, first in full (e.g. "vi-VN") and then by its
/// language part (e.g. "vi"), and finally "en".
///
/// 选择控制台输出和报告标签使用的语言。
/// 优先使用显式请求的语言，其次是系统语言，最后回退到 "en"。
pub fn resolve_locale(requested: Option<&str>) -> String {
    let available_locales = rust_i18n::available_locales!();

    let find_catalog = |candidate: &str| -> Option<String> {
        if available_locales.contains(&candidate) {
            return Some(candidate.to_string());
        }
        candidate
            .split(['-', '_'])
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .map(str::to_string)
    };

    requested
        .and_then(find_catalog)
        .or_else(|| sys_locale::get_locale().and_then(|locale| find_catalog(&locale)))
        .unwrap_or_else(|| "en".to_string())
}
