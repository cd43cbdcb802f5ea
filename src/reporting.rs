//! # Reporting Module / 报告模块
//!
//! This module handles the two outputs of a run: the HTML report itself and
//! the short, colored summary printed to the console once it is written.
//!
//! 此模块处理一次运行的两种输出：HTML 报告本身，以及写入后在控制台打印的简短彩色摘要。

pub mod console;
pub mod html;

// Re-export common reporting functions
pub use console::print_summary;
pub use html::render_report;
