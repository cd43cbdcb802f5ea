//! # Core Module / 核心模块
//!
//! This module contains the core of the report builder: the input models
//! and the discovery of screenshots and recordings on disk.
//!
//! 此模块包含报告生成器的核心：输入模型以及磁盘上截图和录像的发现。

pub mod models;
pub mod discovery;

// Re-exports
pub use models::{GeneratedReport, MediaSet, ReportInput, TestStatus};
pub use discovery::{discover_media, discover_screenshots, discover_video};
