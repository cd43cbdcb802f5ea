//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures shared by discovery, rendering
//! and the CLI: what the caller tells us about the test run, and what we
//! found on disk for it.
//!
//! 此模块定义了发现、渲染和 CLI 共用的数据结构：
//! 调用方提供的测试运行信息，以及在磁盘上找到的媒体文件。

use std::path::{Path, PathBuf};

/// The status literal that selects success styling. Anything else is a failure.
pub const PASSED: &str = "PASSED";

/// Default status when none is given on the command line.
pub const DEFAULT_STATUS: &str = PASSED;

/// Default duration when none is given on the command line.
pub const DEFAULT_DURATION: &str = "Unknown";

/// Outcome of the test run as reported by the caller.
///
/// The test runner hands us a free-form string. Only the exact literal
/// `"PASSED"` counts as a pass; every other value is kept verbatim so it can
/// be shown in the report exactly as it was given.
///
/// 调用方提供的测试结果。只有字面值 `"PASSED"` 算作通过；
/// 其他任何值都按原样保留，以便在报告中原样显示。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TestStatus {
    /// The run passed.
    #[default]
    Passed,
    /// The run did not pass. Holds the raw status string.
    Failed(String),
}

impl TestStatus {
    /// Classifies a raw status string.
    pub fn parse(raw: &str) -> Self {
        if raw == PASSED {
            TestStatus::Passed
        } else {
            TestStatus::Failed(raw.to_string())
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, TestStatus::Passed)
    }

    /// Gets the Bootstrap contextual class for the status
    /// (used as `bg-{class}` and `text-{class}`).
    pub fn css_class(&self) -> &'static str {
        if self.is_passed() { "success" } else { "danger" }
    }

    /// Gets the icon shown next to the status in the header badge.
    pub fn icon(&self) -> &'static str {
        if self.is_passed() { "✅" } else { "❌" }
    }

    /// Gets the status text exactly as the caller supplied it.
    pub fn as_str(&self) -> &str {
        match self {
            TestStatus::Passed => PASSED,
            TestStatus::Failed(raw) => raw,
        }
    }
}

/// Everything the caller tells us about a single test run.
/// Built once from the command line and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportInput {
    /// Name of the Maestro flow. Used verbatim in the title and file name.
    pub test_name: String,
    /// Outcome of the run.
    pub status: TestStatus,
    /// Free-form duration, displayed verbatim.
    pub duration: String,
}

impl ReportInput {
    /// Creates an input from the raw command-line values, applying the
    /// defaults for the optional ones.
    pub fn new(test_name: impl Into<String>, status: Option<&str>, duration: Option<&str>) -> Self {
        Self {
            test_name: test_name.into(),
            status: TestStatus::parse(status.unwrap_or(DEFAULT_STATUS)),
            duration: duration.unwrap_or(DEFAULT_DURATION).to_string(),
        }
    }
}

/// Media found on disk for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaSet {
    /// Step screenshots, sorted by file name.
    pub screenshots: Vec<PathBuf>,
    /// Screen recording, if any.
    pub video: Option<PathBuf>,
}

impl MediaSet {
    pub fn screenshot_count(&self) -> usize {
        self.screenshots.len()
    }

    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }

    pub fn video(&self) -> Option<&Path> {
        self.video.as_deref()
    }
}

/// Returns the final component of a media path as a displayable string.
/// Falls back to the full path when there is no file name component.
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// What a run produced: where the report went and what it embeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReport {
    /// Path of the written HTML file.
    pub path: PathBuf,
    /// Number of screenshots in the gallery.
    pub screenshot_count: usize,
    /// Whether a recording was embedded.
    pub has_video: bool,
}
