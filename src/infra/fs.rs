//! # File System Operations Module / 文件系统操作模块
//!
//! This module decides where reports go and writes them there.
//!
//! 此模块决定报告的存放位置并将其写入。

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory, inside the media directory, that receives reports.
pub const REPORTS_DIR_NAME: &str = "reports";

/// Timestamp format used in report file names, e.g. `20261017_093015`.
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Builds the report file name for a test run: `{test_name}_{YYYYMMDD_HHMMSS}.html`.
///
/// The test name is used verbatim.
pub fn report_file_name(test_name: &str, timestamp: &NaiveDateTime) -> String {
    format!("{}_{}.html", test_name, timestamp.format(FILE_TIMESTAMP_FORMAT))
}

/// Writes a rendered report to `reports_dir` and returns its path.
///
/// The directory is created (with parents) if it does not exist yet. An
/// existing report with the same name, i.e. same test and same second, is
/// overwritten.
///
/// 将渲染好的报告写入 `reports_dir` 并返回其路径。
/// 目录不存在时会被创建（包括父目录）。同名报告（同一测试、同一秒）会被覆盖。
///
/// # Arguments / 参数
/// * `html` - The rendered document
///            渲染好的文档
/// * `reports_dir` - Destination directory
///                   目标目录
/// * `test_name` - Name of the test run, used in the file name
///                 测试运行的名称，用于文件名
/// * `timestamp` - Generation time, used in the file name
///                 生成时间，用于文件名
///
/// # Errors / 错误
/// Returns an error if the directory cannot be created or the file cannot be
/// written.
///
/// 如果无法创建目录或无法写入文件，则返回错误。
pub fn write_report(
    html: &str,
    reports_dir: &Path,
    test_name: &str,
    timestamp: &NaiveDateTime,
) -> Result<PathBuf> {
    fs::create_dir_all(reports_dir).with_context(|| {
        format!("Failed to create reports directory: {}", reports_dir.display())
    })?;

    let report_path = reports_dir.join(report_file_name(test_name, timestamp));
    fs::write(&report_path, html)
        .with_context(|| format!("Failed to write report: {}", report_path.display()))?;

    Ok(report_path)
}

/// Expands a leading `~` in a user-supplied media directory.
/// Quoted arguments reach us unexpanded by the shell.
pub fn resolve_media_dir(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Gets the reports directory that belongs to a media directory.
pub fn reports_dir_for(media_dir: &Path) -> PathBuf {
    media_dir.join(REPORTS_DIR_NAME)
}
