//! # Generate Command Module / 生成命令模块
//!
//! This module implements the one thing the tool does: scan the media
//! directory, render the report, write it under `reports/`, and tell the
//! user where it went.
//!
//! 此模块实现该工具的唯一功能：扫描媒体目录，渲染报告，
//! 将其写入 `reports/` 下，并告诉用户报告的位置。

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use std::path::PathBuf;

use crate::core::discovery::discover_media;
use crate::core::models::{GeneratedReport, ReportInput};
use crate::infra::fs::{reports_dir_for, write_report};
use crate::reporting::{print_summary, render_report};

/// Everything needed for one run of the report builder.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Test name, status and duration from the command line.
    pub input: ReportInput,
    /// Directory holding the screenshots and recordings.
    pub media_dir: PathBuf,
    /// Language of the report labels and console output.
    pub locale: String,
}

/// Builds and writes the report, stamped with the current local time.
///
/// # Errors
/// Returns an error if the media directory cannot be read or the report
/// cannot be written. Nothing is retried.
pub fn generate(args: &GenerateArgs) -> Result<GeneratedReport> {
    generate_at(args, Local::now().naive_local())
}

/// Builds and writes the report for a fixed generation time.
///
/// The same timestamp is used for the file name and the report footer.
pub fn generate_at(args: &GenerateArgs, generated_at: NaiveDateTime) -> Result<GeneratedReport> {
    let media = discover_media(&args.media_dir, &args.input.test_name)?;
    let html = render_report(&args.input, &media, &generated_at, &args.locale);

    let path = write_report(
        &html,
        &reports_dir_for(&args.media_dir),
        &args.input.test_name,
        &generated_at,
    )?;

    Ok(GeneratedReport {
        path,
        screenshot_count: media.screenshot_count(),
        has_video: media.has_video(),
    })
}

/// Executes the generate command and prints the summary.
pub fn execute(args: GenerateArgs) -> Result<GeneratedReport> {
    let report = generate(&args)?;
    print_summary(&report, &args.locale);
    Ok(report)
}
