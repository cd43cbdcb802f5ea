//! # Console Reporting Module / 控制台报告模块
//!
//! Prints the short summary shown after a report has been written.
//!
//! 打印报告写入后显示的简短摘要。

use colored::*;

use crate::core::models::GeneratedReport;
use crate::infra::t;

/// Prints where the report was written and what it contains.
///
/// 打印报告的写入位置及其包含的内容。
///
/// # Output Format
/// ```text
/// ✅ Report generated: .maestro/reports/login_flow_20261017_093015.html
///    - Screenshots: 3
///    - Video: No
///
/// To view: open .maestro/reports/login_flow_20261017_093015.html
/// ```
pub fn print_summary(report: &GeneratedReport, locale: &str) {
    let path = report.path.display().to_string();
    let video = if report.has_video {
        t!("summary.yes", locale = locale).green()
    } else {
        t!("summary.no", locale = locale).yellow()
    };

    println!(
        "{}",
        t!("summary.generated", locale = locale, path = &path).green().bold()
    );
    println!(
        "{}",
        t!("summary.screenshots", locale = locale, count = report.screenshot_count)
    );
    println!("{}", t!("summary.video", locale = locale, value = video));
    println!("\n{}", t!("summary.view_hint", locale = locale, path = &path).cyan());
}
