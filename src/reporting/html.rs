//! # HTML Reporting Module / HTML 报告模块
//!
//! This module renders the test report: a header banner with the run's
//! status, three stats cards, the screen recording when there is one, and a
//! gallery with one card per step screenshot.
//!
//! The page is built with `maud`, so every value that comes from the outside
//! (test name, status, duration, file names) is escaped on the way in.
//! Styling comes from Bootstrap, loaded from a CDN, plus a small embedded
//! stylesheet.
//!
//! 此模块渲染测试报告：带有运行状态的标题横幅、三张统计卡片、
//! 录像（如果有）以及每张步骤截图对应一张卡片的图库。
//! 页面使用 `maud` 构建，所有外部传入的值都会被转义。

use chrono::NaiveDateTime;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::path::Path;

use crate::core::models::{file_name_of, MediaSet, ReportInput};
use crate::infra::t;

/// Embedded CSS styles for HTML reports
const HTML_STYLE: &str = include_str!("assets/report.css");

/// Bootstrap stylesheet, loaded by the browser when the report is opened.
pub const BOOTSTRAP_CSS_URL: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Bootstrap script bundle, loaded by the browser when the report is opened.
pub const BOOTSTRAP_JS_URL: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";

/// Format of the "Generated on" line in the footer.
const FOOTER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Characters that cannot appear as-is in a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Reports are written to `reports/` inside the media directory, so media
/// is referenced one level up. The file name is percent-encoded so names
/// like `02_50%.png` or `01_step#1.png` still resolve.
///
/// 报告写入媒体目录下的 `reports/`，因此媒体文件通过上一级目录引用。
fn media_src(path: &Path) -> String {
    format!("../{}", utf8_percent_encode(&file_name_of(path), PATH_SEGMENT))
}

/// Renders the complete HTML report for one test run.
///
/// 渲染单次测试运行的完整 HTML 报告。
///
/// # Arguments / 参数
/// * `input` - Test name, status and duration as given by the caller
///             调用方提供的测试名称、状态和持续时间
/// * `media` - Screenshots (already sorted) and the optional recording
///             截图（已排序）和可选的录像
/// * `generated_at` - Generation time, shown in the footer
///                    生成时间，显示在页脚
/// * `locale` - Language of the labels
///              标签使用的语言
///
/// # Returns / 返回值
/// The document as a string, ready to be written to disk.
/// 文档字符串，可直接写入磁盘。
pub fn render_report(
    input: &ReportInput,
    media: &MediaSet,
    generated_at: &NaiveDateTime,
    locale: &str,
) -> String {
    report_page(input, media, generated_at, locale).into_string()
}

fn report_page(
    input: &ReportInput,
    media: &MediaSet,
    generated_at: &NaiveDateTime,
    locale: &str,
) -> Markup {
    let title = t!("html_report.title", locale = locale, name = &input.test_name).into_owned();
    let status_class = input.status.css_class();

    html! {
        (DOCTYPE)
        html lang=(locale) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link href=(BOOTSTRAP_CSS_URL) rel="stylesheet";
                style { (PreEscaped(HTML_STYLE)) }
            }
            body {
                div.container-fluid {
                    div class="header-banner text-center" {
                        h1 class="display-4" { (t!("html_report.app_header", locale = locale).into_owned()) }
                        p.lead { (input.test_name) }
                        span class={ "badge status-badge bg-" (status_class) } {
                            (input.status.icon()) " " (input.status.as_str())
                        }
                    }

                    div class="row mb-4" {
                        (stats_card(
                            &t!("html_report.stats.status", locale = locale),
                            html! {
                                p class={ "h3 text-" (status_class) } { (input.status.as_str()) }
                            },
                        ))
                        (stats_card(
                            &t!("html_report.stats.duration", locale = locale),
                            html! { p class="h3" { (input.duration) } },
                        ))
                        (stats_card(
                            &t!("html_report.stats.screenshots", locale = locale),
                            html! { p class="h3" { (media.screenshot_count()) } },
                        ))
                    }

                    @if let Some(video) = media.video() {
                        (video_section(video, locale))
                    }

                    (screenshot_gallery(media, locale))

                    div class="text-center text-muted mt-5" {
                        p {
                            (t!(
                                "html_report.generated_on",
                                locale = locale,
                                time = generated_at.format(FOOTER_TIMESTAMP_FORMAT)
                            ).into_owned())
                        }
                        p { (t!("html_report.credit", locale = locale).into_owned()) }
                    }
                }
                script src=(BOOTSTRAP_JS_URL) {}
            }
        }
    }
}

fn stats_card(label: &str, value: Markup) -> Markup {
    html! {
        div class="col-md-4" {
            div.stats-card {
                h5 { (label) }
                (value)
            }
        }
    }
}

fn video_section(video: &Path, locale: &str) -> Markup {
    html! {
        div class="mb-5" {
            h3 { (t!("html_report.video_header", locale = locale).into_owned()) }
            div class="ratio ratio-16x9" {
                video controls {
                    source src=(media_src(video)) type="video/mp4";
                    (t!("html_report.video_unsupported", locale = locale).into_owned())
                }
            }
        }
    }
}

fn screenshot_gallery(media: &MediaSet, locale: &str) -> Markup {
    html! {
        div.screenshot-section {
            h2 class="mb-4" { (t!("html_report.screenshots_header", locale = locale).into_owned()) }
            div.row {
                @for (index, screenshot) in media.screenshots.iter().enumerate() {
                    @let name = file_name_of(screenshot);
                    div class="col-md-4 mb-4" {
                        div.card {
                            img.card-img-top src=(media_src(screenshot)) alt=(name);
                            div.card-body {
                                p.card-text {
                                    small.text-muted {
                                        (t!("html_report.step", locale = locale, n = index + 1, name = &name)
                                            .into_owned())
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
