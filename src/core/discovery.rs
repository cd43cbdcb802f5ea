//! # Media Discovery Module / 媒体发现模块
//!
//! Maestro flows leave their artifacts next to the flow files: one
//! screenshot per step, named `01_<label>.png` through `19_<label>.png`, and
//! optionally a screen recording. This module finds them by name.
//!
//! Only the top level of the media directory is scanned.
//!
//! Maestro 流程会把产物留在流程文件旁边：每个步骤一张截图，
//! 命名为 `01_<label>.png` 到 `19_<label>.png`，以及可选的屏幕录像。
//! 此模块按名称查找它们。只扫描媒体目录的顶层。

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use crate::core::models::MediaSet;

/// Step numbers picked up as screenshots (`01_*.png` .. `19_*.png`).
pub const SCREENSHOT_STEPS: RangeInclusive<u32> = 1..=19;

/// Extension of screen recordings.
pub const VIDEO_EXTENSION: &str = "mp4";

fn screenshot_patterns() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for step in SCREENSHOT_STEPS {
        let pattern = format!("{:02}_*.png", step);
        let glob = Glob::new(&pattern)
            .with_context(|| format!("Invalid screenshot pattern: {}", pattern))?;
        builder.add(glob);
    }
    builder.build().context("Failed to build screenshot patterns")
}

fn video_patterns() -> Result<GlobSet> {
    let pattern = format!("*.{}", VIDEO_EXTENSION);
    let mut builder = GlobSetBuilder::new();
    builder.add(
        Glob::new(&pattern).with_context(|| format!("Invalid video pattern: {}", pattern))?,
    );
    builder.build().context("Failed to build video patterns")
}

/// Lists the regular files directly inside `directory` whose name matches
/// `patterns`, sorted by file name.
fn matching_files(directory: &Path, patterns: &GlobSet) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(directory)
        .with_context(|| format!("Failed to read media directory: {}", directory.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read entry in: {}", directory.display()))?;
        let path = entry.path();
        // Matched on the bare file name so the directory part never takes part.
        if patterns.is_match(Path::new(&entry.file_name())) && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Finds the step screenshots in `directory`.
///
/// Collects every regular file named `{NN}_*.png` with `NN` from `01` to `19`
/// and returns them sorted by file name. Gaps in the numbering are fine, and
/// finding nothing is not an error.
///
/// 查找 `directory` 中的步骤截图，按文件名排序返回。
/// 编号可以不连续，找不到截图也不是错误。
///
/// # Errors
/// Returns an error if the directory cannot be read.
pub fn discover_screenshots(directory: &Path) -> Result<Vec<PathBuf>> {
    matching_files(directory, &screenshot_patterns()?)
}

/// Finds the screen recording for `test_name` in `directory`.
///
/// `{test_name}.mp4` is preferred. Without it, the `.mp4` file with the
/// lexically smallest name is used, so the choice does not depend on the
/// order the file system lists entries in. Returns `None` when there is no
/// recording at all.
///
/// 查找 `test_name` 对应的屏幕录像。优先使用 `{test_name}.mp4`，
/// 否则使用文件名字典序最小的 `.mp4` 文件，使结果与文件系统的列举顺序无关。
///
/// # Errors
/// Returns an error if the directory cannot be read.
pub fn discover_video(directory: &Path, test_name: &str) -> Result<Option<PathBuf>> {
    let exact = directory.join(format!("{}.{}", test_name, VIDEO_EXTENSION));
    if exact.is_file() {
        return Ok(Some(exact));
    }

    Ok(matching_files(directory, &video_patterns()?)?.into_iter().next())
}

/// Runs both discoveries for one test run.
pub fn discover_media(directory: &Path, test_name: &str) -> Result<MediaSet> {
    Ok(MediaSet {
        screenshots: discover_screenshots(directory)?,
        video: discover_video(directory, test_name)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screenshot_patterns_cover_steps_one_to_nineteen() {
        let patterns = screenshot_patterns().unwrap();

        assert!(patterns.is_match("01_launch.png"));
        assert!(patterns.is_match("19_done.png"));
        assert!(patterns.is_match("07_.png"));
        assert!(!patterns.is_match("00_zero.png"));
        assert!(!patterns.is_match("20_over.png"));
        assert!(!patterns.is_match("1_unpadded.png"));
        assert!(!patterns.is_match("01_launch.jpg"));
        assert!(!patterns.is_match("01_launch.PNG"));
        assert!(!patterns.is_match("01launch.png"));
    }

    #[test]
    fn test_video_pattern_matches_mp4_only() {
        let patterns = video_patterns().unwrap();

        assert!(patterns.is_match("login_flow.mp4"));
        assert!(!patterns.is_match("login_flow.mov"));
        assert!(!patterns.is_match("login_flow.mp4.part"));
    }
}
