//! # Models Module Unit Tests
//!
//! Tests for status classification, input defaults and media helpers.

use maestro_report::models::{file_name_of, MediaSet, ReportInput, TestStatus};
use std::path::{Path, PathBuf};

#[cfg(test)]
mod test_status_tests {
    use super::*;

    #[test]
    fn test_passed_literal_is_success() {
        let status = TestStatus::parse("PASSED");

        assert_eq!(status, TestStatus::Passed);
        assert!(status.is_passed());
        assert_eq!(status.css_class(), "success");
        assert_eq!(status.icon(), "✅");
        assert_eq!(status.as_str(), "PASSED");
    }

    #[test]
    fn test_anything_else_is_failure() {
        for raw in ["FAILED", "passed", "Passed", "PASSED ", "", "SKIPPED", "❓"] {
            let status = TestStatus::parse(raw);

            assert!(!status.is_passed(), "{:?} should not be a pass", raw);
            assert_eq!(status.css_class(), "danger");
            assert_eq!(status.icon(), "❌");
            assert_eq!(status.as_str(), raw, "raw status must be kept verbatim");
        }
    }

    #[test]
    fn test_as_str_matches_raw_value() {
        assert_eq!(TestStatus::Passed.as_str(), "PASSED");
        assert_eq!(TestStatus::parse("TIMEOUT").as_str(), "TIMEOUT");
    }

    #[test]
    fn test_default_is_passed() {
        assert_eq!(TestStatus::default(), TestStatus::Passed);
    }
}

#[cfg(test)]
mod report_input_tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_arguments() {
        let input = ReportInput::new("login_flow", None, None);

        assert_eq!(input.test_name, "login_flow");
        assert_eq!(input.status, TestStatus::Passed);
        assert_eq!(input.duration, "Unknown");
    }

    #[test]
    fn test_explicit_arguments_are_kept() {
        let input = ReportInput::new("checkout", Some("FAILED"), Some("12s"));

        assert_eq!(input.status, TestStatus::Failed("FAILED".to_string()));
        assert_eq!(input.duration, "12s");
    }
}

#[cfg(test)]
mod media_set_tests {
    use super::*;

    #[test]
    fn test_empty_media_set() {
        let media = MediaSet::default();

        assert_eq!(media.screenshot_count(), 0);
        assert!(!media.has_video());
        assert!(media.video().is_none());
    }

    #[test]
    fn test_media_set_accessors() {
        let media = MediaSet {
            screenshots: vec![PathBuf::from("01_a.png"), PathBuf::from("02_b.png")],
            video: Some(PathBuf::from("flow.mp4")),
        };

        assert_eq!(media.screenshot_count(), 2);
        assert!(media.has_video());
        assert_eq!(media.video(), Some(Path::new("flow.mp4")));
    }

    #[test]
    fn test_file_name_of_strips_directories() {
        assert_eq!(file_name_of(Path::new("/tmp/maestro/01_launch.png")), "01_launch.png");
        assert_eq!(file_name_of(Path::new("flow.mp4")), "flow.mp4");
    }
}
