// src/cli.rs
use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::*;
use std::env;
use std::ffi::OsString;
use std::process::ExitCode;

use crate::core::models::{ReportInput, DEFAULT_DURATION, DEFAULT_STATUS};
use crate::infra::fs::resolve_media_dir;
use crate::infra::t;

pub mod commands;

use commands::generate::{self, GenerateArgs};

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for `--lang <VALUE>` or `--lang=<VALUE>` before any `--`.
///
/// 预解析命令行参数以查找语言设置。
/// 这样可以在构建完整 CLI 之前初始化 i18n。
fn pre_parse_language(args: &[OsString]) -> Option<String> {
    let args: Vec<String> = args
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .take_while(|arg| arg != "--")
        .collect();

    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang=").map(str::to_string))
}

fn build_cli(locale: &str) -> Command {
    Command::new("maestro-report")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("test-name")
                .help(t!("arg_test_name", locale = locale).to_string())
                .value_name("TEST_NAME")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("status")
                .help(t!("arg_status", locale = locale).to_string())
                .value_name("STATUS")
                .default_value(DEFAULT_STATUS)
                // Free-form values such as `-5s` are values, not flags.
                .allow_hyphen_values(true)
                .index(2),
        )
        .arg(
            Arg::new("duration")
                .help(t!("arg_duration", locale = locale).to_string())
                .value_name("DURATION")
                .default_value(DEFAULT_DURATION)
                // Free-form values such as `-5s` are values, not flags.
                .allow_hyphen_values(true)
                .index(3),
        )
        .arg(
            Arg::new("media-dir")
                .long("media-dir")
                .help(t!("arg_media_dir", locale = locale).to_string())
                .value_name("MEDIA_DIR")
                .default_value(".")
                .action(ArgAction::Set),
        )
}

fn generate_args_from(matches: &ArgMatches, locale: String) -> GenerateArgs {
    // All three have defaults or are required, so clap guarantees a value.
    let test_name = matches
        .get_one::<String>("test-name")
        .cloned()
        .unwrap_or_default();
    let status = matches.get_one::<String>("status").map(String::as_str);
    let duration = matches.get_one::<String>("duration").map(String::as_str);
    let media_dir = matches
        .get_one::<String>("media-dir")
        .map(String::as_str)
        .unwrap_or(".");

    GenerateArgs {
        input: ReportInput::new(test_name, status, duration),
        media_dir: resolve_media_dir(media_dir),
        locale,
    }
}

/// Runs the CLI with the process arguments.
pub fn run() -> Result<ExitCode> {
    run_from(env::args_os())
}

/// Runs the CLI with the given arguments (the first one is the binary name).
///
/// A missing test name is a usage error: clap's message goes to stderr and
/// the exit code is 1. Nothing touches the file system in that case.
pub fn run_from<I, T>(args: I) -> Result<ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    // Pre-parse language and initialize i18n first.
    let locale = crate::resolve_locale(pre_parse_language(&args).as_deref());
    rust_i18n::set_locale(&locale);

    let matches = match build_cli(&locale).try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) => {
            e.print()?;
            return Ok(match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            });
        }
    };

    generate::execute(generate_args_from(&matches, locale))?;
    Ok(ExitCode::SUCCESS)
}

/// Prints a run failure, with its context chain, to stderr.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", t!("error_prefix").red().bold(), err);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_pre_parse_language_separate_value() {
        let args = os_args(&["maestro-report", "--lang", "vi", "smoke"]);
        assert_eq!(pre_parse_language(&args), Some("vi".to_string()));
    }

    #[test]
    fn test_pre_parse_language_inline_value() {
        let args = os_args(&["maestro-report", "--lang=vi", "smoke"]);
        assert_eq!(pre_parse_language(&args), Some("vi".to_string()));
    }

    #[test]
    fn test_pre_parse_language_missing_value() {
        let args = os_args(&["maestro-report", "smoke", "--lang"]);
        assert_eq!(pre_parse_language(&args), None);
    }

    #[test]
    fn test_pre_parse_language_absent() {
        let args = os_args(&["maestro-report", "smoke", "FAILED", "12s"]);
        assert_eq!(pre_parse_language(&args), None);
    }

    #[test]
    fn test_pre_parse_language_ignores_values_after_escape() {
        let args = os_args(&["maestro-report", "smoke", "--", "--lang=vi"]);
        assert_eq!(pre_parse_language(&args), None);
    }

    #[test]
    fn test_hyphen_leading_status_and_duration_are_values() {
        let matches = build_cli("en")
            .try_get_matches_from(["maestro-report", "login_flow", "-FAILED-", "-5s"])
            .unwrap();
        let args = generate_args_from(&matches, "en".to_string());

        assert_eq!(args.input.status.as_str(), "-FAILED-");
        assert_eq!(args.input.duration, "-5s");
    }

    #[test]
    fn test_options_before_positionals_still_parse() {
        let matches = build_cli("en")
            .try_get_matches_from([
                "maestro-report",
                "--media-dir",
                "shots",
                "smoke",
                "FAILED",
                "-1s",
            ])
            .unwrap();
        let args = generate_args_from(&matches, "en".to_string());

        assert_eq!(args.media_dir, std::path::PathBuf::from("shots"));
        assert_eq!(args.input.test_name, "smoke");
        assert_eq!(args.input.status.as_str(), "FAILED");
        assert_eq!(args.input.duration, "-1s");
    }
}
