// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::ffi::OsString;
use std::path::Path;

use crate::config::{Lang, ValidatorConfig};

/// commit-msg - Commit Message Linter
///
/// Validates the commit message file git passes to the commit-msg hook.
#[derive(Parser, Debug)]
#[command(name = "commit-msg")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit message linter for the commit-msg hook", long_about = None)]
pub struct Cli {
    /// Path to the file holding the commit message
    #[arg(value_name = "FILE")]
    pub file: Option<OsString>,

    /// Language of the diagnostics
    #[arg(short, long, value_enum, default_value_t = Lang::En)]
    pub lang: Lang,

    /// Fail when the commit body is empty
    #[arg(long)]
    pub require_body: bool,

    /// Fail on an unknown commit type instead of only reporting it
    #[arg(long)]
    pub strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

impl Cli {
    /// The message file path, treating an empty argument as absent.
    pub fn message_path(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|file| !file.is_empty())
            .map(Path::new)
    }

    /// Build the validator configuration from the flags.
    pub fn validator_config(&self) -> ValidatorConfig {
        ValidatorConfig::default()
            .with_lang(self.lang)
            .with_body_required(self.require_body)
            .with_strict_types(self.strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_file() {
        let args = Cli::parse_from(["commit-msg", ".git/COMMIT_EDITMSG"]);
        assert_eq!(args.message_path(), Some(Path::new(".git/COMMIT_EDITMSG")));
        assert_eq!(args.lang, Lang::En);
        assert!(args.format.is_none());
    }

    #[test]
    fn test_file_is_optional() {
        let args = Cli::parse_from(["commit-msg"]);
        assert!(args.file.is_none());
        assert!(args.message_path().is_none());
    }

    #[test]
    fn test_empty_file_argument_is_absent() {
        let args = Cli::try_parse_from(["commit-msg", ""]).unwrap();
        assert_eq!(args.file, Some(OsString::new()));
        assert!(args.message_path().is_none());
    }

    #[test]
    fn test_parse_lang() {
        let args = Cli::parse_from(["commit-msg", "--lang", "zh-cn", "msg"]);
        assert_eq!(args.lang, Lang::ZhCn);

        let args = Cli::parse_from(["commit-msg", "-l", "zh-CN", "msg"]);
        assert_eq!(args.lang, Lang::ZhCn);
    }

    #[test]
    fn test_validator_config() {
        let args = Cli::parse_from(["commit-msg", "--strict", "--require-body", "msg"]);
        let config = args.validator_config();
        assert!(config.strict_types);
        assert!(config.body_required);
        assert_eq!(config.lang, Lang::En);
    }

    #[test]
    fn test_parse_json_format() {
        let args = Cli::parse_from(["commit-msg", "--format", "json", "msg"]);
        assert_eq!(args.format, Some(OutputFormat::Json));
    }
}
