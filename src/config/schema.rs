// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validator configuration definitions.
//!
//! Settings are assembled from command-line flags; there is no config file.

use serde::Serialize;

/// Maximum number of characters allowed on any single line.
pub const LINE_LIMIT: usize = 100;

/// Accepted commit type keywords, in the order they are listed to users.
///
/// `Revert` is capitalised by some tools when they generate a revert message.
pub const TYPE_LIST: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "chore", "revert", "Revert",
];

/// Check whether a type token is one of the accepted keywords.
pub fn is_known_type(commit_type: &str) -> bool {
    TYPE_LIST.contains(&commit_type)
}

/// Configuration consumed by the rule engine and the message renderer.
///
/// Serialized into JSON output so consumers see which policy was applied.
#[derive(Debug, Clone, Serialize, Default)]
pub struct ValidatorConfig {
    /// Language used to render diagnostics.
    pub lang: Lang,

    /// Whether a commit body is required.
    pub body_required: bool,

    /// Whether an unknown commit type fails validation on its own.
    ///
    /// Off by default: an unknown type is reported but only a later failing
    /// check decides the outcome.
    pub strict_types: bool,
}

impl ValidatorConfig {
    /// Set the output language.
    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    /// Require a non-blank body.
    pub fn with_body_required(mut self, required: bool) -> Self {
        self.body_required = required;
        self
    }

    /// Treat an unknown commit type as a failure.
    pub fn with_strict_types(mut self, strict: bool) -> Self {
        self.strict_types = strict;
        self
    }
}

/// Diagnostic language.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, clap::ValueEnum,
)]
pub enum Lang {
    /// English
    #[default]
    #[serde(rename = "en")]
    #[value(name = "en")]
    En,
    /// Simplified Chinese
    #[serde(rename = "zh-CN")]
    #[value(name = "zh-cn", alias = "zh-CN")]
    ZhCn,
}

impl Lang {
    /// Get the language tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::ZhCn => "zh-CN",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
