// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-msg - Commit Message Linter
//!
//! Validates a commit message against the `<type>(<scope>): <subject>`
//! convention and reports the first violation in English or Chinese.
//!
//! # Rules
//!
//! - **Header**: `type(scope): subject`, optionally prefixed by `fixup! ` or `squash! `
//! - **Type**: one of `feat, fix, docs, style, refactor, perf, test, chore, revert, Revert`
//! - **Body**: separated from the header by an empty line
//! - **Length**: no line longer than 100 characters (revert and fixup/squash headers excepted)
//! - **Merge**: messages starting with `Merge ` skip every rule
//!
//! # Example
//!
//! ```
//! use commit_msg::config::ValidatorConfig;
//! use commit_msg::rules::{Diagnostic, RuleEngine};
//!
//! let engine = RuleEngine::new(ValidatorConfig::default());
//! let result = engine.validate("feat(parser): add support for arrays\n\nCloses #12");
//!
//! assert!(result.is_valid());
//! assert_eq!(result.outcome(), Some(&Diagnostic::Validated));
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod i18n;
pub mod rules;

// Re-exports for convenience
pub use config::ValidatorConfig;
pub use error::{CmError, Result};
pub use rules::{Diagnostic, ErrorKind, RuleEngine, ValidationResult};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commit-msg.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_version_string_starts_with_version() {
            assert!(version_string().starts_with(VERSION));
        }
    }
}
