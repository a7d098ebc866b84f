// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::CommitMessage;
use crate::config::ValidatorConfig;

use super::builtin::{check_body, check_header};
use super::diagnostic::Diagnostic;
use super::validator::ValidationResult;

/// Rule engine for validating commit messages.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    config: ValidatorConfig,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine validates with.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a commit message string.
    ///
    /// Checks run in order and stop at the first failure. Merge commits skip
    /// every format rule.
    pub fn validate(&self, message: &str) -> ValidationResult {
        let message = CommitMessage::new(message);
        let mut result = ValidationResult::new();

        if message.is_blank() {
            result.reject(Diagnostic::EmptyMessage);
            return result;
        }

        if message.is_merge() {
            tracing::debug!("Merge commit detected, skipping checks");
            result.push(Diagnostic::Merge);
            return result;
        }

        let (header, body) = message.split();

        if !check_header(header, &self.config, &mut result) {
            return result;
        }

        if !check_body(body, &self.config, &mut result) {
            return result;
        }

        result.push(Diagnostic::Validated);
        result
    }
}
