// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::cli::args::OutputFormat;
use crate::config::{Lang, ValidatorConfig};
use crate::i18n;
use console::style;

use super::diagnostic::{Diagnostic, ErrorKind};

/// Result of validating a commit message.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Diagnostics in the order they were emitted.
    pub diagnostics: Vec<Diagnostic>,
    /// Kind of the check that rejected the message, if any.
    pub rejected_by: Option<ErrorKind>,
}

impl ValidationResult {
    /// Create an empty validation result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an informational or advisory diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::debug!("Emitting {}", diagnostic.kind());
        self.diagnostics.push(diagnostic);
    }

    /// Record the diagnostic that rejects the message.
    pub fn reject(&mut self, diagnostic: Diagnostic) {
        self.rejected_by = Some(diagnostic.kind());
        self.push(diagnostic);
    }

    /// Check if the validation passed.
    pub fn is_valid(&self) -> bool {
        self.rejected_by.is_none()
    }

    /// The last diagnostic emitted, which names the final verdict.
    pub fn outcome(&self) -> Option<&Diagnostic> {
        self.diagnostics.last()
    }

    /// Print the result to stdout.
    pub fn print(&self, format: Option<OutputFormat>, config: &ValidatorConfig) {
        match format {
            Some(OutputFormat::Json) => self.print_json(config),
            _ => print_diagnostics(&self.diagnostics, config.lang),
        }
    }

    /// Build the JSON document for this result.
    pub fn to_json(&self, config: &ValidatorConfig) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "config": config,
            "diagnostics": self
                .diagnostics
                .iter()
                .map(|d| diagnostic_json(d, config.lang))
                .collect::<Vec<_>>(),
        })
    }

    /// Print in JSON format.
    fn print_json(&self, config: &ValidatorConfig) {
        println!(
            "{}",
            serde_json::to_string_pretty(&self.to_json(config)).unwrap_or_default()
        );
    }
}

/// Serialize a diagnostic with its rendered message attached.
pub fn diagnostic_json(diagnostic: &Diagnostic, lang: Lang) -> serde_json::Value {
    let mut value = serde_json::to_value(diagnostic).unwrap_or_default();
    if let Some(object) = value.as_object_mut() {
        object.insert(
            "message".to_string(),
            serde_json::Value::String(i18n::render(diagnostic, lang)),
        );
    }
    value
}

/// Print diagnostics as text, each format error followed by the rule reference.
pub fn print_diagnostics(diagnostics: &[Diagnostic], lang: Lang) {
    for diagnostic in diagnostics {
        let kind = diagnostic.kind();
        let message = i18n::render(diagnostic, lang);
        let rendered = if kind.is_format_error() {
            style(message).red().to_string()
        } else if matches!(kind, ErrorKind::Validated | ErrorKind::Merge) {
            style(message).green().to_string()
        } else {
            style(message).yellow().to_string()
        };
        println!("{}", rendered);

        if kind.is_format_error() {
            println!("{}", style(i18n::rule_reference(lang)).dim());
        }
    }
}
