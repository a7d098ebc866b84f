// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::path::Path;

use crate::config::ValidatorConfig;
use crate::error::{CmError, Result};
use crate::rules::{Diagnostic, RuleEngine, ValidationResult};

use super::args::Cli;

/// Run the CLI with the given arguments.
///
/// Returns `Ok(())` when the message passes; every `Err` maps to exit code 1.
pub fn run(cli: Cli) -> Result<()> {
    let engine = RuleEngine::new(cli.validator_config());

    tracing::debug!(
        "Running with lang={} strict_types={} body_required={}",
        engine.config().lang,
        engine.config().strict_types,
        engine.config().body_required
    );

    let Some(path) = cli.message_path() else {
        report(&cli, engine.config(), Diagnostic::ArgMissing);
        return Err(CmError::ArgMissing);
    };

    if !path.exists() {
        report(
            &cli,
            engine.config(),
            Diagnostic::FileMissing {
                filepath: path.display().to_string(),
            },
        );
        return Err(CmError::FileMissing {
            path: path.to_path_buf(),
        });
    }

    let message = read_message(path)?;
    let result = engine.validate(&message);
    result.print(cli.format, engine.config());

    match result.rejected_by {
        Some(kind) => Err(CmError::Rejected { kind }),
        None => Ok(()),
    }
}

/// Print a diagnostic raised before validation could start.
fn report(cli: &Cli, config: &ValidatorConfig, diagnostic: Diagnostic) {
    let mut result = ValidationResult::new();
    result.reject(diagnostic);
    result.print(cli.format, config);
}

/// Read the message file as UTF-8 with line endings normalised to `\n`.
pub fn read_message(path: &Path) -> Result<String> {
    tracing::debug!("Reading commit message from: {:?}", path);

    let content = std::fs::read_to_string(path).map_err(|source| CmError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(normalize_newlines(&content))
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
fn normalize_newlines(content: &str) -> String {
    if content.contains('\r') {
        content.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        content.to_string()
    }
}
