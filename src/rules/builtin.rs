// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in header and body rules.
//!
//! Each check pushes its diagnostics into the result and returns whether the
//! message may proceed to the next check.

use crate::commit::ParsedHeader;
use crate::config::{is_known_type, ValidatorConfig, LINE_LIMIT};

use super::diagnostic::Diagnostic;
use super::validator::ValidationResult;

/// Check the header (first line) of a commit message.
pub fn check_header(header: &str, config: &ValidatorConfig, result: &mut ValidationResult) -> bool {
    if header.trim().is_empty() {
        result.reject(Diagnostic::EmptyHeader);
        return false;
    }

    let parsed = match ParsedHeader::parse(header) {
        Some(parsed) => parsed,
        None => {
            result.reject(Diagnostic::BadHeaderFormat {
                header: header.to_string(),
            });
            return false;
        }
    };

    tracing::debug!(
        "Parsed header: type={} scope={:?} fixup_or_squash={}",
        parsed.commit_type,
        parsed.scope,
        parsed.fixup_or_squash
    );

    if !is_known_type(&parsed.commit_type) {
        let diagnostic = Diagnostic::WrongType {
            commit_type: parsed.commit_type.clone(),
        };
        if config.strict_types {
            result.reject(diagnostic);
            return false;
        }
        result.push(diagnostic);
    }

    if parsed.raw_length > LINE_LIMIT && !parsed.is_length_exempt() {
        result.reject(Diagnostic::LineOverlong {
            length: parsed.raw_length,
            limit: LINE_LIMIT,
            line: header.to_string(),
        });
        return false;
    }

    true
}

/// Check the body (everything after the header's newline).
pub fn check_body(body: &str, config: &ValidatorConfig, result: &mut ValidationResult) -> bool {
    if body.trim().is_empty() {
        if config.body_required {
            result.reject(Diagnostic::BodyMissing);
            return false;
        }
        return true;
    }

    // The header must be followed by an empty line.
    let first_line = body.split('\n').next().unwrap_or("");
    if !first_line.is_empty() {
        result.reject(Diagnostic::NoBlankLineBeforeBody);
        return false;
    }

    for line in body.lines() {
        let length = line.chars().count();
        if length > LINE_LIMIT {
            result.reject(Diagnostic::LineOverlong {
                length,
                limit: LINE_LIMIT,
                line: line.to_string(),
            });
            return false;
        }
    }

    true
}
