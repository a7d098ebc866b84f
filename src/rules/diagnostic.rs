// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Diagnostic kinds emitted by the validator.

use serde::Serialize;

/// The closed set of outcomes a run can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    Validated,
    Merge,
    ArgMissing,
    FileMissing,
    EmptyMessage,
    EmptyHeader,
    BadHeaderFormat,
    WrongType,
    BodyMissing,
    NoBlankLineBeforeBody,
    LineOverlong,
}

impl ErrorKind {
    /// Stable name shown to users and in JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Validated => "VALIDATED",
            ErrorKind::Merge => "MERGE",
            ErrorKind::ArgMissing => "ARG_MISSING",
            ErrorKind::FileMissing => "FILE_MISSING",
            ErrorKind::EmptyMessage => "EMPTY_MESSAGE",
            ErrorKind::EmptyHeader => "EMPTY_HEADER",
            ErrorKind::BadHeaderFormat => "BAD_HEADER_FORMAT",
            ErrorKind::WrongType => "WRONG_TYPE",
            ErrorKind::BodyMissing => "BODY_MISSING",
            ErrorKind::NoBlankLineBeforeBody => "NO_BLANK_LINE_BEFORE_BODY",
            ErrorKind::LineOverlong => "LINE_OVERLONG",
        }
    }

    /// Whether this kind reports a violation of the message format.
    ///
    /// Format errors are followed by the full rule reference when printed.
    pub fn is_format_error(&self) -> bool {
        !matches!(
            self,
            ErrorKind::Validated | ErrorKind::Merge | ErrorKind::ArgMissing | ErrorKind::FileMissing
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single diagnostic with the context needed to render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Diagnostic {
    Validated,
    Merge,
    ArgMissing,
    FileMissing { filepath: String },
    EmptyMessage,
    EmptyHeader,
    BadHeaderFormat { header: String },
    WrongType { commit_type: String },
    BodyMissing,
    NoBlankLineBeforeBody,
    LineOverlong { length: usize, limit: usize, line: String },
}

impl Diagnostic {
    /// Get the kind of this diagnostic.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Diagnostic::Validated => ErrorKind::Validated,
            Diagnostic::Merge => ErrorKind::Merge,
            Diagnostic::ArgMissing => ErrorKind::ArgMissing,
            Diagnostic::FileMissing { .. } => ErrorKind::FileMissing,
            Diagnostic::EmptyMessage => ErrorKind::EmptyMessage,
            Diagnostic::EmptyHeader => ErrorKind::EmptyHeader,
            Diagnostic::BadHeaderFormat { .. } => ErrorKind::BadHeaderFormat,
            Diagnostic::WrongType { .. } => ErrorKind::WrongType,
            Diagnostic::BodyMissing => ErrorKind::BodyMissing,
            Diagnostic::NoBlankLineBeforeBody => ErrorKind::NoBlankLineBeforeBody,
            Diagnostic::LineOverlong { .. } => ErrorKind::LineOverlong,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_format_kinds() {
        assert!(!ErrorKind::Validated.is_format_error());
        assert!(!ErrorKind::Merge.is_format_error());
        assert!(!ErrorKind::ArgMissing.is_format_error());
        assert!(!ErrorKind::FileMissing.is_format_error());
        assert!(ErrorKind::WrongType.is_format_error());
        assert!(ErrorKind::LineOverlong.is_format_error());
    }

    #[test]
    fn test_kind_names_match_serde() {
        let json = serde_json::to_string(&ErrorKind::NoBlankLineBeforeBody).unwrap();
        assert_eq!(json, format!("\"{}\"", ErrorKind::NoBlankLineBeforeBody.name()));
    }

    #[test]
    fn test_diagnostic_serialization() {
        let diagnostic = Diagnostic::LineOverlong {
            length: 120,
            limit: 100,
            line: "x".to_string(),
        };
        let json = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(json["kind"], "LINE_OVERLONG");
        assert_eq!(json["length"], 120);
        assert_eq!(diagnostic.kind(), ErrorKind::LineOverlong);
    }
}
