// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the commit-msg application.
//!
//! Validation itself never fails; these errors cover the process boundary:
//! locating and reading the message file and reporting a rejected message.

use std::path::PathBuf;
use thiserror::Error;

use crate::rules::ErrorKind;

/// The main error type for commit-msg operations.
#[derive(Error, Debug)]
pub enum CmError {
    #[error("commit message file argument missing")]
    ArgMissing,

    #[error("file {} does not exist", .path.display())]
    FileMissing { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("commit message rejected: {kind}")]
    Rejected { kind: ErrorKind },
}

impl CmError {
    /// Whether a localized diagnostic for this error was already printed.
    pub fn is_reported(&self) -> bool {
        !matches!(self, CmError::Read { .. })
    }
}

/// Result type alias for commit-msg operations.
pub type Result<T> = std::result::Result<T, CmError>;
