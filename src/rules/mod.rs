// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module checks a commit message against the header grammar, the type
//! list and the line length and body layout rules.

mod builtin;
mod diagnostic;
mod engine;
mod validator;

pub use builtin::{check_body, check_header};
pub use diagnostic::{Diagnostic, ErrorKind};
pub use engine::RuleEngine;
pub use validator::{diagnostic_json, print_diagnostics, ValidationResult};
