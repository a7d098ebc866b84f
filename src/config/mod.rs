// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commit-msg.
//!
//! Holds the fixed rule constants and the per-run validator settings.

mod schema;

pub use schema::*;
