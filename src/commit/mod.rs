// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit module for message classification and header parsing.

mod message;

pub use message::{CommitMessage, ParsedHeader};
