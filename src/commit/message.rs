// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message classification and header parsing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Header grammar: optional `fixup! `/`squash! ` prefix, type token,
    /// optional parenthesized scope, `: ` and a non-empty subject.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<prefix>fixup! |squash! )?(?P<type>\w+)(?:\((?P<scope>[^)\s]+)\))?: (?P<subject>.+)$"
    ).unwrap();
}

/// Prefix that marks a merge commit generated by git.
const MERGE_PREFIX: &str = "Merge ";

/// A raw commit message as read from the message file.
#[derive(Debug, Clone, Copy)]
pub struct CommitMessage<'a> {
    raw: &'a str,
}

impl<'a> CommitMessage<'a> {
    /// Wrap raw message text.
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// Whether the message has no content except whitespace.
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// Whether this is a merge commit message.
    pub fn is_merge(&self) -> bool {
        self.raw.starts_with(MERGE_PREFIX)
    }

    /// Split the message on its first newline into header and body.
    ///
    /// The body is empty when the message is a single line.
    pub fn split(&self) -> (&'a str, &'a str) {
        self.raw.split_once('\n').unwrap_or((self.raw, ""))
    }
}

/// A header line that matched the commit header grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    /// Whether the header starts with `fixup! ` or `squash! `.
    pub fixup_or_squash: bool,
    /// Type token (feat, fix, etc.), not yet checked against the type list.
    pub commit_type: String,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject line.
    pub subject: String,
    /// Character count of the whole header line, prefix included.
    pub raw_length: usize,
}

impl ParsedHeader {
    /// Match a header line against the grammar.
    ///
    /// Returns `None` when the line does not match.
    pub fn parse(header: &str) -> Option<Self> {
        let captures = HEADER_REGEX.captures(header)?;

        let commit_type = captures.name("type")?.as_str().to_string();
        let subject = captures.name("subject")?.as_str().to_string();

        Some(Self {
            fixup_or_squash: captures.name("prefix").is_some(),
            commit_type,
            scope: captures.name("scope").map(|m| m.as_str().to_string()),
            subject,
            raw_length: header.chars().count(),
        })
    }

    /// Whether this header may exceed the line limit.
    ///
    /// Revert and fixup/squash headers wrap an earlier header and grow past
    /// the limit through no fault of the author.
    pub fn is_length_exempt(&self) -> bool {
        self.fixup_or_squash || self.commit_type == "revert" || self.commit_type == "Revert"
    }
}
