//! Data model for parsed Subversion logs.
//!
//! Two aggregate tables are built incrementally by the parser:
//! - a revision table mapping revision number to [`RevisionRecord`]
//! - a file table mapping path to [`FileRecord`]
//!
//! Both live in [`ParseResults`], the value handed to callers at
//! finalization. `BTreeMap` keeps iteration and JSON output deterministic.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

/// The kind of change applied to a path within one revision.
///
/// Single-letter codes A/M/D/R in the `svn log -v` grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Add,
    Modify,
    Delete,
    Replace,
}

impl Action {
    /// Parse a single-letter action code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'A' => Some(Action::Add),
            'M' => Some(Action::Modify),
            'D' => Some(Action::Delete),
            'R' => Some(Action::Replace),
            _ => None,
        }
    }

    /// The single-letter code used in the log grammar.
    pub fn code(&self) -> char {
        match self {
            Action::Add => 'A',
            Action::Modify => 'M',
            Action::Delete => 'D',
            Action::Replace => 'R',
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Action::Add => "add",
            Action::Modify => "modify",
            Action::Delete => "delete",
            Action::Replace => "replace",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One action against one path in one revision.
///
/// Immutable once created. Any `" (from <path>:<rev>)"` copy-source
/// annotation has already been stripped from `file`; copy provenance is
/// discarded by this design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEntry {
    /// The change applied to the path.
    pub action: Action,

    /// The path the action applies to.
    pub file: String,

    /// The revision the action belongs to.
    pub rev: u64,
}

/// One revision entry from the log.
///
/// Created when a revision-header line is parsed; mutable (message grows,
/// actions accumulate) until the next header or end-of-input seals it.
/// Revision records are never deleted; the revision table only grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionRecord {
    /// The revision number, unique key in the revision table.
    pub number: u64,

    /// The author field, verbatim.
    pub author: String,

    /// The timestamp field, verbatim. The source format is not trustworthy
    /// enough to normalize into a calendar type.
    pub timestamp: String,

    /// The commit message, accumulated one continuation line at a time and
    /// rejoined with `'\n'`.
    pub message: String,

    /// Actions recorded in this revision only, keyed by path.
    pub actions: BTreeMap<String, ActionEntry>,
}

impl RevisionRecord {
    /// Create an open revision with empty message and actions.
    pub fn new(number: u64, author: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            number,
            author: author.into(),
            timestamp: timestamp.into(),
            message: String::new(),
            actions: BTreeMap::new(),
        }
    }

    /// Append one message-continuation line, preserving line breaks.
    pub fn append_message_line(&mut self, line: &str) {
        if !self.message.is_empty() {
            self.message.push('\n');
        }
        self.message.push_str(line);
    }
}

/// Per-path history: the revisions that touched a path, most recent first.
///
/// Created on a path's first mention and never deleted, even when the most
/// recent own action is a delete; ancestor resolution needs the record to
/// keep existing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Revision numbers that touched this path, most-recent-first.
    /// New revisions are prepended, not appended.
    pub revs: VecDeque<u64>,
}

impl FileRecord {
    /// Record that `rev` touched this path.
    pub fn touch(&mut self, rev: u64) {
        self.revs.push_front(rev);
    }

    /// The most recent revision that touched this path.
    pub fn last_rev(&self) -> Option<u64> {
        self.revs.front().copied()
    }
}

/// The complete output of a parse: the revision table and the file table.
///
/// Also serves as the live view of the tables while parsing is still in
/// progress; the ancestor-deletion resolver
/// ([`last_action`](ParseResults::last_action)) may be queried at any point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResults {
    /// Every revision seen, keyed by revision number.
    pub revisions: BTreeMap<u64, RevisionRecord>,

    /// Every path ever mentioned in an action, keyed by path.
    pub files: BTreeMap<String, FileRecord>,
}
