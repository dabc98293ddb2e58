//! Line grammar for `svn log -v` output.
//!
//! Classification is line-local and total: every line falls into exactly
//! one of four categories, and a line that matches no structural pattern
//! is always message text rather than an error. Hard errors only arise
//! when a structurally matched line fails a required sub-parse.

use crate::error::{Result, SvnLogError};
use crate::model::{Action, RevisionRecord};
use regex::Regex;
use std::sync::LazyLock;

/// The category a line falls into. First match wins, in the order
/// action, separator, revision header, other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `   A /path` with optional `" (from /old:rev)"` suffix.
    Action,
    /// A run of dashes, or exactly `Changed paths:`.
    Separator,
    /// `r<digits> | <author> | <timestamp> | ...`.
    Revision,
    /// Anything else: a commit-message continuation line.
    Other,
}

/// Lenient action-line test. Requires at least one leading space so that
/// message lines such as "A quick fix" stay message text.
static ACTION_TEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ +[AMDR] +[^ ]").expect("invalid action test regex"));

/// Dashes-only separator or the literal `Changed paths:` heading.
static SEPARATOR_TEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-+$|^Changed paths:$").expect("invalid separator regex"));

/// Revision header matcher. The author and timestamp fields cannot contain
/// pipes; anything after the third ` | ` (svn's line-count summary) is
/// ignored.
static REVISION_MATCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^r(\d+) \| ([^|]+) \| ([^|]+) \| ").expect("invalid revision header regex")
});

/// Strict action matcher, applied after the copy-source suffix is stripped.
static ACTION_MATCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ +([AMDR]) +(.+)$").expect("invalid action matcher regex"));

/// Trailing `" (from <path>:<rev>)"` copy-source annotation.
static COPY_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" \(from .+:\d+\)$").expect("invalid copy suffix regex"));

/// Classify a single logical line. Pure function of the line content.
pub fn classify(line: &str) -> LineKind {
    if ACTION_TEST.is_match(line) {
        LineKind::Action
    } else if SEPARATOR_TEST.is_match(line) {
        LineKind::Separator
    } else if REVISION_MATCH.is_match(line) {
        LineKind::Revision
    } else {
        LineKind::Other
    }
}

/// Parse a revision-header line into an open [`RevisionRecord`].
///
/// The caller has already classified the line as [`LineKind::Revision`].
/// Fails with [`SvnLogError::MalformedLine`] when the revision number does
/// not fit in `u64`.
pub(super) fn parse_revision_header(line: &str) -> Result<RevisionRecord> {
    let caps = REVISION_MATCH
        .captures(line)
        .ok_or_else(|| malformed(line, "revision header did not match after classification"))?;

    let number: u64 = caps[1]
        .parse()
        .map_err(|_| malformed(line, "revision number out of range"))?;

    Ok(RevisionRecord::new(number, &caps[2], &caps[3]))
}

/// Parse an action line into its code and path, stripping any copy-source
/// suffix first.
///
/// The caller has already classified the line as [`LineKind::Action`].
/// Fails with [`SvnLogError::MalformedLine`] when the action code is not
/// one of A/M/D/R or the path is empty after stripping.
pub(super) fn parse_action(line: &str) -> Result<(Action, String)> {
    let stripped = COPY_SUFFIX.replace(line, "");

    let caps = ACTION_MATCH
        .captures(&stripped)
        .ok_or_else(|| malformed(line, "no path after action code"))?;

    let code = caps[1]
        .chars()
        .next()
        .ok_or_else(|| malformed(line, "missing action code"))?;
    let action =
        Action::from_code(code).ok_or_else(|| malformed(line, "unknown action code"))?;

    Ok((action, caps[2].to_string()))
}

fn malformed(line: &str, reason: &str) -> SvnLogError {
    SvnLogError::MalformedLine {
        line: line.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_action_lines() {
        assert_eq!(classify("   A /trunk/src/lib.rs"), LineKind::Action);
        assert_eq!(classify(" M /trunk/Cargo.toml"), LineKind::Action);
        assert_eq!(classify("   D /branches/old"), LineKind::Action);
        assert_eq!(classify("   R /tags/v1"), LineKind::Action);
    }

    #[test]
    fn action_requires_leading_space() {
        // A commit message may start with a bare action letter; without
        // leading indentation it stays message text.
        assert_eq!(classify("A quick fix"), LineKind::Other);
        assert_eq!(classify("D minor cleanup"), LineKind::Other);
    }

    #[test]
    fn action_requires_path_after_code() {
        assert_eq!(classify("   A "), LineKind::Other);
        assert_eq!(classify("   A"), LineKind::Other);
    }

    #[test]
    fn classifies_separator_lines() {
        assert_eq!(classify("----"), LineKind::Separator);
        assert_eq!(
            classify("------------------------------------------------------------------------"),
            LineKind::Separator
        );
        assert_eq!(classify("Changed paths:"), LineKind::Separator);
    }

    #[test]
    fn almost_separators_are_message_text() {
        assert_eq!(classify("--- see above ---"), LineKind::Other);
        assert_eq!(classify("Changed paths: none"), LineKind::Other);
        assert_eq!(classify("-"), LineKind::Separator);
    }

    #[test]
    fn classifies_revision_headers() {
        assert_eq!(
            classify("r42 | alice | 2011-10-31 17:30:54 -0400 (Mon, 31 Oct 2011) | 2 lines"),
            LineKind::Revision
        );
    }

    #[test]
    fn revision_header_requires_all_three_pipes() {
        assert_eq!(classify("r42 | alice"), LineKind::Other);
        assert_eq!(classify("r42 | alice | ts"), LineKind::Other);
        assert_eq!(classify("rev 42 | alice | ts | "), LineKind::Other);
    }

    #[test]
    fn classification_is_idempotent() {
        let lines = [
            "   A /trunk/a",
            "----",
            "r1 | a | t | ",
            "free-form message",
            "",
        ];
        for line in lines {
            assert_eq!(classify(line), classify(line));
        }
    }

    #[test]
    fn parses_revision_header_fields() {
        let rev = parse_revision_header(
            "r42 | alice | 2011-10-31 17:30:54 -0400 (Mon, 31 Oct 2011) | 2 lines",
        )
        .unwrap();

        assert_eq!(rev.number, 42);
        assert_eq!(rev.author, "alice");
        assert_eq!(rev.timestamp, "2011-10-31 17:30:54 -0400 (Mon, 31 Oct 2011)");
        assert!(rev.message.is_empty());
        assert!(rev.actions.is_empty());
    }

    #[test]
    fn revision_number_overflow_is_malformed() {
        let line = "r99999999999999999999999 | alice | ts | 1 line";
        assert_eq!(classify(line), LineKind::Revision);

        let err = parse_revision_header(line).unwrap_err();
        match err {
            SvnLogError::MalformedLine { reason, .. } => {
                assert_eq!(reason, "revision number out of range");
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn parses_action_code_and_path() {
        let (action, file) = parse_action("   M /trunk/src/main.rs").unwrap();
        assert_eq!(action, Action::Modify);
        assert_eq!(file, "/trunk/src/main.rs");
    }

    #[test]
    fn path_may_contain_spaces() {
        let (action, file) = parse_action("   A /trunk/docs/release notes.txt").unwrap();
        assert_eq!(action, Action::Add);
        assert_eq!(file, "/trunk/docs/release notes.txt");
    }

    #[test]
    fn strips_copy_source_suffix() {
        let (action, file) =
            parse_action("   A /trunk/new-name.rs (from /trunk/old-name.rs:42)").unwrap();
        assert_eq!(action, Action::Add);
        assert_eq!(file, "/trunk/new-name.rs");
    }

    #[test]
    fn copy_suffix_only_strips_at_line_end() {
        let (_, file) =
            parse_action("   A /trunk/notes (from a friend):1 final").unwrap();
        assert_eq!(file, "/trunk/notes (from a friend):1 final");
    }

    #[test]
    fn action_with_only_copy_suffix_is_malformed() {
        // Classification passes on "(from ...)" but stripping leaves no path.
        let line = "   A (from /trunk/old:7)";
        assert_eq!(classify(line), LineKind::Action);

        let err = parse_action(line).unwrap_err();
        match err {
            SvnLogError::MalformedLine { reason, .. } => {
                assert_eq!(reason, "no path after action code");
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }
}
