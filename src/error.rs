//! Error types for svnlog.
//!
//! Uses thiserror for derive macros. Parsing is permissive: almost any
//! irregular input is absorbed as commit-message text, so hard errors only
//! arise when a line matched a structural pattern but failed a required
//! sub-parse, or when the caller misuses the parser lifecycle.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for svnlog operations.
#[derive(Error, Debug)]
pub enum SvnLogError {
    /// A line matched a structural pattern but a required sub-parse failed
    /// (e.g., a revision number that does not fit in `u64`).
    #[error("malformed line '{line}': {reason}")]
    MalformedLine { line: String, reason: String },

    /// `finish` was called on a parser that already completed, or `feed`
    /// was called after a successful `finish`.
    #[error("parser already finalized")]
    AlreadyFinalized,

    /// Reading from a log file or stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering records or events as JSON failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The `svn` subprocess failed to run or exited non-zero.
    #[error("svn command failed: {0}")]
    Svn(String),
}

impl SvnLogError {
    /// Returns the appropriate process exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SvnLogError::MalformedLine { .. } => exit_codes::PARSE_FAILURE,
            SvnLogError::AlreadyFinalized => exit_codes::PARSE_FAILURE,
            SvnLogError::Io(_) => exit_codes::USER_ERROR,
            SvnLogError::Serialization(_) => exit_codes::USER_ERROR,
            SvnLogError::Svn(_) => exit_codes::SVN_FAILURE,
        }
    }
}

/// Result type alias for svnlog operations.
pub type Result<T> = std::result::Result<T, SvnLogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_line_has_parse_failure_exit_code() {
        let err = SvnLogError::MalformedLine {
            line: "r?? | a | b | ".to_string(),
            reason: "bad revision number".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::PARSE_FAILURE);
    }

    #[test]
    fn already_finalized_has_parse_failure_exit_code() {
        let err = SvnLogError::AlreadyFinalized;
        assert_eq!(err.exit_code(), exit_codes::PARSE_FAILURE);
    }

    #[test]
    fn io_error_has_user_error_exit_code() {
        let err = SvnLogError::Io(std::io::Error::other("boom"));
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn svn_error_has_svn_failure_exit_code() {
        let err = SvnLogError::Svn("log: connection refused".to_string());
        assert_eq!(err.exit_code(), exit_codes::SVN_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = SvnLogError::MalformedLine {
            line: "r99999999999999999999 | a | b | ".to_string(),
            reason: "revision number out of range".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed line 'r99999999999999999999 | a | b | ': revision number out of range"
        );

        assert_eq!(
            SvnLogError::AlreadyFinalized.to_string(),
            "parser already finalized"
        );
    }
}
