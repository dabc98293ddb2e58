//! Exit code constants for the svnlog CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input)
//! - 2: Parse failure (malformed line, misused parser lifecycle)
//! - 3: svn subprocess failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an input source that could not be read.
pub const USER_ERROR: i32 = 1;

/// Parse failure: a structurally matched line failed a required sub-parse,
/// or the parser was finalized twice.
pub const PARSE_FAILURE: i32 = 2;

/// svn subprocess failure: the command could not be spawned or exited non-zero.
pub const SVN_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, PARSE_FAILURE, SVN_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
