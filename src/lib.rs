//! Svnlog: streaming parser for Subversion verbose log output.
//!
//! Converts the textual output of `svn log -v` into structured, queryable
//! records: a revision table keyed by revision number and a file table
//! keyed by path, with a derived "effective last action" per path that
//! accounts for deletions inherited from an ancestor directory.
//!
//! Text may arrive in arbitrarily sized chunks; the parser produces the
//! same output for any chunking of the same input. Lines that match no
//! structural pattern are absorbed permissively as commit-message text.
//!
//! ```
//! use svnlog::parser::parse_log;
//!
//! let log = "\
//! ------------------------------------------------------------------------
//! r2 | alice | 2011-10-31 17:30:54 -0400 (Mon, 31 Oct 2011) | 1 line
//! Changed paths:
//!    D /trunk/src
//!
//! drop the src tree
//! ";
//!
//! let results = parse_log(log)?;
//! assert_eq!(results.revisions[&2].author, "alice");
//! assert_eq!(results.last_action("/trunk/src").unwrap().rev, 2);
//! # Ok::<(), svnlog::SvnLogError>(())
//! ```

pub mod cli;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod model;
pub mod parser;
mod resolve;
pub mod svn;

pub use error::{Result, SvnLogError};
pub use events::ParseEvent;
pub use model::{Action, ActionEntry, FileRecord, ParseResults, RevisionRecord};
pub use parser::{parse_log, parse_reader, LogParser, ParseSummary};
