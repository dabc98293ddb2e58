//! Command-line interface definition for svnlog.

use clap::Parser;
use std::path::PathBuf;

/// Parse `svn log -v` output into structured revision and file records.
#[derive(Debug, Parser)]
#[command(name = "svnlog", version, about)]
pub struct Cli {
    /// Log file to parse. Reads stdin when omitted and --repo is not set.
    pub file: Option<PathBuf>,

    /// Run `svn log -v` against this working copy or repository URL
    /// instead of reading a file.
    #[arg(long, conflicts_with = "file")]
    pub repo: Option<String>,

    /// Print one JSON event per line while parsing, before the final
    /// tables.
    #[arg(long)]
    pub events: bool,

    /// Pretty-print the final JSON output.
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
