//! Single-shot conveniences over [`LogParser`].

use crate::error::Result;
use crate::model::ParseResults;
use std::io::BufRead;

use super::streaming::LogParser;

/// Parse a complete log held in memory.
///
/// # Arguments
///
/// * `text` - The full `svn log -v` output
///
/// # Returns
///
/// * `Ok(ParseResults)` - The revision and file tables
/// * `Err(SvnLogError::MalformedLine)` - A structurally matched line
///   failed a sub-parse
pub fn parse_log(text: &str) -> Result<ParseResults> {
    let mut parser = LogParser::new();
    parser.feed(text)?;
    Ok(parser.finish()?.results)
}

/// Parse a log from any buffered reader, feeding the parser one line at a
/// time.
///
/// This covers the file and piped-stdin arrival modes; the parser itself
/// accepts any chunking, line-sized or not.
///
/// # Arguments
///
/// * `reader` - The source of raw log text
///
/// # Returns
///
/// * `Ok(ParseResults)` - The revision and file tables
/// * `Err(SvnLogError::Io)` - The reader failed
/// * `Err(SvnLogError::MalformedLine)` - A structurally matched line
///   failed a sub-parse
pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<ParseResults> {
    let mut parser = LogParser::new();
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        parser.feed(&line)?;
    }

    Ok(parser.finish()?.results)
}
