//! Incremental log parsing.
//!
//! [`LogParser`] accepts raw text in arbitrarily sized chunks and behaves
//! as if the chunks were concatenated and then split into logical lines:
//! an unterminated tail is buffered until the next `feed` or `finish`
//! call, so output is invariant under re-chunking of the same input.

use crate::error::{Result, SvnLogError};
use crate::events::ParseEvent;
use crate::model::{ActionEntry, ParseResults};
use tracing::{debug, trace};

use super::grammar::{self, LineKind};

/// Everything produced by finalization: the events emitted while flushing
/// the final revision, plus the completed tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseSummary {
    /// Events emitted while processing the buffered tail and sealing the
    /// last open revision.
    pub events: Vec<ParseEvent>,

    /// The full revision and file tables.
    pub results: ParseResults,
}

/// Incremental parser for `svn log -v` output.
///
/// Feed text with [`feed`](LogParser::feed), then call
/// [`finish`](LogParser::finish) exactly once. Each call returns the
/// events that crossed a record boundary during that call.
///
/// # Examples
///
/// ```
/// use svnlog::parser::LogParser;
///
/// let mut parser = LogParser::new();
/// parser.feed("r1 | alice | 2011-10-31 17:30:54 -0400 | 1 line\n")?;
/// parser.feed("Changed paths:\n   A /trunk\n\ninitial import\n")?;
/// let summary = parser.finish()?;
/// assert_eq!(summary.results.revisions[&1].message, "initial import");
/// # Ok::<(), svnlog::SvnLogError>(())
/// ```
#[derive(Debug, Default)]
pub struct LogParser {
    results: ParseResults,
    /// The revision currently accepting actions and message lines.
    current: Option<u64>,
    /// Unterminated tail carried over between feed calls.
    pending: String,
    finished: bool,
}

impl LogParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// View of the tables built so far. Valid to query at any point before
    /// [`finish`](LogParser::finish) hands the tables out.
    pub fn results(&self) -> &ParseResults {
        &self.results
    }

    /// Consume one chunk of raw log text.
    ///
    /// Any chunking of the input is accepted; logical lines are only
    /// processed once their terminator has arrived.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ParseEvent>)` - Events emitted by this chunk, in order
    /// * `Err(SvnLogError::MalformedLine)` - A structurally matched line
    ///   failed a sub-parse; the rest of the chunk is dropped, prior state
    ///   stays valid and the parser remains usable
    /// * `Err(SvnLogError::AlreadyFinalized)` - `finish` already completed
    pub fn feed(&mut self, chunk: &str) -> Result<Vec<ParseEvent>> {
        if self.finished {
            return Err(SvnLogError::AlreadyFinalized);
        }

        self.pending.push_str(chunk);
        let buffer = std::mem::take(&mut self.pending);

        // Hold back everything after the last line terminator.
        let complete_end = buffer
            .rfind(['\n', '\r'])
            .map(|i| i + 1)
            .unwrap_or(0);
        self.pending = buffer[complete_end..].to_string();

        let mut events = Vec::new();
        for line in logical_lines(&buffer[..complete_end]) {
            self.process_line(line, &mut events)?;
        }

        Ok(events)
    }

    /// Signal end of input.
    ///
    /// Processes the buffered tail as a final line, seals the revision
    /// still open (emitting its completion event), and hands out the full
    /// tables. A second call fails with
    /// [`SvnLogError::AlreadyFinalized`] and leaves nothing changed.
    pub fn finish(&mut self) -> Result<ParseSummary> {
        if self.finished {
            return Err(SvnLogError::AlreadyFinalized);
        }

        let mut events = Vec::new();

        if !self.pending.is_empty() {
            let tail = std::mem::take(&mut self.pending);
            self.process_line(&tail, &mut events)?;
        }

        if let Some(number) = self.current.take() {
            self.seal(number, &mut events);
        }

        self.finished = true;
        debug!(
            "parse complete: {} revisions, {} files",
            self.results.revisions.len(),
            self.results.files.len()
        );

        Ok(ParseSummary {
            events,
            results: std::mem::take(&mut self.results),
        })
    }

    fn process_line(&mut self, line: &str, events: &mut Vec<ParseEvent>) -> Result<()> {
        match grammar::classify(line) {
            LineKind::Separator => {}
            LineKind::Revision => {
                let record = grammar::parse_revision_header(line)?;
                if let Some(previous) = self.current.take() {
                    self.seal(previous, events);
                }
                trace!("opened revision r{}", record.number);
                self.current = Some(record.number);
                // Duplicate revision numbers overwrite in place.
                self.results.revisions.insert(record.number, record);
            }
            LineKind::Action => {
                let (action, file) = grammar::parse_action(line)?;
                // Actions outside any revision would dangle; drop them so
                // every entry's rev names an existing revision record.
                if let Some(rev) = self.current {
                    self.record_action(ActionEntry { action, file, rev }, events);
                }
            }
            LineKind::Other => {
                if let Some(rev) = self.current
                    && let Some(record) = self.results.revisions.get_mut(&rev)
                {
                    record.append_message_line(line);
                }
            }
        }
        Ok(())
    }

    fn record_action(&mut self, entry: ActionEntry, events: &mut Vec<ParseEvent>) {
        self.results
            .files
            .entry(entry.file.clone())
            .or_default()
            .touch(entry.rev);

        if let Some(record) = self.results.revisions.get_mut(&entry.rev) {
            record.actions.insert(entry.file.clone(), entry.clone());
        }

        events.push(ParseEvent::ActionObserved(entry));
    }

    fn seal(&mut self, number: u64, events: &mut Vec<ParseEvent>) {
        if let Some(record) = self.results.revisions.get(&number) {
            trace!("sealed revision r{} ({} actions)", number, record.actions.len());
            events.push(ParseEvent::RevisionCompleted(record.clone()));
        }
    }
}

/// Split text into logical lines: one or more `\n`/`\r` characters form a
/// single terminator, and empty segments between terminators are noise.
fn logical_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r']).filter(|line| !line.is_empty())
}
