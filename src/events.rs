//! Incremental parse events.
//!
//! The parser reports progress as typed events so consumers can stream
//! results without waiting for finalization:
//! - [`ParseEvent::ActionObserved`] the moment an action line is parsed,
//!   before its owning revision is sealed
//! - [`ParseEvent::RevisionCompleted`] when the next revision header (or
//!   end-of-input) proves no more lines belong to a revision
//!
//! Events serialize as single-line JSON objects tagged with an `event`
//! field, suitable for NDJSON output (one object per line).

use crate::error::Result;
use crate::model::{ActionEntry, RevisionRecord};
use serde::{Deserialize, Serialize};

/// An event emitted while parsing crosses a record boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ParseEvent {
    /// An action line was parsed and folded into the tables.
    ActionObserved(ActionEntry),

    /// A revision was sealed; its record is final.
    RevisionCompleted(RevisionRecord),
}

impl ParseEvent {
    /// Serialize the event to a single-line JSON string for NDJSON output.
    pub fn to_ndjson_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The revision number the event belongs to.
    pub fn rev(&self) -> u64 {
        match self {
            ParseEvent::ActionObserved(entry) => entry.rev,
            ParseEvent::RevisionCompleted(record) => record.number,
        }
    }
}
