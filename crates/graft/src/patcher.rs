//! Table-driven patching
//!
//! Applies every entry of a [`SignatureTable`] to a [`SourceBuffer`], in table
//! order, against the same evolving buffer. A payload spliced by one entry is
//! visible to the search of every later entry.
//!
//! Application is atomic: entries are applied to a working copy that replaces
//! the caller's buffer only after the last entry succeeds. If any splice fails
//! the caller's buffer is left exactly as it was and no later entry runs.

use serde::Serialize;
use strum::Display;
use tracing::{debug, info, warn};

use crate::buffer::SourceBuffer;
use crate::error::Result;
use crate::locator;
use crate::signature::SignatureTable;
use crate::splicer;

/// What happened to one table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(tag = "outcome", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntryOutcome {
    /// Payload inserted at byte offset `at`
    Applied { at: usize, inserted: usize },
    NoMatch,
}

impl EntryOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EntryOutcome::Applied { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    pub name: String,
    #[serde(flatten)]
    pub outcome: EntryOutcome,
}

/// Per-entry outcomes of a successful `patch` call, in table order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    pub entries: Vec<EntryReport>,
    pub original_len: usize,
    pub final_len: usize,
}

impl PatchReport {
    pub fn applied_count(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_applied()).count()
    }

    pub fn bytes_inserted(&self) -> usize {
        self.final_len - self.original_len
    }

    pub fn outcome(&self, name: &str) -> Option<EntryOutcome> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .map(|e| e.outcome)
    }
}

/// Apply `table` to `buffer`.
pub fn patch(buffer: &mut SourceBuffer, table: &SignatureTable) -> Result<PatchReport> {
    let original_len = buffer.len();
    let mut working = buffer.clone();
    let mut entries = Vec::with_capacity(table.len());

    for (index, entry) in table.entries().iter().enumerate() {
        let outcome = match locator::find(working.as_bytes(), &entry.signature) {
            Some(at) => {
                if let Err(e) = splicer::splice(&mut working, at, &entry.payload) {
                    warn!(
                        "Entry {} '{}' failed at offset {}: {}",
                        index, entry.name, at, e
                    );
                    return Err(e);
                }
                debug!(
                    "Entry {} '{}' applied at offset {} (+{} bytes)",
                    index,
                    entry.name,
                    at,
                    entry.payload.len()
                );
                EntryOutcome::Applied {
                    at,
                    inserted: entry.payload.len(),
                }
            }
            None => {
                debug!("Entry {} '{}' not found", index, entry.name);
                EntryOutcome::NoMatch
            }
        };
        entries.push(EntryReport {
            name: entry.name.clone(),
            outcome,
        });
    }

    *buffer = working;

    let report = PatchReport {
        entries,
        original_len,
        final_len: buffer.len(),
    };
    info!(
        "Patched {}/{} entries ({} -> {} bytes)",
        report.applied_count(),
        table.len(),
        report.original_len,
        report.final_len
    );
    Ok(report)
}
