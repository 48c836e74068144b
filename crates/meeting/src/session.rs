//! Explicit state container for a meeting in progress.

use crate::action::MeetingAction;
use crate::reducer::reduce;
use crate::rows::average_rating;
use ecodash_domain::entities::MeetingRecord;
use rust_decimal::Decimal;

/// Holds the record being edited and whether it has unsaved changes.
///
/// Sections of the meeting share one session and change it only through
/// [`MeetingSession::dispatch`].
#[derive(Debug, Clone)]
pub struct MeetingSession {
    record: MeetingRecord,
    dirty: bool,
    revision: u64,
}

impl MeetingSession {
    /// Starts a session from a freshly loaded record.
    #[must_use]
    pub fn new(record: MeetingRecord) -> Self {
        Self {
            record,
            dirty: false,
            revision: 0,
        }
    }

    #[must_use]
    pub fn record(&self) -> &MeetingRecord {
        &self.record
    }

    /// Applies one action and returns the new record.
    pub fn dispatch(&mut self, action: MeetingAction) -> &MeetingRecord {
        let next = reduce(&self.record, action);
        if next != self.record {
            self.record = next;
            self.dirty = true;
            self.revision += 1;
        }
        &self.record
    }

    /// Whether there are edits not yet saved.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of effective edits since the session started.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Call after the record was written successfully.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Average of the division ratings given so far.
    #[must_use]
    pub fn average_rating(&self) -> Decimal {
        average_rating(self.record.ratings.iter().map(|(_, score)| score))
    }

    #[must_use]
    pub fn into_record(self) -> MeetingRecord {
        self.record
    }
}
