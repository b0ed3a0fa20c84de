//! Meeting records.
//!
//! A meeting is what the store persists and what the CLI shows. For conflict
//! detection it is just an `Interval` on the epoch-millisecond timeline; the
//! title, location and notes ride along untouched.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::interval::Interval;

/// A stored meeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Fields for a meeting that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewMeeting {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// Partial update: `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeetingUpdate {
    pub title: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl Meeting {
    pub fn new(new: NewMeeting) -> Self {
        Meeting {
            id: uuid::Uuid::new_v4().to_string(),
            title: new.title,
            start: new.start,
            end: new.end,
            location: new.location,
            notes: new.notes,
        }
    }

    /// Merge the fields present in `update` into this meeting.
    pub fn apply(&mut self, update: MeetingUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(start) = update.start {
            self.start = start;
        }
        if let Some(end) = update.end {
            self.end = end;
        }
        if let Some(location) = update.location {
            self.location = Some(location).filter(|l| !l.is_empty());
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes).filter(|n| !n.is_empty());
        }
    }
}

impl MeetingUpdate {
    pub fn is_empty(&self) -> bool {
        *self == MeetingUpdate::default()
    }
}

impl Interval for Meeting {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }

    fn start(&self) -> f64 {
        self.start.timestamp_millis() as f64
    }

    fn end(&self) -> f64 {
        self.end.timestamp_millis() as f64
    }
}

impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
