//! File-backed meeting storage.
//!
//! `MeetingStore` is an explicit, caller-owned snapshot of `meetings.json`.
//! Nothing is global: load it, change it, save it. The conflict engine only
//! ever sees `store.all()`.

use std::path::PathBuf;

use tracing::info;

use crate::error::{HuddleError, HuddleResult};
use crate::meeting::{Meeting, MeetingUpdate, NewMeeting};

pub const MEETINGS_FILE: &str = "meetings.json";

pub struct MeetingStore {
    path: PathBuf,
    meetings: Vec<Meeting>,
}

impl MeetingStore {
    /// Load meetings from `path`. A missing file is an empty store.
    pub fn load(path: impl Into<PathBuf>) -> HuddleResult<Self> {
        let path = path.into();

        let meetings = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(|e| {
                HuddleError::Serialization(format!("Could not parse {}: {e}", path.display()))
            })?
        } else {
            Vec::new()
        };

        info!(path = %path.display(), count = meetings.len(), "loaded meetings");
        Ok(MeetingStore { path, meetings })
    }

    /// All meetings, in insertion order.
    pub fn all(&self) -> &[Meeting] {
        &self.meetings
    }

    pub fn get(&self, id: &str) -> Option<&Meeting> {
        self.meetings.iter().find(|m| m.id == id)
    }

    /// Look a meeting up by full id or by a unique id prefix.
    pub fn resolve(&self, query: &str) -> HuddleResult<&Meeting> {
        if let Some(meeting) = self.get(query) {
            return Ok(meeting);
        }

        let mut matches = self.meetings.iter().filter(|m| m.id.starts_with(query));
        match (matches.next(), matches.next()) {
            (Some(meeting), None) if !query.is_empty() => Ok(meeting),
            (Some(_), _) => Err(HuddleError::AmbiguousId(query.to_string())),
            _ => Err(HuddleError::MeetingNotFound(query.to_string())),
        }
    }

    pub fn create(&mut self, new: NewMeeting) -> &Meeting {
        let meeting = Meeting::new(new);
        self.meetings.push(meeting);
        &self.meetings[self.meetings.len() - 1]
    }

    pub fn update(&mut self, id: &str, update: MeetingUpdate) -> HuddleResult<&Meeting> {
        let meeting = self
            .meetings
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| HuddleError::MeetingNotFound(id.to_string()))?;

        meeting.apply(update);
        Ok(meeting)
    }

    pub fn delete(&mut self, id: &str) -> HuddleResult<Meeting> {
        let pos = self
            .meetings
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| HuddleError::MeetingNotFound(id.to_string()))?;

        Ok(self.meetings.remove(pos))
    }

    /// Write the store back to disk (via a temp file, then rename).
    pub fn save(&self) -> HuddleResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.meetings)
            .map_err(|e| HuddleError::Serialization(e.to_string()))?;

        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;

        info!(path = %self.path.display(), count = self.meetings.len(), "saved meetings");
        Ok(())
    }
}
