pub mod add;
pub mod check;
pub mod config;
pub mod conflicts;
pub mod delete;
pub mod edit;
pub mod list;
pub mod options;
pub mod show;

use anyhow::Result;
use huddle_core::config::HuddleConfig;
use huddle_core::meeting::Meeting;
use huddle_core::store::MeetingStore;
use huddle_core::{build_conflict_clusters, conflict_map};

/// Load the global config and the meeting store it points at.
pub fn load_store() -> Result<(HuddleConfig, MeetingStore)> {
    let config = HuddleConfig::load()?;
    let store = MeetingStore::load(config.meetings_path())?;
    Ok((config, store))
}

/// The other meetings in the same conflict cluster as `id`.
pub fn conflicting_with<'a>(meetings: &'a [Meeting], id: &str) -> Result<Vec<&'a Meeting>> {
    let clusters = build_conflict_clusters(meetings, None)?;
    let map = conflict_map(&clusters);

    let Some(&k) = map.get(id) else {
        return Ok(Vec::new());
    };

    Ok(clusters[k].iter().copied().filter(|m| m.id != id).collect())
}
