use anyhow::Result;
use huddle_core::meeting::MeetingUpdate;
use owo_colors::OwoColorize;
use tracing::info;

use crate::commands::load_store;
use crate::time::parse_datetime;

pub fn run(
    id: &str,
    title: Option<String>,
    start: Option<String>,
    end: Option<String>,
    location: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let (_, mut store) = load_store()?;
    let id = store.resolve(id)?.id.clone();

    let update = MeetingUpdate {
        title,
        start: start.as_deref().map(parse_datetime).transpose()?,
        end: end.as_deref().map(parse_datetime).transpose()?,
        location,
        notes,
    };

    if update.is_empty() {
        anyhow::bail!(
            "Nothing to change. Pass at least one of --title, --start, --end, --location, --notes"
        );
    }

    let meeting = store.update(&id, update)?;
    if meeting.end < meeting.start {
        anyhow::bail!("Meeting would end before it starts; nothing saved");
    }
    let title = meeting.title.clone();
    store.save()?;
    info!(%id, "updated meeting");

    println!("{}", format!("Updated: {}", title).green());
    Ok(())
}
