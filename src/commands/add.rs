use anyhow::Result;
use huddle_core::meeting::NewMeeting;
use owo_colors::OwoColorize;
use tracing::info;

use crate::commands::{conflicting_with, load_store};
use crate::render::short_id;
use crate::time::{format_datetime, parse_datetime, resolve_end};

pub fn run(
    title: String,
    start: String,
    end: Option<String>,
    duration: Option<String>,
    location: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let (config, mut store) = load_store()?;

    let start = parse_datetime(&start)?;
    let end = resolve_end(
        start,
        end.as_deref(),
        duration.as_deref(),
        config.default_duration()?,
    )?;

    if end < start {
        anyhow::bail!("Meeting ends before it starts");
    }

    let id = store
        .create(NewMeeting {
            title,
            start,
            end,
            location: location.filter(|l| !l.is_empty()),
            notes: notes.filter(|n| !n.is_empty()),
        })
        .id
        .clone();
    store.save()?;
    info!(%id, %start, %end, "created meeting");

    let meeting = store.resolve(&id)?;
    println!(
        "{} {} {}",
        format!("Created: {}", meeting.title).green(),
        format_datetime(&meeting.start).dimmed(),
        short_id(&meeting.id).dimmed()
    );

    let clashes = conflicting_with(store.all(), &id)?;
    if !clashes.is_empty() {
        println!("{}", "Conflicts with:".yellow());
        for other in clashes {
            println!("  {} {}", format_datetime(&other.start), other.title);
        }
    }

    Ok(())
}
