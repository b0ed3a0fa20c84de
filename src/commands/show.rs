use anyhow::Result;
use owo_colors::OwoColorize;

use crate::commands::{conflicting_with, load_store};
use crate::render::Render;
use crate::time::format_datetime;

pub fn run(id: &str) -> Result<()> {
    let (_, store) = load_store()?;
    let meeting = store.resolve(id)?;

    println!("{}", meeting.render());

    let clashes = conflicting_with(store.all(), &meeting.id)?;
    if !clashes.is_empty() {
        println!();
        println!("{}", "Conflicts with:".yellow());
        for other in clashes {
            println!("  {} {}", format_datetime(&other.start), other.title);
        }
    }

    Ok(())
}
