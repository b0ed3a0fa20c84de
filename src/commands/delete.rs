use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use tracing::info;

use crate::commands::load_store;
use crate::render::Render;

pub fn run(id: &str, force: bool) -> Result<()> {
    let (_, mut store) = load_store()?;
    let meeting = store.resolve(id)?;

    // Confirm unless --force
    if !force {
        println!("{}", meeting.render());
        println!();
        let confirmed = Confirm::new()
            .with_prompt("Delete this meeting?")
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    let id = meeting.id.clone();
    let removed = store.delete(&id)?;
    store.save()?;
    info!(%id, "deleted meeting");

    println!("{}", format!("Deleted: {}", removed.title).red());
    Ok(())
}
