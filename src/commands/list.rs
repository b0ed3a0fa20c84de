use anyhow::Result;
use huddle_core::build_conflict_clusters;
use huddle_core::options::{SortMode, ViewMode, ViewOptions};
use huddle_core::view::build_view;
use owo_colors::OwoColorize;

use crate::commands::load_store;
use crate::render;

pub fn run(conflicts_only: bool, view: Option<ViewMode>, sort: Option<SortMode>) -> Result<()> {
    let (config, store) = load_store()?;

    // Flags apply to this invocation only; `huddle options` persists them
    let mut options = ViewOptions::load(&config.view_options_path());
    if conflicts_only {
        options.filters.show_conflicts_only = true;
    }
    if let Some(view) = view {
        options.view_mode = view;
    }
    if let Some(sort) = sort {
        options.sort_mode = sort;
    }

    let clusters = build_conflict_clusters(store.all(), None)?;
    let items = build_view(&clusters, &options);

    if items.is_empty() {
        let message = if store.all().is_empty() {
            "No meetings yet. Add one with `huddle add`"
        } else {
            "No conflicting meetings"
        };
        println!("{}", message.dimmed());
        return Ok(());
    }

    let output = match options.view_mode {
        ViewMode::List => render::list_view(&items),
        ViewMode::Range => render::range_view(&items),
    };
    println!("{}", output);

    Ok(())
}
