use anyhow::Result;
use huddle_core::config::HuddleConfig;
use huddle_core::options::{SortMode, ViewMode, ViewOptions};
use owo_colors::OwoColorize;

pub fn run(
    view: Option<ViewMode>,
    sort: Option<SortMode>,
    conflicts_only: Option<bool>,
) -> Result<()> {
    let config = HuddleConfig::load()?;
    let path = config.view_options_path();
    let mut options = ViewOptions::load(&path);

    let changed = view.is_some() || sort.is_some() || conflicts_only.is_some();
    if let Some(view) = view {
        options.view_mode = view;
    }
    if let Some(sort) = sort {
        options.sort_mode = sort;
    }
    if let Some(conflicts_only) = conflicts_only {
        options.filters.show_conflicts_only = conflicts_only;
    }

    if changed {
        options.save(&path)?;
    }

    println!("{}", "View options".bold());
    println!("  view:            {}", options.view_mode);
    println!("  sort:            {}", options.sort_mode);
    println!("  conflicts only:  {}", options.filters.show_conflicts_only);

    Ok(())
}
