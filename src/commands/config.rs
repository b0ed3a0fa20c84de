use anyhow::Result;
use huddle_core::config::HuddleConfig;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let config_path = HuddleConfig::config_path()?;
    let config = HuddleConfig::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:    {}", config_path.display());
    println!("  Data:      {}", config.display_path().display());
    println!("  Meetings:  {}", config.meetings_path().display());
    println!("  View:      {}", config.view_options_path().display());
    println!();
    println!("{}", "Defaults".bold());
    println!("  Duration:  {}", config.default_duration);

    Ok(())
}
