mod commands;
mod render;
mod time;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use huddle_core::options::{SortMode, ViewMode};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "huddle")]
#[command(about = "Keep track of your meetings and see which ones clash")]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a meeting
    Add {
        title: String,

        /// Start (e.g. "2026-03-20 15:00" or "2026-03-20T15:00")
        #[arg(short, long)]
        start: String,

        /// End date/time
        #[arg(short, long, conflicts_with = "duration")]
        end: Option<String>,

        /// Duration (e.g. "30m", "1h", "1h30m")
        #[arg(short, long, conflicts_with = "end")]
        duration: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List meetings, highlighting conflicts
    List {
        /// Only show meetings that clash with another
        #[arg(long)]
        conflicts_only: bool,

        /// list or range (defaults to the saved view option)
        #[arg(long)]
        view: Option<ViewMode>,

        /// start or end (defaults to the saved view option)
        #[arg(long)]
        sort: Option<SortMode>,
    },
    /// Show groups of clashing meetings
    Conflicts,
    /// Show one meeting (by id or id prefix)
    Show { id: String },
    /// Change fields of a meeting
    Edit {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        start: Option<String>,

        #[arg(short, long)]
        end: Option<String>,

        /// New location (empty string clears it)
        #[arg(short, long)]
        location: Option<String>,

        /// New notes (empty string clears them)
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Delete a meeting
    Delete {
        id: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Cluster intervals from a JSON file and print the clusters as JSON
    Check {
        /// JSON array of {"id", "start", "end", ...} objects
        file: PathBuf,

        /// JSON array of [id, id] conflict pairs (inferred when omitted)
        #[arg(long)]
        edges: Option<PathBuf>,

        /// Fail on edges that name unknown ids instead of skipping them
        #[arg(long)]
        strict: bool,
    },
    /// Show or change the saved view options
    Options {
        #[arg(long)]
        view: Option<ViewMode>,

        #[arg(long)]
        sort: Option<SortMode>,

        #[arg(long)]
        conflicts_only: Option<bool>,
    },
    /// Show config and data paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Add {
            title,
            start,
            end,
            duration,
            location,
            notes,
        } => commands::add::run(title, start, end, duration, location, notes),
        Commands::List {
            conflicts_only,
            view,
            sort,
        } => commands::list::run(conflicts_only, view, sort),
        Commands::Conflicts => commands::conflicts::run(),
        Commands::Show { id } => commands::show::run(&id),
        Commands::Edit {
            id,
            title,
            start,
            end,
            location,
            notes,
        } => commands::edit::run(&id, title, start, end, location, notes),
        Commands::Delete { id, force } => commands::delete::run(&id, force),
        Commands::Check {
            file,
            edges,
            strict,
        } => commands::check::run(&file, edges.as_deref(), strict),
        Commands::Options {
            view,
            sort,
            conflicts_only,
        } => commands::options::run(view, sort, conflicts_only),
        Commands::Config => commands::config::run(),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
