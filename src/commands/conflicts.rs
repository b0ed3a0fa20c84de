use anyhow::Result;
use huddle_core::build_conflict_clusters;
use owo_colors::OwoColorize;

use crate::commands::load_store;
use crate::render::cluster_view;

pub fn run() -> Result<()> {
    let (_, store) = load_store()?;
    let clusters = build_conflict_clusters(store.all(), None)?;

    let conflicts: Vec<_> = clusters
        .iter()
        .enumerate()
        .filter(|(_, cluster)| cluster.len() > 1)
        .collect();

    if conflicts.is_empty() {
        println!("{}", "No conflicts".green());
        return Ok(());
    }

    for (number, (cluster_index, cluster)) in conflicts.iter().enumerate() {
        if number > 0 {
            println!();
        }
        println!("{}", cluster_view(number + 1, *cluster_index, cluster));
    }

    Ok(())
}
