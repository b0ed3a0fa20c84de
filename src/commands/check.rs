use std::path::Path;

use anyhow::{Context, Result, bail};
use huddle_core::{
    ClusterOptions, ConflictPair, EdgePolicy, Span, build_conflict_clusters_with,
};
use serde_json::Value;
use tracing::debug;

pub fn run(file: &Path, edges: Option<&Path>, strict: bool) -> Result<()> {
    let spans: Vec<Span> = read_json(file)?;
    let edges = edges
        .map(|path| read_json(path).and_then(parse_edges))
        .transpose()?;

    let clusters = cluster_spans(&spans, edges.as_deref(), strict)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&clusters).context("Failed to serialize clusters")?
    );
    Ok(())
}

/// Cluster `spans` and return the clusters as a JSON array of arrays.
///
/// `strict` turns edges naming unknown ids into an error instead of
/// skipping them.
fn cluster_spans(
    spans: &[Span],
    edges: Option<&[ConflictPair<String>]>,
    strict: bool,
) -> Result<Value> {
    let edge_policy = if strict {
        EdgePolicy::Reject
    } else {
        EdgePolicy::Skip
    };
    debug!(
        spans = spans.len(),
        explicit_edges = edges.map(<[_]>::len),
        ?edge_policy,
        "checking spans"
    );

    let clusters = build_conflict_clusters_with(spans, edges, &ClusterOptions { edge_policy })?;
    serde_json::to_value(&clusters).context("Failed to serialize clusters")
}

/// Read `[[a, b], ...]` pairs. Ids may be strings or numbers, like span ids.
fn parse_edges(raw: Vec<(Value, Value)>) -> Result<Vec<ConflictPair<String>>> {
    raw.into_iter()
        .map(|(a, b)| -> Result<ConflictPair<String>> { Ok((edge_id(a)?, edge_id(b)?)) })
        .collect()
}

fn edge_id(value: Value) -> Result<String> {
    match value {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => bail!("Edge ids must be strings or numbers, got {other}"),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use huddle_core::HuddleError;
    use serde_json::json;

    fn spans() -> Vec<Span> {
        serde_json::from_value(json!([
            {"id": "m1", "start": 900, "end": 1030, "title": "Standup"},
            {"id": "m2", "start": 1000, "end": 1100},
            {"id": "m3", "start": 1130, "end": 1230}
        ]))
        .unwrap()
    }

    fn edge_list(value: Value) -> Vec<ConflictPair<String>> {
        parse_edges(serde_json::from_value(value).unwrap()).unwrap()
    }

    fn cluster_ids(clusters: &Value) -> Vec<Vec<&str>> {
        clusters
            .as_array()
            .unwrap()
            .iter()
            .map(|c| {
                c.as_array()
                    .unwrap()
                    .iter()
                    .map(|s| s["id"].as_str().unwrap())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn inferred_clusters_keep_payload() {
        let clusters = cluster_spans(&spans(), None, false).unwrap();

        assert_eq!(cluster_ids(&clusters), vec![vec!["m1", "m2"], vec!["m3"]]);
        assert_eq!(clusters[0][0]["title"], "Standup");
    }

    #[test]
    fn explicit_edges_skip_unknown_ids() {
        let edges = edge_list(json!([["m1", "m3"], ["m2", "ghost"]]));
        let clusters = cluster_spans(&spans(), Some(edges.as_slice()), false).unwrap();

        assert_eq!(cluster_ids(&clusters), vec![vec!["m1", "m3"], vec!["m2"]]);
    }

    #[test]
    fn strict_rejects_unknown_ids() {
        let edges = edge_list(json!([["m1", "m3"], ["m2", "ghost"]]));
        let err = cluster_spans(&spans(), Some(edges.as_slice()), true).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<HuddleError>(),
            Some(HuddleError::UnknownEdgeEndpoint(id)) if id == "ghost"
        ));
    }

    #[test]
    fn numeric_edge_ids() {
        assert_eq!(
            edge_list(json!([[1, "b"]])),
            vec![("1".to_string(), "b".to_string())]
        );

        let raw: Vec<(Value, Value)> = serde_json::from_value(json!([[true, "b"]])).unwrap();
        assert!(parse_edges(raw).is_err());
    }
}
