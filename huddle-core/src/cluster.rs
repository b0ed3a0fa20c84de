//! Conflict clustering.
//!
//! Meetings are nodes, conflicts are undirected edges, and a cluster is a
//! connected component of that graph. Every input interval lands in exactly
//! one cluster; a cluster of one is a meeting that conflicts with nothing.
//!
//! Edges either come from the caller (already computed, e.g. reused for
//! highlighting) or are inferred with [`detect_overlaps`].

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::error::{HuddleError, HuddleResult};
use crate::interval::Interval;
use crate::overlap::{ConflictPair, detect_overlaps};

/// A group of mutually (directly or transitively) conflicting intervals,
/// borrowed from the input in discovery order.
pub type Cluster<'a, T> = Vec<&'a T>;

/// What to do with an edge that names an id missing from the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Drop the edge. Explicit edge lists are often pre-filtered, so this is
    /// the default.
    #[default]
    Skip,
    /// Fail the whole call with `UnknownEdgeEndpoint`.
    Reject,
}

#[derive(Debug, Clone, Default)]
pub struct ClusterOptions {
    pub edge_policy: EdgePolicy,
}

/// Group `intervals` into conflict clusters using the default options.
///
/// With `explicit_edges = None` the edges are inferred from the intervals.
pub fn build_conflict_clusters<'a, T: Interval>(
    intervals: &'a [T],
    explicit_edges: Option<&[ConflictPair<T::Id>]>,
) -> HuddleResult<Vec<Cluster<'a, T>>> {
    build_conflict_clusters_with(intervals, explicit_edges, &ClusterOptions::default())
}

/// Group `intervals` into conflict clusters.
///
/// Fails without a partial result if two intervals share an id, if any bound
/// is not finite, or (under `EdgePolicy::Reject`) if an edge names an id that
/// is not in `intervals`. Self-loop edges are ignored and repeated edges
/// collapse into one.
///
/// Clusters are ordered by the input position of their first member. Members
/// are in depth-first discovery order: from each node the traversal follows
/// the first unvisited neighbor, neighbors ordered by edge insertion.
pub fn build_conflict_clusters_with<'a, T: Interval>(
    intervals: &'a [T],
    explicit_edges: Option<&[ConflictPair<T::Id>]>,
    options: &ClusterOptions,
) -> HuddleResult<Vec<Cluster<'a, T>>> {
    if intervals.is_empty() {
        return Ok(Vec::new());
    }

    let index = index_intervals(intervals)?;

    let inferred;
    let edges = match explicit_edges {
        Some(edges) => edges,
        None => {
            inferred = detect_overlaps(intervals);
            &inferred[..]
        }
    };

    let graph = ConflictGraph::build(&index, edges, options.edge_policy)?;
    debug!(
        nodes = intervals.len(),
        edges = graph.edge_count,
        inferred = explicit_edges.is_none(),
        "built conflict graph"
    );

    let clusters = graph
        .components()
        .into_iter()
        .map(|members| members.into_iter().map(|i| &intervals[i]).collect())
        .collect();

    Ok(clusters)
}

/// Map every interval id to the position of the cluster that holds it.
pub fn conflict_map<T: Interval>(clusters: &[Cluster<'_, T>]) -> HashMap<T::Id, usize> {
    clusters
        .iter()
        .enumerate()
        .flat_map(|(k, cluster)| cluster.iter().map(move |interval| (interval.id().clone(), k)))
        .collect()
}

/// Validate the input and map each id to its position.
fn index_intervals<T: Interval>(intervals: &[T]) -> HuddleResult<HashMap<&T::Id, usize>> {
    let mut index = HashMap::with_capacity(intervals.len());

    for (i, interval) in intervals.iter().enumerate() {
        let (start, end) = (interval.start(), interval.end());
        if !start.is_finite() || !end.is_finite() {
            return Err(HuddleError::MalformedInterval {
                id: interval.id().to_string(),
                start,
                end,
            });
        }
        if index.insert(interval.id(), i).is_some() {
            return Err(HuddleError::DuplicateIdentifier(interval.id().to_string()));
        }
    }

    Ok(index)
}

/// Undirected adjacency over input positions.
struct ConflictGraph {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl ConflictGraph {
    fn build<K>(
        index: &HashMap<&K, usize>,
        edges: &[ConflictPair<K>],
        policy: EdgePolicy,
    ) -> HuddleResult<Self>
    where
        K: Eq + Hash + fmt::Display,
    {
        let mut adjacency = vec![Vec::new(); index.len()];
        let mut seen = HashSet::new();

        for (a, b) in edges {
            let (Some(&ia), Some(&ib)) = (index.get(a), index.get(b)) else {
                let missing = if index.contains_key(a) { b } else { a };
                match policy {
                    EdgePolicy::Reject => {
                        return Err(HuddleError::UnknownEdgeEndpoint(missing.to_string()));
                    }
                    EdgePolicy::Skip => {
                        debug!(%a, %b, %missing, "skipping edge with unknown endpoint");
                        continue;
                    }
                }
            };

            if ia == ib {
                continue;
            }

            if seen.insert((ia.min(ib), ia.max(ib))) {
                adjacency[ia].push(ib);
                adjacency[ib].push(ia);
            }
        }

        Ok(ConflictGraph {
            adjacency,
            edge_count: seen.len(),
        })
    }

    /// Connected components, seeded in node order.
    ///
    /// Each stack frame remembers how far through its neighbor list it got,
    /// which yields the same visiting order as the recursive walk.
    fn components(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.adjacency.len()];
        let mut components = Vec::new();

        for seed in 0..self.adjacency.len() {
            if visited[seed] {
                continue;
            }

            visited[seed] = true;
            let mut members = vec![seed];
            let mut stack = vec![(seed, 0usize)];

            while let Some(frame) = stack.last_mut() {
                let (node, cursor) = *frame;
                let next = self.adjacency[node][cursor..]
                    .iter()
                    .position(|&neighbor| !visited[neighbor])
                    .map(|offset| cursor + offset);

                match next {
                    Some(pos) => {
                        frame.1 = pos + 1;
                        let neighbor = self.adjacency[node][pos];
                        visited[neighbor] = true;
                        members.push(neighbor);
                        stack.push((neighbor, 0));
                    }
                    None => {
                        stack.pop();
                    }
                }
            }

            components.push(members);
        }

        components
    }
}
