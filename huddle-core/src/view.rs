//! Turning conflict clusters into something a front end can draw.

use crate::cluster::Cluster;
use crate::interval::Interval;
use crate::meeting::Meeting;
use crate::options::{SortMode, ViewOptions};

/// One meeting, tagged with the cluster it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewItem<'a> {
    pub meeting: &'a Meeting,
    pub cluster_index: usize,
    pub is_conflict: bool,
}

/// Flatten clusters into a sorted, optionally filtered list.
///
/// A meeting is a conflict when its cluster has more than one member. Sorting
/// is stable, so ties keep cluster order.
pub fn build_view<'a>(
    clusters: &[Cluster<'a, Meeting>],
    options: &ViewOptions,
) -> Vec<ViewItem<'a>> {
    let mut items: Vec<ViewItem<'a>> = clusters
        .iter()
        .enumerate()
        .filter(|(_, cluster)| !options.filters.show_conflicts_only || cluster.len() > 1)
        .flat_map(|(cluster_index, cluster)| {
            let is_conflict = cluster.len() > 1;
            cluster.iter().map(move |&meeting| ViewItem {
                meeting,
                cluster_index,
                is_conflict,
            })
        })
        .collect();

    match options.sort_mode {
        SortMode::Start => items.sort_by_key(|item| item.meeting.start),
        SortMode::End => items.sort_by_key(|item| item.meeting.end),
    }

    items
}

/// Horizontal placement of one item on a timeline, as fractions of the
/// total span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineBar {
    pub offset: f64,
    pub width: f64,
}

/// Overall `(min start, span)` of the items, with the span floored at one
/// unit so a single zero-length meeting still gets a timeline.
pub fn timeline_span(items: &[ViewItem<'_>]) -> Option<(f64, f64)> {
    let min = items.iter().map(|i| i.meeting.start()).reduce(f64::min)?;
    let max = items.iter().map(|i| i.meeting.end()).reduce(f64::max)?;
    Some((min, (max - min).max(1.0)))
}

pub fn timeline_bar(item: &ViewItem<'_>, min: f64, span: f64) -> TimelineBar {
    TimelineBar {
        offset: (item.meeting.start() - min) / span,
        width: (item.meeting.end() - item.meeting.start()) / span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::build_conflict_clusters;
    use crate::options::Filters;
    use chrono::{TimeZone, Utc};

    fn meeting(id: &str, start: (u32, u32), end: (u32, u32)) -> Meeting {
        Meeting {
            id: id.to_string(),
            title: id.to_uppercase(),
            start: Utc.with_ymd_and_hms(2026, 1, 10, start.0, start.1, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 1, 10, end.0, end.1, 0).unwrap(),
            location: None,
            notes: None,
        }
    }

    fn sample() -> Vec<Meeting> {
        vec![
            meeting("late", (15, 0), (16, 0)),
            meeting("a", (9, 0), (10, 30)),
            meeting("b", (10, 0), (11, 0)),
            meeting("alone", (12, 0), (12, 30)),
        ]
    }

    fn view_ids(items: &[ViewItem<'_>]) -> Vec<String> {
        items.iter().map(|i| i.meeting.id.clone()).collect()
    }

    #[test]
    fn test_sorted_by_start_with_conflict_flags() {
        let meetings = sample();
        let clusters = build_conflict_clusters(&meetings, None).unwrap();
        let items = build_view(&clusters, &ViewOptions::default());

        assert_eq!(view_ids(&items), vec!["a", "b", "alone", "late"]);
        assert!(items[0].is_conflict && items[1].is_conflict);
        assert_eq!(items[0].cluster_index, items[1].cluster_index);
        assert!(!items[2].is_conflict);
        assert!(!items[3].is_conflict);
    }

    #[test]
    fn test_sorted_by_end() {
        let meetings = vec![
            meeting("long", (9, 0), (12, 0)),
            meeting("short", (10, 0), (10, 30)),
        ];
        let clusters = build_conflict_clusters(&meetings, None).unwrap();
        let options = ViewOptions {
            sort_mode: SortMode::End,
            ..Default::default()
        };
        assert_eq!(view_ids(&build_view(&clusters, &options)), vec!["short", "long"]);
    }

    #[test]
    fn test_conflicts_only_filter() {
        let meetings = sample();
        let clusters = build_conflict_clusters(&meetings, None).unwrap();
        let options = ViewOptions {
            filters: Filters {
                show_conflicts_only: true,
            },
            ..Default::default()
        };

        let items = build_view(&clusters, &options);
        assert_eq!(view_ids(&items), vec!["a", "b"]);
        assert!(items.iter().all(|i| i.is_conflict));
    }

    #[test]
    fn test_timeline_geometry() {
        let meetings = vec![
            meeting("a", (9, 0), (10, 0)),
            meeting("b", (11, 0), (13, 0)),
        ];
        let clusters = build_conflict_clusters(&meetings, None).unwrap();
        let items = build_view(&clusters, &ViewOptions::default());

        let (min, span) = timeline_span(&items).unwrap();
        assert_eq!(span, 4.0 * 3_600_000.0);

        let first = timeline_bar(&items[0], min, span);
        assert_eq!(first, TimelineBar { offset: 0.0, width: 0.25 });
        let second = timeline_bar(&items[1], min, span);
        assert_eq!(second, TimelineBar { offset: 0.5, width: 0.5 });
    }

    #[test]
    fn test_timeline_span_empty_and_zero_length() {
        assert_eq!(timeline_span(&[]), None);

        let meetings = vec![meeting("blip", (9, 0), (9, 0))];
        let clusters = build_conflict_clusters(&meetings, None).unwrap();
        let items = build_view(&clusters, &ViewOptions::default());
        let (_, span) = timeline_span(&items).unwrap();
        assert_eq!(span, 1.0);
    }
}
