//! Terminal rendering for meetings and conflict clusters.
//!
//! Conflicting meetings are colored by cluster so clashing groups stand out.

use huddle_core::meeting::Meeting;
use huddle_core::view::{ViewItem, timeline_bar, timeline_span};
use owo_colors::{AnsiColors, OwoColorize};

use crate::time::{format_datetime, format_time};

/// Width of the range view timeline, in characters
const TIMELINE_WIDTH: usize = 48;

const CLUSTER_COLORS: &[AnsiColors] = &[
    AnsiColors::Red,
    AnsiColors::Yellow,
    AnsiColors::Magenta,
    AnsiColors::Cyan,
    AnsiColors::Blue,
];

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Meeting {
    fn render(&self) -> String {
        let mut lines = vec![
            self.title.bold().to_string(),
            format!("  {} {}", "id:".dimmed(), self.id),
            format!(
                "  {} {} → {}",
                "when:".dimmed(),
                format_datetime(&self.start),
                format_time(&self.end)
            ),
        ];
        if let Some(location) = &self.location {
            lines.push(format!("  {} {}", "where:".dimmed(), location));
        }
        if let Some(notes) = &self.notes {
            lines.push(format!("  {} {}", "notes:".dimmed(), notes));
        }
        lines.join("\n")
    }
}

impl Render for ViewItem<'_> {
    fn render(&self) -> String {
        let time = format!(
            "{} – {}",
            format_datetime(&self.meeting.start),
            format_time(&self.meeting.end)
        );
        let id = short_id(&self.meeting.id);

        if self.is_conflict {
            let color = cluster_color(self.cluster_index);
            format!(
                "{} {}  {} {}",
                "!".color(color),
                time.color(color),
                self.meeting.title.color(color).bold(),
                id.dimmed()
            )
        } else {
            format!("  {}  {} {}", time, self.meeting.title, id.dimmed())
        }
    }
}

/// One line per meeting.
pub fn list_view(items: &[ViewItem<'_>]) -> String {
    items
        .iter()
        .map(Render::render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// A bar per meeting, placed on a shared timeline.
pub fn range_view(items: &[ViewItem<'_>]) -> String {
    let Some((min, span)) = timeline_span(items) else {
        return String::new();
    };

    let label_width = items
        .iter()
        .map(|i| i.meeting.title.chars().count())
        .max()
        .unwrap_or(0)
        .min(24);

    items
        .iter()
        .map(|item| {
            let bar = timeline_bar(item, min, span);
            let offset = (bar.offset * TIMELINE_WIDTH as f64).round() as usize;
            let width = ((bar.width * TIMELINE_WIDTH as f64).round() as usize).max(1);
            let offset = offset.min(TIMELINE_WIDTH - 1);
            let width = width.min(TIMELINE_WIDTH - offset);

            let track = format!(
                "{}{}{}",
                " ".repeat(offset),
                "█".repeat(width),
                " ".repeat(TIMELINE_WIDTH - offset - width)
            );
            let label: String = item.meeting.title.chars().take(label_width).collect();
            let label = format!("{:<label_width$}", label);

            let start = format_time(&item.meeting.start);

            if item.is_conflict {
                let color = cluster_color(item.cluster_index);
                format!(
                    "{} |{}| {}",
                    label.color(color),
                    track.color(color),
                    start.dimmed()
                )
            } else {
                format!("{} |{}| {}", label, track, start.dimmed())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One block per conflict cluster.
pub fn cluster_view(number: usize, cluster_index: usize, cluster: &[&Meeting]) -> String {
    let color = cluster_color(cluster_index);
    let mut lines = vec![format!(
        "{} ({} meetings)",
        format!("Conflict {}", number).color(color).bold(),
        cluster.len()
    )];

    for meeting in cluster {
        lines.push(format!(
            "  {} – {}  {} {}",
            format_datetime(&meeting.start),
            format_time(&meeting.end),
            meeting.title,
            short_id(&meeting.id).dimmed()
        ));
    }

    lines.join("\n")
}

fn cluster_color(cluster_index: usize) -> AnsiColors {
    CLUSTER_COLORS[cluster_index % CLUSTER_COLORS.len()]
}

/// First 8 characters of an id, enough to address it with a prefix
pub fn short_id(id: &str) -> String {
    let short: String = id.chars().take(8).collect();
    format!("[{}]", short)
}
