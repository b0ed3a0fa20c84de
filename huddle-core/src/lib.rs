//! Core types for huddle.
//!
//! - `overlap` and `cluster`: find overlapping meetings and group them into
//!   conflict clusters
//! - `meeting`, `store`: meeting records and their JSON file
//! - `options`, `view`, `config`: how and where meetings are shown and kept

pub mod cluster;
pub mod config;
pub mod error;
pub mod interval;
pub mod meeting;
pub mod options;
pub mod overlap;
pub mod store;
pub mod view;

pub use cluster::{
    Cluster, ClusterOptions, EdgePolicy, build_conflict_clusters, build_conflict_clusters_with,
    conflict_map,
};
pub use error::{HuddleError, HuddleResult};
pub use interval::{Interval, Span};
pub use meeting::{Meeting, MeetingUpdate, NewMeeting};
pub use overlap::{ConflictPair, detect_overlaps, overlaps};
