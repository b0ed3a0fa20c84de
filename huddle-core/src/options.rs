//! Persisted view options (how meetings are listed).

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{HuddleError, HuddleResult};

pub const VIEW_OPTIONS_FILE: &str = "view.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Range,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Start,
    End,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filters {
    pub show_conflicts_only: bool,
}

/// Every field falls back to its default when missing from the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    pub view_mode: ViewMode,
    pub sort_mode: SortMode,
    pub filters: Filters,
}

impl ViewOptions {
    /// Load options from `path`, falling back to defaults if the file is
    /// missing or unreadable.
    pub fn load(path: &Path) -> ViewOptions {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return ViewOptions::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read view options");
                return ViewOptions::default();
            }
        };

        match toml::from_str(&content) {
            Ok(options) => options,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable view options");
                ViewOptions::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> HuddleResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| HuddleError::Serialization(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }
}

impl FromStr for ViewMode {
    type Err = HuddleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(ViewMode::List),
            "range" => Ok(ViewMode::Range),
            _ => Err(HuddleError::Config(format!(
                "Unknown view mode '{s}' (expected list or range)"
            ))),
        }
    }
}

impl FromStr for SortMode {
    type Err = HuddleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(SortMode::Start),
            "end" => Ok(SortMode::End),
            _ => Err(HuddleError::Config(format!(
                "Unknown sort mode '{s}' (expected start or end)"
            ))),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::List => write!(f, "list"),
            ViewMode::Range => write!(f, "range"),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Start => write!(f, "start"),
            SortMode::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let options = ViewOptions::load(&dir.path().join(VIEW_OPTIONS_FILE));
        assert_eq!(options, ViewOptions::default());
        assert_eq!(options.view_mode, ViewMode::List);
        assert_eq!(options.sort_mode, SortMode::Start);
        assert!(!options.filters.show_conflicts_only);
    }

    #[test]
    fn test_partial_file_merges_over_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(VIEW_OPTIONS_FILE);
        std::fs::write(&path, "sort_mode = \"end\"\n\n[filters]\n").unwrap();

        let options = ViewOptions::load(&path);
        assert_eq!(options.view_mode, ViewMode::List);
        assert_eq!(options.sort_mode, SortMode::End);
        assert!(!options.filters.show_conflicts_only);
    }

    #[test]
    fn test_garbage_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(VIEW_OPTIONS_FILE);
        std::fs::write(&path, "view_mode = [oops").unwrap();
        assert_eq!(ViewOptions::load(&path), ViewOptions::default());
    }

    #[test]
    fn test_unreadable_path_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(VIEW_OPTIONS_FILE);
        // Reading a directory fails with an error other than NotFound
        std::fs::create_dir(&path).unwrap();
        assert_eq!(ViewOptions::load(&path), ViewOptions::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(VIEW_OPTIONS_FILE);

        let mut options = ViewOptions::default();
        options.view_mode = "range".parse().unwrap();
        options.filters.show_conflicts_only = true;
        options.save(&path).unwrap();

        let reloaded = ViewOptions::load(&path);
        assert_eq!(reloaded.view_mode, ViewMode::Range);
        assert!(reloaded.filters.show_conflicts_only);
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!("range".parse::<ViewMode>().unwrap(), ViewMode::Range);
        assert_eq!("end".parse::<SortMode>().unwrap(), SortMode::End);
        assert!(matches!("grid".parse::<ViewMode>(), Err(HuddleError::Config(_))));
        assert!("middle".parse::<SortMode>().is_err());
        assert_eq!(SortMode::End.to_string(), "end");
    }
}
