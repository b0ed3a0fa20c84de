//! Global huddle configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{HuddleError, HuddleResult};
use crate::options::VIEW_OPTIONS_FILE;
use crate::store::MEETINGS_FILE;

static DEFAULT_DATA_DIR: &str = "~/huddle";
static DEFAULT_DURATION: &str = "1h";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_duration() -> String {
    DEFAULT_DURATION.to_string()
}

/// Global configuration at ~/.config/huddle/config.toml
///
/// Any key can be overridden with a `HUDDLE_` environment variable
/// (e.g. `HUDDLE_DATA_DIR`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HuddleConfig {
    /// Where meetings.json and view.toml live
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Meeting length used when neither an end nor a duration is given
    #[serde(default = "default_duration")]
    pub default_duration: String,
}

impl Default for HuddleConfig {
    fn default() -> Self {
        HuddleConfig {
            data_dir: default_data_dir(),
            default_duration: default_duration(),
        }
    }
}

impl HuddleConfig {
    pub fn config_path() -> HuddleResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| HuddleError::Config("Could not determine config directory".into()))?
            .join("huddle");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first run.
    pub fn load() -> HuddleResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path`, with `HUDDLE_*` environment variables taking
    /// precedence over the file.
    pub fn load_from(path: &Path) -> HuddleResult<Self> {
        Self::load_with_env(path, Environment::with_prefix("HUDDLE"))
    }

    fn load_with_env(path: &Path, env: Environment) -> HuddleResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .map_err(|e| HuddleError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| HuddleError::Config(e.to_string()))
    }

    /// The data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    /// The data directory as configured, keeping `~` for display.
    pub fn display_path(&self) -> &Path {
        &self.data_dir
    }

    pub fn meetings_path(&self) -> PathBuf {
        self.data_path().join(MEETINGS_FILE)
    }

    pub fn view_options_path(&self) -> PathBuf {
        self.data_path().join(VIEW_OPTIONS_FILE)
    }

    pub fn default_duration(&self) -> HuddleResult<Duration> {
        humantime::parse_duration(&self.default_duration).map_err(|e| {
            HuddleError::Config(format!(
                "Invalid default_duration '{}': {e}",
                self.default_duration
            ))
        })
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> HuddleResult<()> {
        let contents = format!(
            "\
# huddle configuration

# Where your meetings live:
# data_dir = \"{}\"

# Length of a new meeting when no end or duration is given:
# default_duration = \"{}\"
",
            DEFAULT_DATA_DIR, DEFAULT_DURATION
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                HuddleError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| HuddleError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
