//! Timetable configuration.
//!
//! Loaded from an optional TOML file layered under `TIMETABLE_*`
//! environment variables. Missing keys fall back to the built-in room set
//! and an 80% / 50% palette.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::coloring::PaletteConfig;
use crate::models::Classroom;

/// Rooms available when no configuration overrides them.
pub const DEFAULT_CLASSROOMS: [u16; 4] = [1036, 1040, 1041, 1044];

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    /// Schedulable room numbers.
    pub classrooms: Vec<u16>,
    pub palette: PaletteConfig,
    pub logger: LoggerConfig,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            classrooms: DEFAULT_CLASSROOMS.to_vec(),
            palette: PaletteConfig::default(),
            logger: LoggerConfig::default(),
        }
    }
}

impl TimetableConfig {
    /// Loads configuration from `path` (extension optional, may be absent)
    /// and the environment, e.g. `TIMETABLE_PALETTE_LIGHTNESS=40`.
    /// `TIMETABLE_CLASSROOMS` takes a comma-separated room list.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Self::load_with_prefix(path, "TIMETABLE")
    }

    fn load_with_prefix(path: &str, prefix: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(prefix)
                    .separator("_")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("classrooms"),
            )
            .build()?
            .try_deserialize::<TimetableConfig>()
    }

    /// Whether `classroom` is one of the configured rooms.
    pub fn has_classroom(&self, classroom: Classroom) -> bool {
        self.classrooms.contains(&classroom.0)
    }
}

/// Logging settings for binaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: Level,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { level: Level::Info }
    }
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<Level> for tracing::Level {
    fn from(value: Level) -> Self {
        match value {
            Level::Trace => tracing::Level::TRACE,
            Level::Debug => tracing::Level::DEBUG,
            Level::Info => tracing::Level::INFO,
            Level::Warn => tracing::Level::WARN,
            Level::Error => tracing::Level::ERROR,
        }
    }
}
