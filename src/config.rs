//! Game configuration.
//!
//! Values come from defaults, then an optional TOML file, then CLI flags
//! (applied by the binary through the `with_*` builders).
//!
//! ```toml
//! world_path = "public/custom.json"
//! store_path = "location.json"
//! finish_room = "Champion Battle!"
//! # start_room = "Your House"
//! # seed = 42
//! resume = false
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_WORLD_PATH: &str = "public/custom.json";
pub const DEFAULT_STORE_PATH: &str = "location.json";
pub const DEFAULT_FINISH_ROOM: &str = "Champion Battle!";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world_path: PathBuf,
    pub store_path: PathBuf,
    /// Terminal room; reaching it ends the game and deletes the session.
    pub finish_room: String,
    /// Forces the start room instead of picking one at random.
    pub start_room: Option<String>,
    /// Seed for the random start. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Continue from a saved room when the username already has one.
    pub resume: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_path: PathBuf::from(DEFAULT_WORLD_PATH),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            finish_room: DEFAULT_FINISH_ROOM.to_string(),
            start_room: None,
            seed: None,
            resume: false,
        }
    }
}

impl GameConfig {
    /// Read a TOML config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(src) => Self::from_toml_str(&src),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(src)?)
    }

    pub fn with_world_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.world_path = path.into();
        self
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    pub fn with_finish_room(mut self, room: impl Into<String>) -> Self {
        self.finish_room = room.into();
        self
    }

    pub fn with_start_room(mut self, room: impl Into<String>) -> Self {
        self.start_room = Some(room.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_resume(mut self, resume: bool) -> Self {
        self.resume = resume;
        self
    }
}
