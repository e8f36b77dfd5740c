//! Error types for world loading, session persistence and play.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or querying the room graph.
#[derive(Debug, Error)]
pub enum WorldError {
    /// The world file could not be read.
    #[error("cannot read world file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The world file is not well-formed JSON.
    #[error("malformed JSON world data: {0}")]
    Json(#[from] serde_json::Error),

    /// The world file is not well-formed TOML.
    #[error("malformed TOML world data: {0}")]
    Toml(#[from] toml::de::Error),

    /// Too few rooms to pick a start that is not the finish.
    #[error("world has {rooms} room(s); at least 2 are required")]
    EmptyWorld { rooms: usize },

    /// A room id that is not part of the world was looked up.
    #[error("room '{0}' not found in world data")]
    UnknownRoom(String),
}

/// Failures of the on-disk session store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be read or written.
    #[error("session store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store exists but does not hold a username -> room mapping.
    #[error("malformed session store: {0}")]
    Format(#[from] serde_json::Error),

    /// A delete was attempted before any session was ever saved.
    #[error("session store '{}' does not exist", .0.display())]
    MissingStore(PathBuf),

    #[error("no saved session for user '{0}'")]
    UnknownUser(String),
}

/// Failures while reading or applying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// The forced start room is missing or is the finish room.
    #[error("invalid start room '{0}'")]
    InvalidStart(String),
}

/// Anything that can abort a play session.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Input arrived after the session reached a terminal state.
    #[error("the game has already ended")]
    Ended,
}

pub type GameResult<T> = Result<T, GameError>;
