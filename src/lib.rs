pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod session;
pub mod world;

pub use config::GameConfig;
pub use error::{ConfigError, GameError, GameResult, StoreError, WorldError};
pub use game::{Game, Phase};
pub use session::SessionStore;
pub use world::{World, load_world_from_file, load_world_from_str};
