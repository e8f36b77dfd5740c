mod loader;
mod model;
mod start;

pub use loader::{WorldFormat, load_world_from_file, load_world_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Direction, ObjectKind, Room, RoomObject, World};
pub use start::random_start;
