use log::{debug, warn};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use super::model::{Direction, ObjectKind, Room, RoomObject, World};
use crate::error::WorldError;

////////////////////
/// FILE STRUCTS ///
////////////////////

/// The whole file is a mapping of room name -> room.
type WorldFile = BTreeMap<String, RoomConfig>;

#[derive(Deserialize)]
struct RoomConfig {
    text: String,

    #[serde(default, deserialize_with = "ordered_moves")]
    moves: Vec<(String, String)>, // direction -> room name, file order

    #[serde(default)]
    objects: Vec<ObjectConfig>, // only the first entry is used
}

#[derive(Deserialize)]
struct ObjectConfig {
    name: String,

    #[serde(rename = "type", default)]
    kind: String, // "special" or anything else
}

/// Read a `direction -> room` table keeping the order it was written in.
fn ordered_moves<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct MovesVisitor;

    impl<'de> Visitor<'de> for MovesVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a table of direction -> room name")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut moves = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((dir, target)) = map.next_entry::<String, String>()? {
                moves.push((dir, target));
            }
            Ok(moves)
        }
    }

    deserializer.deserialize_map(MovesVisitor)
}

/// Serialization format of a world file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldFormat {
    Json,
    Toml,
}

impl WorldFormat {
    /// `.json` files are JSON; everything else is read as TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => WorldFormat::Json,
            _ => WorldFormat::Toml,
        }
    }
}

pub fn load_world_from_file(path: &Path, finish_room: &str) -> Result<World, WorldError> {
    let src = fs::read_to_string(path).map_err(|source| WorldError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loading world from {}", path.display());
    load_world_from_str(&src, WorldFormat::from_path(path), finish_room)
}

pub fn load_world_from_str(
    src: &str,
    format: WorldFormat,
    finish_room: &str,
) -> Result<World, WorldError> {
    let file: WorldFile = match format {
        WorldFormat::Json => serde_json::from_str(src)?,
        WorldFormat::Toml => toml::from_str(src)?,
    };

    let rooms: BTreeMap<String, Room> = file
        .into_iter()
        .map(|(id, cfg)| {
            let room = room_from_config(&id, cfg);
            (id, room)
        })
        .collect();

    if !rooms.contains_key(finish_room) {
        warn!("finish room '{}' is not defined in the world data", finish_room);
    }
    debug!("loaded {} rooms", rooms.len());

    Ok(World {
        rooms,
        finish_room: finish_room.to_string(),
    })
}

fn room_from_config(id: &str, cfg: RoomConfig) -> Room {
    let mut moves: Vec<(Direction, String)> = Vec::with_capacity(cfg.moves.len());
    for (dir, target) in cfg.moves {
        match dir.trim().to_lowercase().parse::<Direction>() {
            Ok(d) if moves.iter().any(|(seen, _)| *seen == d) => {
                warn!("room '{}': duplicate move '{}' ignored", id, dir)
            }
            Ok(d) => moves.push((d, target)),
            Err(()) => warn!("room '{}': ignoring move '{}' (not a direction)", id, dir),
        }
    }

    if cfg.objects.len() > 1 {
        warn!(
            "room '{}' lists {} objects; only the first is used",
            id,
            cfg.objects.len()
        );
    }

    let object = cfg.objects.into_iter().next().map(|o| RoomObject {
        name: o.name,
        kind: ObjectKind::from_type_str(&o.kind),
    });

    Room {
        id: id.to_string(),
        text: cfg.text,
        moves,
        object,
    }
}
