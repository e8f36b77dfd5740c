use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Runtime world type used by the game loop.
#[derive(Debug)]
pub struct World {
    pub rooms: BTreeMap<String, Room>,
    /// Terminal room; reaching it ends the session.
    pub finish_room: String,
}

#[derive(Debug)]
pub struct Room {
    pub id: String,
    pub text: String,
    /// Exits in the order the world file lists them.
    pub moves: Vec<(Direction, String)>,
    pub object: Option<RoomObject>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomObject {
    pub name: String,
    pub kind: ObjectKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Collectible: the player is offered a pickup.
    Special,
    Ordinary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl World {
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn is_finish(&self, id: &str) -> bool {
        self.finish_room == id
    }
}

impl Room {
    pub fn exit(&self, direction: Direction) -> Option<&String> {
        self.moves
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|(_, target)| target)
    }

    pub fn special_object(&self) -> Option<&RoomObject> {
        self.object
            .as_ref()
            .filter(|o| o.kind == ObjectKind::Special)
    }
}

impl ObjectKind {
    pub fn from_type_str(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("special") {
            ObjectKind::Special
        } else {
            ObjectKind::Ordinary
        }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ();

    /// Exact, already-lowercased direction words only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or(())
    }
}
