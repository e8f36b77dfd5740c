use crate::error::WorldError;
use crate::world;

/// Render a room's narrative, its object and its exits.
///
/// The finish room gets its narrative and an empty options trailer only.
pub fn describe(world: &world::World, room_id: &str) -> Result<String, WorldError> {
    let room = world
        .room(room_id)
        .ok_or_else(|| WorldError::UnknownRoom(room_id.to_string()))?;

    let mut desc = String::new();
    desc.push_str(&room.text);
    desc.push('\n');

    if world.is_finish(room_id) {
        desc.push_str("Your options are:\n");
        return Ok(desc);
    }

    if let Some(object) = &room.object {
        desc.push_str(&format!("You see a {}.", object.name));
    }
    desc.push('\n');

    desc.push_str("Your options are:\n");
    for (direction, target) in &room.moves {
        desc.push_str(&format!("'{}' to go to {}\n", direction, target));
    }

    Ok(desc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{WorldFormat, load_world_from_str};

    fn world() -> world::World {
        load_world_from_str(
            r#"{
                "Lab": {
                    "text": "The professor waits.",
                    "moves": {"west": "Town", "north": "Route 1"},
                    "objects": [{"name": "Pokedex", "type": "special"}]
                },
                "Town": {"text": "A quiet town.", "moves": {"east": "Lab"}},
                "Route 1": {"text": "Grass.", "moves": {"south": "Lab"}},
                "Champion Battle!": {"text": "The champion awaits."}
            }"#,
            WorldFormat::Json,
            "Champion Battle!",
        )
        .unwrap()
    }

    #[test]
    fn room_with_object_and_exits() {
        let text = describe(&world(), "Lab").unwrap();
        assert_eq!(
            text,
            "The professor waits.\nYou see a Pokedex.\nYour options are:\n\
             'west' to go to Town\n'north' to go to Route 1\n"
        );
    }

    #[test]
    fn room_without_object_has_blank_line() {
        let text = describe(&world(), "Town").unwrap();
        assert_eq!(
            text,
            "A quiet town.\n\nYour options are:\n'east' to go to Lab\n"
        );
    }

    #[test]
    fn finish_room_has_empty_options() {
        let text = describe(&world(), "Champion Battle!").unwrap();
        assert_eq!(text, "The champion awaits.\nYour options are:\n");
    }

    #[test]
    fn unknown_room_is_an_error() {
        let err = describe(&world(), "Cave").unwrap_err();
        assert!(matches!(err, WorldError::UnknownRoom(id) if id == "Cave"));
    }
}
