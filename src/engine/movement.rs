use log::debug;

use crate::error::WorldError;
use crate::world::{self, Direction};

/// Resolve a move command from `current_room_id`, returning the new room id.
///
/// Anything that is not a direction, or a direction with no exit here,
/// leaves the player where they are. A destination that does not exist
/// in the world is a data error.
pub fn resolve_move(
    world: &world::World,
    current_room_id: &str,
    cmd: &str,
) -> Result<String, WorldError> {
    let room = world
        .room(current_room_id)
        .ok_or_else(|| WorldError::UnknownRoom(current_room_id.to_string()))?;

    let direction = match cmd.trim().to_lowercase().parse::<Direction>() {
        Ok(d) => d,
        Err(()) => {
            debug!("'{}' is not a direction; staying in '{}'", cmd, room.id);
            return Ok(room.id.clone());
        }
    };

    let Some(target) = room.exit(direction) else {
        debug!("no exit {} from '{}'", direction, room.id);
        return Ok(room.id.clone());
    };

    if world.room(target).is_none() {
        return Err(WorldError::UnknownRoom(target.clone()));
    }

    debug!("moved {} from '{}' to '{}'", direction, room.id, target);
    Ok(target.clone())
}
