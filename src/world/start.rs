use rand::Rng;
use rand::seq::IteratorRandom;

use super::model::World;
use crate::error::WorldError;

/// Pick a start room uniformly among every room except the finish.
pub fn random_start<'a, R: Rng + ?Sized>(
    world: &'a World,
    rng: &mut R,
) -> Result<&'a str, WorldError> {
    let rooms = world.rooms.len();
    if rooms <= 1 {
        return Err(WorldError::EmptyWorld { rooms });
    }

    world
        .rooms
        .keys()
        .filter(|id| !world.is_finish(id))
        .choose(rng)
        .map(String::as_str)
        .ok_or(WorldError::EmptyWorld { rooms })
}
