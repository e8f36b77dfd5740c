use std::fmt;

use crate::engine::output::Output;
use crate::world;

/// Special items collected during this process. Never persisted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: impl Into<String>) {
        self.items.push(name.into());
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            f.write_str("(none)")
        } else {
            f.write_str(&self.items.join(", "))
        }
    }
}

/// The object the player should be asked about, if any.
///
/// Only a `special` object is ever offered; ordinary ones are scenery.
pub fn pickup_offer(room: &world::Room) -> Option<&world::RoomObject> {
    room.special_object()
}

/// Apply the player's answer to a pickup offer. Returns true if taken.
pub fn handle_pickup_answer(
    out: &mut Output,
    inventory: &mut Inventory,
    object: &world::RoomObject,
    answer: &str,
) -> bool {
    if !answer.trim().eq_ignore_ascii_case("yes") {
        return false;
    }

    inventory.add(object.name.clone());
    out.event("Item obtained!");
    true
}

pub fn handle_inventory(out: &mut Output, inventory: &Inventory) {
    out.status(format!("Current Item(s): {}", inventory));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::output::OutputBlock;
    use crate::world::{ObjectKind, Room, RoomObject};

    fn room_with(object: Option<RoomObject>) -> Room {
        Room {
            id: "Cave".into(),
            text: "Dark.".into(),
            moves: Vec::new(),
            object,
        }
    }

    fn object(name: &str, kind: ObjectKind) -> RoomObject {
        RoomObject {
            name: name.into(),
            kind,
        }
    }

    #[test]
    fn only_special_objects_are_offered() {
        assert!(pickup_offer(&room_with(None)).is_none());
        assert!(pickup_offer(&room_with(Some(object("Rock", ObjectKind::Ordinary)))).is_none());
        assert_eq!(
            pickup_offer(&room_with(Some(object("Potion", ObjectKind::Special)))).map(|o| o.name.as_str()),
            Some("Potion")
        );
    }

    #[test]
    fn yes_adds_item_and_reports() {
        let mut out = Output::new();
        let mut inv = Inventory::new();
        let potion = object("Potion", ObjectKind::Special);

        assert!(handle_pickup_answer(&mut out, &mut inv, &potion, " YES "));
        assert_eq!(inv.items(), ["Potion".to_string()]);
        assert_eq!(out.blocks, vec![OutputBlock::Event("Item obtained!".into())]);
    }

    #[test]
    fn anything_else_declines() {
        let mut out = Output::new();
        let mut inv = Inventory::new();
        let potion = object("Potion", ObjectKind::Special);

        for answer in ["no", "y", "", "yes please"] {
            assert!(!handle_pickup_answer(&mut out, &mut inv, &potion, answer));
        }
        assert!(inv.is_empty());
        assert!(out.blocks.is_empty());
    }

    #[test]
    fn status_line_lists_items_in_order() {
        let mut out = Output::new();
        let mut inv = Inventory::new();
        handle_inventory(&mut out, &inv);
        assert_eq!(out.text(), "Current Item(s): (none)");

        inv.add("Pokeball");
        inv.add("Potion");
        let mut out = Output::new();
        handle_inventory(&mut out, &inv);
        assert_eq!(out.text(), "Current Item(s): Pokeball, Potion");
    }
}
