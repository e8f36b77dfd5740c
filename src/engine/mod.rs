mod items;
mod movement;
mod output;
mod render;

pub use items::{Inventory, handle_inventory, handle_pickup_answer, pickup_offer};
pub use movement::resolve_move;
pub use output::{Output, OutputBlock};
pub use render::describe;
