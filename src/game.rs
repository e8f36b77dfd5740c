//! One play session: username, turns, pickup offers and the finish.
//!
//! The game is input-driven. The text interface shows [`Game::prompt`],
//! reads a line and hands it to [`Game::step`], printing whatever output
//! comes back, until [`Game::is_over`].

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::engine::{
    Inventory, Output, describe, handle_inventory, handle_pickup_answer, pickup_offer,
    resolve_move,
};
use crate::error::{ConfigError, GameError, GameResult, StoreError};
use crate::session::SessionStore;
use crate::world::{self, World};

pub const WELCOME: &str = "Welcome to the Adventure Game:";
pub const USERNAME_PROMPT: &str = "Enter a username: ";
pub const PICKUP_PROMPT: &str = "Pick up the special item? (yes or no): ";
pub const MOVE_PROMPT: &str = "Your move: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingUsername,
    AwaitingPickup,
    AwaitingMove,
    /// Reached the finish room; the session record is gone.
    Finished,
    /// Player typed quit or exit; the record keeps the last room.
    Quit,
}

pub struct Game {
    world: World,
    store: SessionStore,
    resume: bool,
    phase: Phase,
    current_room_id: String,
    username: Option<String>,
    inventory: Inventory,
    turn_index: u64,
}

impl Game {
    /// Set up a game and choose where it starts.
    pub fn new(world: World, config: &GameConfig) -> GameResult<Self> {
        let start = match &config.start_room {
            Some(room) => {
                if world.room(room).is_none() || world.is_finish(room) {
                    return Err(ConfigError::InvalidStart(room.clone()).into());
                }
                room.clone()
            }
            None => {
                let mut rng = match config.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                world::random_start(&world, &mut rng)?.to_string()
            }
        };
        debug!("start room: {}", start);

        Ok(Game {
            world,
            store: SessionStore::new(&config.store_path),
            resume: config.resume,
            phase: Phase::AwaitingUsername,
            current_room_id: start,
            username: None,
            inventory: Inventory::new(),
            turn_index: 0,
        })
    }

    pub fn start(&self) -> Output {
        let mut out = Output::new();
        out.say(WELCOME);
        out
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Finished | Phase::Quit)
    }

    /// What the text interface should ask for next, if anything.
    pub fn prompt(&self) -> Option<&'static str> {
        match self.phase {
            Phase::AwaitingUsername => Some(USERNAME_PROMPT),
            Phase::AwaitingPickup => Some(PICKUP_PROMPT),
            Phase::AwaitingMove => Some(MOVE_PROMPT),
            Phase::Finished | Phase::Quit => None,
        }
    }

    pub fn current_room(&self) -> &str {
        &self.current_room_id
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Process one line of player input.
    pub fn step(&mut self, input: &str) -> GameResult<Output> {
        let mut out = Output::new();
        match self.phase {
            Phase::AwaitingUsername => self.begin_session(&mut out, input)?,
            Phase::AwaitingPickup => self.answer_pickup(&mut out, input),
            Phase::AwaitingMove => self.take_turn(&mut out, input)?,
            Phase::Finished | Phase::Quit => return Err(GameError::Ended),
        }
        Ok(out)
    }

    fn begin_session(&mut self, out: &mut Output, input: &str) -> GameResult<()> {
        let name = input.trim();
        if name.is_empty() {
            out.say("Please enter a username.");
            return Ok(());
        }

        if self.resume {
            self.try_resume(name)?;
        }

        self.store.save(name, &self.current_room_id)?;
        self.username = Some(name.to_string());
        info!("session started for {} in '{}'", name, self.current_room_id);

        out.say(describe(&self.world, &self.current_room_id)?);
        self.begin_turn(out);
        Ok(())
    }

    fn try_resume(&mut self, name: &str) -> GameResult<()> {
        match self.store.get(name) {
            Ok(room) if self.world.room(&room).is_some() && !self.world.is_finish(&room) => {
                info!("resuming {} in '{}'", name, room);
                self.current_room_id = room;
            }
            Ok(room) => warn!("saved room '{}' for {} is not playable; starting fresh", room, name),
            Err(StoreError::UnknownUser(_)) => debug!("no saved session for {}", name),
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    /// Offer a pickup if the room has a special object, else show the status line.
    fn begin_turn(&mut self, out: &mut Output) {
        let offer = self
            .world
            .room(&self.current_room_id)
            .and_then(pickup_offer)
            .is_some();

        if offer {
            self.phase = Phase::AwaitingPickup;
        } else {
            handle_inventory(out, &self.inventory);
            self.phase = Phase::AwaitingMove;
        }
    }

    fn answer_pickup(&mut self, out: &mut Output, input: &str) {
        let object = self
            .world
            .room(&self.current_room_id)
            .and_then(pickup_offer);

        if let Some(object) = object {
            if handle_pickup_answer(out, &mut self.inventory, object, input) {
                info!("picked up {}", object.name);
            }
        }

        handle_inventory(out, &self.inventory);
        self.phase = Phase::AwaitingMove;
    }

    fn take_turn(&mut self, out: &mut Output, input: &str) -> GameResult<()> {
        let cmd = input.trim().to_lowercase();

        // Both words end the game anywhere.
        if cmd == "quit" || cmd == "exit" {
            out.say("Goodbye.");
            self.phase = Phase::Quit;
            info!("player quit in '{}'", self.current_room_id);
            return Ok(());
        }

        let username = self.username.clone().ok_or(GameError::Ended)?;

        self.turn_index += 1;
        self.current_room_id = resolve_move(&self.world, &self.current_room_id, &cmd)?;
        out.say(describe(&self.world, &self.current_room_id)?);
        self.store.save(&username, &self.current_room_id)?;

        if self.world.is_finish(&self.current_room_id) {
            self.store.delete(&username)?;
            self.phase = Phase::Finished;
            out.event("Congratulations, you finished the game!");
            info!("{} finished after {} turn(s)", username, self.turn_index);
            return Ok(());
        }

        self.begin_turn(out);
        Ok(())
    }
}
