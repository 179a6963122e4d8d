//! The session context: everything mutable that outlives a single mini-game.

use crate::constants::LOG_CAPACITY;
use crate::games::{ActiveMinigame, GameId};
use crate::geometry::Point;
use crate::world::{world_layout, WorldLayout};
use std::collections::{HashSet, VecDeque};

/// Main session state for one run of the program.
///
/// Nothing here is persisted; a restart starts the midway over.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The avatar's position on the midway grounds. Preserved untouched for
    /// the whole lifetime of a mini-game so leaving a booth puts the player
    /// back exactly where it stood.
    pub player: Point,
    /// The booth the player currently stands on, if it is still winnable.
    pub hovered_zone: Option<GameId>,
    /// Booths beaten this session. Append-only; a beaten booth never reopens.
    pub beaten: HashSet<GameId>,
    /// The running mini-game, if any.
    pub active_minigame: Option<ActiveMinigame>,
    /// Recent session messages, newest first.
    pub event_log: VecDeque<String>,
    /// Unix timestamp of session start, for the footer clock.
    pub session_started: i64,
    pub layout: &'static WorldLayout,
}

impl GameState {
    pub fn new(session_started: i64) -> Self {
        let mut state = Self {
            player: Point::new(0, 0),
            hovered_zone: None,
            beaten: HashSet::new(),
            active_minigame: None,
            event_log: VecDeque::new(),
            session_started,
            layout: world_layout(),
        };
        state.add_log_entry("Welcome to the midway. Walk onto a booth and press Enter.".to_string());
        state
    }

    /// Push a message onto the event log, evicting the oldest past capacity.
    pub fn add_log_entry(&mut self, message: String) {
        if self.event_log.len() >= LOG_CAPACITY {
            self.event_log.pop_back();
        }
        self.event_log.push_front(message);
    }

    pub fn in_minigame(&self) -> bool {
        self.active_minigame.is_some()
    }

    pub fn beaten_count(&self) -> usize {
        self.beaten.len()
    }
}
