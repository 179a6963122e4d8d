//! Per-frame time dispatch to whichever mini-game is running.

use crate::core::game_state::GameState;
use crate::games::{memory, shooting, typing, ActiveMinigame};

/// Advance the active mini-game's timers by `dt_ms` milliseconds.
///
/// The maze and archery booths carry no timers; the hub world itself only
/// changes on key presses. Returns true if any visible state changed.
pub fn tick_game(state: &mut GameState, dt_ms: u64) -> bool {
    match state.active_minigame.as_mut() {
        Some(ActiveMinigame::Typing(game)) => typing::tick_typing(game, dt_ms),
        Some(ActiveMinigame::Memory(game)) => memory::tick_memory(game, dt_ms),
        Some(ActiveMinigame::Shooting(game)) => shooting::tick_shooting(game, dt_ms),
        Some(ActiveMinigame::Maze(_)) | Some(ActiveMinigame::Archery(_)) | None => false,
    }
}
