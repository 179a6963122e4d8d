//! Keyboard dispatch: a priority chain from finished game, to active game,
//! to the hub world.

use crate::core::game_state::GameState;
use crate::core::session;
use crate::games::{maze, memory, shooting, typing, ActiveMinigame};
use crate::geometry::Direction;
use crate::world::logic::move_player;
use crossterm::event::{KeyCode, KeyEvent};

/// Result of handling one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Route one key press to whatever currently owns the keyboard.
pub fn handle_key(state: &mut GameState, key: KeyEvent) -> InputResult {
    // A finished game holds its result on screen until any key acknowledges
    // it; that key also walks the player back onto the midway.
    if state
        .active_minigame
        .as_ref()
        .is_some_and(|game| game.outcome().is_some())
    {
        session::resolve_minigame(state);
        return InputResult::Continue;
    }

    if state.in_minigame() {
        return handle_minigame_key(state, key);
    }

    handle_world_key(state, key)
}

fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

fn handle_minigame_key(state: &mut GameState, key: KeyEvent) -> InputResult {
    // Esc abandons any booth, mid-game state and all.
    if key.code == KeyCode::Esc {
        if let Some(id) = state.active_minigame.as_ref().map(|game| game.id()) {
            state.add_log_entry(format!("You walk away from the {} booth.", id.name()));
        }
        session::exit_minigame(state);
        return InputResult::Continue;
    }

    match state.active_minigame.as_mut() {
        Some(ActiveMinigame::Typing(game)) => {
            let input = match key.code {
                KeyCode::Char(c) => typing::TypingInput::Char(c),
                KeyCode::Backspace => typing::TypingInput::Backspace,
                _ => typing::TypingInput::Other,
            };
            typing::process_input(game, input);
        }
        Some(ActiveMinigame::Maze(game)) => {
            if let Some(dir) = direction_for(key.code) {
                maze::process_input(game, dir);
            }
        }
        Some(ActiveMinigame::Memory(game)) => {
            let input = match key.code {
                KeyCode::Up => memory::MemoryInput::Up,
                KeyCode::Down => memory::MemoryInput::Down,
                KeyCode::Left => memory::MemoryInput::Left,
                KeyCode::Right => memory::MemoryInput::Right,
                KeyCode::Enter => memory::MemoryInput::Flip,
                _ => memory::MemoryInput::Other,
            };
            memory::process_input(game, input);
        }
        Some(ActiveMinigame::Shooting(game)) => {
            let input = match key.code {
                KeyCode::Up => shooting::ShootingInput::Up,
                KeyCode::Down => shooting::ShootingInput::Down,
                KeyCode::Left => shooting::ShootingInput::Left,
                KeyCode::Right => shooting::ShootingInput::Right,
                KeyCode::Enter => shooting::ShootingInput::Fire,
                _ => shooting::ShootingInput::Other,
            };
            shooting::process_input(game, input);
        }
        // The archery booth takes no input beyond Esc
        Some(ActiveMinigame::Archery(_)) | None => {}
    }

    InputResult::Continue
}

fn handle_world_key(state: &mut GameState, key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return InputResult::Quit,
        KeyCode::Enter => {
            if let Some(id) = state.hovered_zone {
                session::start_minigame(state, id);
            }
        }
        code => {
            if let Some(dir) = direction_for(code) {
                move_player(state, dir);
            }
        }
    }
    InputResult::Continue
}
