//! Booth entry, exit, and completion handling.

use crate::core::game_state::GameState;
use crate::games::{self, GameId, GameOutcome};
use crate::world::logic::recompute_hover;

/// Enter a booth and start its game. Beaten booths refuse entry.
pub fn start_minigame(state: &mut GameState, id: GameId) {
    if state.beaten.contains(&id) || state.active_minigame.is_some() {
        return;
    }

    let mut rng = rand::thread_rng();
    let game = games::start_game(id, state.layout, &mut rng);
    state.add_log_entry(format!("You step up to the {} booth.", id.name()));
    state.active_minigame = Some(game);
}

/// Leave the current booth, whatever its state.
///
/// Dropping the game value destroys every countdown and movement timer the
/// game owned, so nothing keeps running behind the midway. The player's
/// position is untouched.
pub fn exit_minigame(state: &mut GameState) {
    if state.active_minigame.take().is_some() {
        recompute_hover(state);
    }
}

/// Record a booth as beaten. Inserting twice has no additional effect.
pub fn mark_beaten(state: &mut GameState, id: GameId) {
    if state.beaten.insert(id) {
        state.add_log_entry(format!("The {} booth is beaten for good.", id.name()));
    }
}

/// Apply a finished game's outcome and leave the booth.
///
/// Wins mark the booth beaten; losses just go home. Returns the outcome that
/// was applied, or `None` if no game was active or it had not resolved.
pub fn resolve_minigame(state: &mut GameState) -> Option<GameOutcome> {
    let (id, outcome) = match state.active_minigame.as_ref() {
        Some(game) => (game.id(), game.outcome()?),
        None => return None,
    };

    match outcome {
        GameOutcome::Won => {
            state.add_log_entry(format!("You won the {}!", id.name()));
            mark_beaten(state, id);
        }
        GameOutcome::Lost => {
            state.add_log_entry(format!("You lost the {}.", id.name()));
        }
    }

    exit_minigame(state);
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::ActiveMinigame;
    use crate::geometry::Point;

    fn force_outcome(state: &mut GameState, outcome: GameOutcome) {
        match state.active_minigame.as_mut().unwrap() {
            ActiveMinigame::Archery(g) => g.outcome = Some(outcome),
            ActiveMinigame::Typing(g) => g.outcome = Some(outcome),
            ActiveMinigame::Maze(g) => g.outcome = Some(outcome),
            ActiveMinigame::Memory(g) => g.outcome = Some(outcome),
            ActiveMinigame::Shooting(g) => g.outcome = Some(outcome),
        }
    }

    #[test]
    fn test_start_sets_active_game() {
        let mut state = GameState::new(0);
        start_minigame(&mut state, GameId::Memory);
        assert_eq!(
            state.active_minigame.as_ref().map(|g| g.id()),
            Some(GameId::Memory)
        );
    }

    #[test]
    fn test_start_refused_for_beaten_booth() {
        let mut state = GameState::new(0);
        state.beaten.insert(GameId::Typing);
        start_minigame(&mut state, GameId::Typing);
        assert!(state.active_minigame.is_none());
    }

    #[test]
    fn test_start_refused_while_game_active() {
        let mut state = GameState::new(0);
        start_minigame(&mut state, GameId::Maze);
        start_minigame(&mut state, GameId::Memory);
        assert_eq!(
            state.active_minigame.as_ref().map(|g| g.id()),
            Some(GameId::Maze)
        );
    }

    #[test]
    fn test_exit_preserves_player_position() {
        let mut state = GameState::new(0);
        state.player = Point::new(530, 110);
        start_minigame(&mut state, GameId::Shooting);
        exit_minigame(&mut state);
        assert_eq!(state.player, Point::new(530, 110));
        assert!(state.active_minigame.is_none());
    }

    #[test]
    fn test_resolve_without_outcome_is_noop() {
        let mut state = GameState::new(0);
        start_minigame(&mut state, GameId::Memory);
        assert!(resolve_minigame(&mut state).is_none());
        assert!(state.active_minigame.is_some());
    }

    #[test]
    fn test_resolve_win_marks_beaten_and_exits() {
        let mut state = GameState::new(0);
        start_minigame(&mut state, GameId::Memory);
        force_outcome(&mut state, GameOutcome::Won);

        assert_eq!(resolve_minigame(&mut state), Some(GameOutcome::Won));
        assert!(state.beaten.contains(&GameId::Memory));
        assert!(state.active_minigame.is_none());
    }

    #[test]
    fn test_resolve_loss_leaves_booth_winnable() {
        let mut state = GameState::new(0);
        start_minigame(&mut state, GameId::Maze);
        force_outcome(&mut state, GameOutcome::Lost);

        assert_eq!(resolve_minigame(&mut state), Some(GameOutcome::Lost));
        assert!(!state.beaten.contains(&GameId::Maze));
        assert!(state.active_minigame.is_none());

        // The booth can be entered again
        start_minigame(&mut state, GameId::Maze);
        assert!(state.active_minigame.is_some());
    }

    #[test]
    fn test_mark_beaten_idempotent() {
        let mut state = GameState::new(0);
        mark_beaten(&mut state, GameId::Shooting);
        let log_len = state.event_log.len();
        mark_beaten(&mut state, GameId::Shooting);
        assert_eq!(state.beaten_count(), 1);
        assert_eq!(state.event_log.len(), log_len, "second mark logged again");
    }

    #[test]
    fn test_exit_clears_stale_hover_on_beaten_booth() {
        let mut state = GameState::new(0);
        let rect = state.layout.zone_rect(GameId::Memory).unwrap();
        state.player = Point::new(rect.x + 5, rect.y + 5);
        recompute_hover(&mut state);
        assert_eq!(state.hovered_zone, Some(GameId::Memory));

        start_minigame(&mut state, GameId::Memory);
        force_outcome(&mut state, GameOutcome::Won);
        resolve_minigame(&mut state);

        // Still standing on the booth, but it is beaten now
        assert_eq!(state.hovered_zone, None);
    }
}
