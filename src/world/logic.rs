//! Hub-world movement and booth hover detection.

use crate::constants::MOVE_STEP;
use crate::core::game_state::GameState;
use crate::geometry::Direction;

/// Move the player one step and recompute which booth (if any) it stands on.
///
/// Movement is deliberately unbounded: the grounds have no fence, and walking
/// off the visible map simply leaves the player undrawn until it returns.
pub fn move_player(state: &mut GameState, dir: Direction) {
    let (dx, dy) = dir.delta();
    state.player.x += dx * MOVE_STEP;
    state.player.y += dy * MOVE_STEP;
    recompute_hover(state);
}

/// Recompute the hovered booth from the player's current position.
///
/// The player's point position is tested against every zone rectangle. A
/// booth already beaten never becomes hovered again. Standing on no zone
/// clears the hover.
pub fn recompute_hover(state: &mut GameState) {
    for zone in &state.layout.zones {
        if zone.rect.contains_point(state.player) && !state.beaten.contains(&zone.game) {
            state.hovered_zone = Some(zone.game);
        } else if state.hovered_zone == Some(zone.game) {
            state.hovered_zone = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::GameId;
    use crate::geometry::Point;

    fn state_at(x: i32, y: i32) -> GameState {
        let mut state = GameState::new(0);
        state.player = Point::new(x, y);
        recompute_hover(&mut state);
        state
    }

    fn zone_center(state: &GameState, id: GameId) -> Point {
        let rect = state.layout.zone_rect(id).unwrap();
        Point::new(rect.x + rect.w / 2, rect.y + rect.h / 2)
    }

    #[test]
    fn test_move_player_step_size() {
        let mut state = state_at(100, 100);

        move_player(&mut state, Direction::Right);
        assert_eq!(state.player, Point::new(110, 100));

        move_player(&mut state, Direction::Down);
        assert_eq!(state.player, Point::new(110, 110));

        move_player(&mut state, Direction::Left);
        assert_eq!(state.player, Point::new(100, 110));

        move_player(&mut state, Direction::Up);
        assert_eq!(state.player, Point::new(100, 100));
    }

    #[test]
    fn test_movement_is_unbounded() {
        let mut state = state_at(0, 0);
        for _ in 0..25 {
            move_player(&mut state, Direction::Left);
        }
        assert_eq!(state.player.x, -250);
    }

    #[test]
    fn test_hover_set_inside_zone() {
        let mut state = GameState::new(0);
        state.player = zone_center(&state, GameId::Memory);
        recompute_hover(&mut state);
        assert_eq!(state.hovered_zone, Some(GameId::Memory));
    }

    #[test]
    fn test_hover_set_on_zone_edge() {
        let mut state = GameState::new(0);
        let rect = state.layout.zone_rect(GameId::Typing).unwrap();
        state.player = Point::new(rect.left(), rect.top());
        recompute_hover(&mut state);
        assert_eq!(state.hovered_zone, Some(GameId::Typing));
    }

    #[test]
    fn test_hover_cleared_after_leaving() {
        let mut state = GameState::new(0);
        state.player = zone_center(&state, GameId::Maze);
        recompute_hover(&mut state);
        assert_eq!(state.hovered_zone, Some(GameId::Maze));

        state.player = Point::new(-50, -50);
        recompute_hover(&mut state);
        assert_eq!(state.hovered_zone, None);
    }

    #[test]
    fn test_beaten_zone_never_hovered() {
        let mut state = GameState::new(0);
        state.beaten.insert(GameId::Shooting);
        state.player = zone_center(&state, GameId::Shooting);
        recompute_hover(&mut state);
        assert_eq!(state.hovered_zone, None);
    }

    #[test]
    fn test_hover_follows_player_between_zones() {
        let mut state = GameState::new(0);
        state.player = zone_center(&state, GameId::Archery);
        recompute_hover(&mut state);
        assert_eq!(state.hovered_zone, Some(GameId::Archery));

        state.player = zone_center(&state, GameId::Typing);
        recompute_hover(&mut state);
        assert_eq!(state.hovered_zone, Some(GameId::Typing));
    }

    #[test]
    fn test_orthogonal_axis_unchanged_by_movement() {
        let mut state = state_at(40, 70);
        move_player(&mut state, Direction::Right);
        assert_eq!(state.player.y, 70);
        move_player(&mut state, Direction::Up);
        assert_eq!(state.player.x, 50);
    }
}
