//! Maze logic: movement and fatal wall collision.

use crate::constants::MOVE_STEP;
use crate::games::maze::types::MazeGame;
use crate::games::GameOutcome;
use crate::geometry::Direction;

/// Move the runner one step, then test its box against every wall.
///
/// Any overlap is fatal on the spot. The run resolves as a loss and no
/// further movement is accepted.
pub fn process_input(game: &mut MazeGame, dir: Direction) {
    if game.outcome.is_some() {
        return;
    }

    let (dx, dy) = dir.delta();
    game.player.x += dx * MOVE_STEP;
    game.player.y += dy * MOVE_STEP;

    let player_box = game.player_box();
    if game.walls.iter().any(|wall| player_box.intersects(wall)) {
        game.outcome = Some(GameOutcome::Lost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::maze::types::MAZE_PLAYER_SIZE;
    use crate::geometry::{Point, Rect};

    /// A minimal maze: one wall to the right of the start corridor.
    fn test_game() -> MazeGame {
        MazeGame {
            player: Point::new(10, 10),
            field: (600, 400),
            walls: vec![Rect::new(120, 0, 20, 300)],
            outcome: None,
        }
    }

    #[test]
    fn test_safe_movement_does_not_resolve() {
        let mut game = test_game();
        process_input(&mut game, Direction::Down);
        assert_eq!(game.player, Point::new(10, 20));
        assert!(game.outcome.is_none());
    }

    #[test]
    fn test_step_size_is_fixed() {
        let mut game = test_game();
        process_input(&mut game, Direction::Right);
        assert_eq!(game.player, Point::new(20, 10));
        process_input(&mut game, Direction::Up);
        assert_eq!(game.player, Point::new(20, 0));
    }

    #[test]
    fn test_wall_overlap_is_fatal() {
        let mut game = test_game();
        // Walk right until the 50-wide box reaches the wall at x=120
        for _ in 0..6 {
            process_input(&mut game, Direction::Right);
        }
        // Player at x=70: box spans 70..120, touching but not overlapping
        assert!(game.outcome.is_none());

        process_input(&mut game, Direction::Right);
        // Player at x=80: box spans 80..130, overlapping the wall
        assert_eq!(game.outcome, Some(GameOutcome::Lost));
    }

    #[test]
    fn test_exact_overlap_is_fatal() {
        let mut game = test_game();
        game.walls = vec![Rect::new(10, 30, MAZE_PLAYER_SIZE, MAZE_PLAYER_SIZE)];
        // One step down puts the box exactly on the wall
        process_input(&mut game, Direction::Down);
        assert_eq!(game.outcome, Some(GameOutcome::Lost));
    }

    #[test]
    fn test_no_movement_after_fatal_collision() {
        let mut game = test_game();
        game.outcome = Some(GameOutcome::Lost);
        let before = game.player;
        process_input(&mut game, Direction::Left);
        assert_eq!(game.player, before);
    }

    #[test]
    fn test_collision_resolves_exactly_once() {
        let mut game = test_game();
        game.walls = vec![Rect::new(0, 0, 200, 200)];
        process_input(&mut game, Direction::Right);
        assert_eq!(game.outcome, Some(GameOutcome::Lost));

        // Still inside the wall, but the run is already over
        let before = game.player;
        process_input(&mut game, Direction::Right);
        assert_eq!(game.player, before);
    }

    #[test]
    fn test_field_has_no_fence() {
        // Leaving the field is not fatal; only walls are.
        let mut game = test_game();
        for _ in 0..10 {
            process_input(&mut game, Direction::Up);
        }
        assert_eq!(game.player.y, -90);
        assert!(game.outcome.is_none());
    }
}
