//! Maze data structures.
//!
//! The runner threads a field of static walls. Brushing a wall ends the run
//! instantly: there is no health, no retry, and no forgiveness.

use crate::games::GameOutcome;
use crate::geometry::{Point, Rect};
use crate::world::MazeLayout;

/// Side length of the runner's square bounding box, in world units.
pub const MAZE_PLAYER_SIZE: i32 = 50;

/// Main maze state.
#[derive(Debug, Clone)]
pub struct MazeGame {
    /// Top-left corner of the runner's bounding box.
    pub player: Point,
    pub field: (i32, i32),
    pub walls: Vec<Rect>,
    pub outcome: Option<GameOutcome>,
}

impl MazeGame {
    /// Place the runner at the layout's start position among the layout's walls.
    pub fn new(layout: &MazeLayout) -> Self {
        Self {
            player: layout.start,
            field: (layout.field.width, layout.field.height),
            walls: layout.walls.clone(),
            outcome: None,
        }
    }

    /// The runner's current bounding box.
    pub fn player_box(&self) -> Rect {
        Rect::new(self.player.x, self.player.y, MAZE_PLAYER_SIZE, MAZE_PLAYER_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::world_layout;

    #[test]
    fn test_new_game_starts_at_layout_origin() {
        let game = MazeGame::new(&world_layout().maze);
        assert_eq!(game.player, world_layout().maze.start);
        assert!(game.outcome.is_none());
        assert!(!game.walls.is_empty());
    }

    #[test]
    fn test_player_box_dimensions() {
        let game = MazeGame::new(&world_layout().maze);
        let b = game.player_box();
        assert_eq!(b.w, MAZE_PLAYER_SIZE);
        assert_eq!(b.h, MAZE_PLAYER_SIZE);
        assert_eq!(b.x, game.player.x);
        assert_eq!(b.y, game.player.y);
    }
}
