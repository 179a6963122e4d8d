//! Shooting gallery data structures.
//!
//! Five targets drift up and down the field, bouncing off its top and bottom
//! edges. The player steers a crosshair and shoots them down one by one.

use crate::games::GameOutcome;
use crate::geometry::{Point, Rect};
use crate::world::ShootingLayout;
use rand::Rng;

/// Targets spawned at the start of a run.
pub const TARGET_COUNT: usize = 5;

/// Side length of a target's square box, in world units.
pub const TARGET_SIZE: i32 = 30;

/// Vertical distance a target moves per tick step.
pub const TARGET_STEP: i32 = 2;

/// Interval between target movement steps, in milliseconds.
pub const STEP_INTERVAL_MS: u64 = 20;

/// Hits required to win.
pub const TARGETS_TO_WIN: u32 = 5;

/// Distance the crosshair moves per key press.
pub const CROSSHAIR_STEP: i32 = 10;

/// One drifting target.
#[derive(Debug, Clone, Copy)]
pub struct Target {
    /// Top-left corner of the target's box.
    pub pos: Point,
    /// Vertical direction: +1 down, -1 up.
    pub dir: i32,
    /// False once shot; dead targets are skipped by movement and hits.
    pub alive: bool,
}

impl Target {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, TARGET_SIZE, TARGET_SIZE)
    }
}

/// Main shooting gallery state.
#[derive(Debug, Clone)]
pub struct ShootingGame {
    pub targets: Vec<Target>,
    pub crosshair: Point,
    pub hits: u32,
    pub field: (i32, i32),
    /// Sub-step time accumulator (milliseconds).
    pub accumulated_ms: u64,
    pub outcome: Option<GameOutcome>,
}

impl ShootingGame {
    /// Spawn the targets at random spots in the upper-left 80% of the field,
    /// each with a random initial drift direction.
    pub fn new<R: Rng>(layout: &ShootingLayout, rng: &mut R) -> Self {
        let (w, h) = (layout.field.width, layout.field.height);
        let targets = (0..TARGET_COUNT)
            .map(|_| Target {
                pos: Point::new(rng.gen_range(0..w * 8 / 10), rng.gen_range(0..h * 8 / 10)),
                dir: if rng.gen_bool(0.5) { 1 } else { -1 },
                alive: true,
            })
            .collect();

        Self {
            targets,
            crosshair: Point::new(0, 0),
            hits: 0,
            field: (w, h),
            accumulated_ms: 0,
            outcome: None,
        }
    }

    pub fn targets_alive(&self) -> usize {
        self.targets.iter().filter(|t| t.alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::world_layout;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_spawns_five_live_targets() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let game = ShootingGame::new(&world_layout().shooting, &mut rng);
        assert_eq!(game.targets.len(), TARGET_COUNT);
        assert_eq!(game.targets_alive(), TARGET_COUNT);
        assert_eq!(game.hits, 0);
        assert!(game.outcome.is_none());
    }

    #[test]
    fn test_targets_spawn_inside_spawn_region() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let game = ShootingGame::new(&world_layout().shooting, &mut rng);
        let (w, h) = game.field;
        for t in &game.targets {
            assert!(t.pos.x >= 0 && t.pos.x < w * 8 / 10);
            assert!(t.pos.y >= 0 && t.pos.y < h * 8 / 10);
            assert!(t.dir == 1 || t.dir == -1);
        }
    }

    #[test]
    fn test_target_bounds() {
        let t = Target {
            pos: Point::new(100, 200),
            dir: 1,
            alive: true,
        };
        let b = t.bounds();
        assert_eq!((b.x, b.y, b.w, b.h), (100, 200, TARGET_SIZE, TARGET_SIZE));
    }
}
