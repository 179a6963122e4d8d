//! Shooting gallery logic: crosshair aiming, shots, and target drift.

use super::types::{ShootingGame, CROSSHAIR_STEP, STEP_INTERVAL_MS, TARGETS_TO_WIN, TARGET_SIZE, TARGET_STEP};
use crate::games::GameOutcome;

/// UI-agnostic input actions for the shooting gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShootingInput {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Other,
}

/// Process one input event.
pub fn process_input(game: &mut ShootingGame, input: ShootingInput) {
    if game.outcome.is_some() {
        return;
    }

    match input {
        ShootingInput::Up => move_crosshair(game, 0, -CROSSHAIR_STEP),
        ShootingInput::Down => move_crosshair(game, 0, CROSSHAIR_STEP),
        ShootingInput::Left => move_crosshair(game, -CROSSHAIR_STEP, 0),
        ShootingInput::Right => move_crosshair(game, CROSSHAIR_STEP, 0),
        ShootingInput::Fire => fire(game),
        ShootingInput::Other => {}
    }
}

fn move_crosshair(game: &mut ShootingGame, dx: i32, dy: i32) {
    let (w, h) = game.field;
    game.crosshair.x = (game.crosshair.x + dx).clamp(0, w);
    game.crosshair.y = (game.crosshair.y + dy).clamp(0, h);
}

/// Shoot at the crosshair position.
///
/// The first live target whose box contains the crosshair goes down and
/// scores a hit; downed targets can never be hit again. The fifth hit wins.
pub fn fire(game: &mut ShootingGame) {
    if game.outcome.is_some() {
        return;
    }

    let crosshair = game.crosshair;
    let hit = game
        .targets
        .iter_mut()
        .find(|t| t.alive && t.bounds().contains_point(crosshair));

    if let Some(target) = hit {
        target.alive = false;
        game.hits += 1;
        if game.hits >= TARGETS_TO_WIN {
            game.outcome = Some(GameOutcome::Won);
        }
    }
}

/// Advance target drift. Returns true if any target moved.
///
/// Movement happens in fixed 20 ms steps consumed from the accumulator; each
/// step moves every live target and reverses it at the field's top or bottom
/// edge. Once the run resolves, target motion stops with it.
pub fn tick_shooting(game: &mut ShootingGame, dt_ms: u64) -> bool {
    if game.outcome.is_some() {
        return false;
    }

    // Clamp dt to avoid a burst of catch-up steps after a stall
    game.accumulated_ms += dt_ms.min(500);
    let mut changed = false;

    while game.accumulated_ms >= STEP_INTERVAL_MS {
        game.accumulated_ms -= STEP_INTERVAL_MS;
        step_targets(game);
        changed = true;
    }

    changed
}

/// One movement step: bounce at the edges, then drift.
fn step_targets(game: &mut ShootingGame) {
    let (_, field_h) = game.field;
    for target in game.targets.iter_mut().filter(|t| t.alive) {
        if target.pos.y <= 0 || target.pos.y >= field_h - TARGET_SIZE {
            target.dir = -target.dir;
        }
        target.pos.y += target.dir * TARGET_STEP;
    }
}
