//! Memory match logic: flipping, pair resolution, and the reveal delay.

use super::types::{CardFace, MemoryGame, PendingHide, PAIR_COUNT, REVEAL_DELAY_MS};
use crate::games::GameOutcome;

/// UI-agnostic input actions for memory match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryInput {
    Up,
    Down,
    Left,
    Right,
    Flip,
    Other,
}

/// Process one input event.
pub fn process_input(game: &mut MemoryGame, input: MemoryInput) {
    if game.outcome.is_some() {
        return;
    }

    match input {
        MemoryInput::Up => game.move_cursor(-1, 0),
        MemoryInput::Down => game.move_cursor(1, 0),
        MemoryInput::Left => game.move_cursor(0, -1),
        MemoryInput::Right => game.move_cursor(0, 1),
        MemoryInput::Flip => {
            let index = game.cursor_index();
            flip_card(game, index);
        }
        MemoryInput::Other => {}
    }
}

/// Flip the card at `index` face-up and resolve the pair if it is the second.
///
/// A flip is a no-op while a mismatched pair is still revealed, and on any
/// card that is not face-down. Equal values match permanently; unequal values
/// stay revealed for the fixed delay before turning back over.
pub fn flip_card(game: &mut MemoryGame, index: usize) {
    if game.outcome.is_some() || game.pending_hide.is_some() {
        return;
    }
    if game.cards[index].face != CardFace::Down {
        return;
    }

    game.cards[index].face = CardFace::Up;

    match game.flipped.take() {
        None => game.flipped = Some(index),
        Some(first) => {
            if game.cards[first].value == game.cards[index].value {
                game.cards[first].face = CardFace::Matched;
                game.cards[index].face = CardFace::Matched;
                game.matched_pairs += 1;
                if game.matched_pairs as usize == PAIR_COUNT {
                    game.outcome = Some(GameOutcome::Won);
                }
            } else {
                game.pending_hide = Some(PendingHide {
                    first,
                    second: index,
                    remaining_ms: REVEAL_DELAY_MS,
                });
            }
        }
    }
}

/// Advance the mismatch-reveal delay. Returns true if cards were turned back.
pub fn tick_memory(game: &mut MemoryGame, dt_ms: u64) -> bool {
    let Some(pending) = game.pending_hide.as_mut() else {
        return false;
    };

    if pending.remaining_ms > dt_ms {
        pending.remaining_ms -= dt_ms;
        return false;
    }

    let PendingHide { first, second, .. } = *pending;
    game.cards[first].face = CardFace::Down;
    game.cards[second].face = CardFace::Down;
    game.pending_hide = None;
    true
}
