//! Typing race logic: input editing, word matching, and the countdown.

use super::types::{TypingGame, PROMPT_WORDS};
use crate::games::GameOutcome;

/// UI-agnostic input actions for the typing race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingInput {
    Char(char),
    Backspace,
    Other,
}

/// Apply one input event and rescore the typed text.
pub fn process_input(game: &mut TypingGame, input: TypingInput) {
    if game.outcome.is_some() {
        return;
    }

    match input {
        TypingInput::Char(c) => game.typed.push(c),
        TypingInput::Backspace => {
            game.typed.pop();
        }
        TypingInput::Other => {}
    }

    game.matched = matched_words(&game.typed, &game.prompt);
}

/// Count typed words equal to the prompt word at the same index.
///
/// Matching is positional, not cumulative: a wrong word costs only its own
/// index. Words typed past the end of the prompt never match.
pub fn matched_words(typed: &str, prompt: &[&'static str]) -> usize {
    typed
        .split_whitespace()
        .enumerate()
        .filter(|(i, word)| prompt.get(*i).is_some_and(|p| p == word))
        .count()
}

/// Advance the countdown. Returns true if the visible state changed.
///
/// `dt_ms` is milliseconds since the last call; whole seconds are consumed
/// from the accumulator. When the countdown reaches zero the race resolves:
/// a full 60 matched words wins, anything less loses.
pub fn tick_typing(game: &mut TypingGame, dt_ms: u64) -> bool {
    if game.outcome.is_some() {
        return false;
    }

    game.elapsed_ms += dt_ms;
    let mut changed = false;

    while game.elapsed_ms >= 1000 && game.outcome.is_none() {
        game.elapsed_ms -= 1000;
        game.seconds_left = game.seconds_left.saturating_sub(1);
        changed = true;

        if game.seconds_left == 0 {
            game.outcome = Some(if game.matched >= PROMPT_WORDS {
                GameOutcome::Won
            } else {
                GameOutcome::Lost
            });
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::typing::types::TIME_LIMIT_SECS;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn game_with_prompt(words: &[&'static str]) -> TypingGame {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut game = TypingGame::new(&mut rng);
        game.prompt = words.to_vec();
        game
    }

    fn type_text(game: &mut TypingGame, text: &str) {
        for c in text.chars() {
            process_input(game, TypingInput::Char(c));
        }
    }

    #[test]
    fn test_exact_match_counts_all_words() {
        assert_eq!(matched_words("apple banana", &["apple", "banana"]), 2);
    }

    #[test]
    fn test_positional_match_survives_earlier_mismatch() {
        // Index 0 matches, index 1 does not
        assert_eq!(matched_words("apple grape", &["apple", "banana"]), 1);
        // Index 0 misses but index 1 still counts
        assert_eq!(matched_words("grape banana", &["apple", "banana"]), 1);
    }

    #[test]
    fn test_words_past_prompt_end_never_match() {
        assert_eq!(matched_words("apple apple apple", &["apple"]), 1);
    }

    #[test]
    fn test_empty_input_matches_nothing() {
        assert_eq!(matched_words("", &["apple"]), 0);
        assert_eq!(matched_words("   ", &["apple"]), 0);
    }

    #[test]
    fn test_extra_whitespace_between_words_is_ignored() {
        assert_eq!(matched_words("apple   banana", &["apple", "banana"]), 2);
    }

    #[test]
    fn test_process_input_rescores() {
        let mut game = game_with_prompt(&["fig", "date"]);
        type_text(&mut game, "fig");
        assert_eq!(game.matched, 1);

        type_text(&mut game, " date");
        assert_eq!(game.matched, 2);
    }

    #[test]
    fn test_backspace_edits_and_rescores() {
        let mut game = game_with_prompt(&["fig"]);
        type_text(&mut game, "figs");
        assert_eq!(game.matched, 0);

        process_input(&mut game, TypingInput::Backspace);
        assert_eq!(game.typed, "fig");
        assert_eq!(game.matched, 1);
    }

    #[test]
    fn test_input_ignored_after_resolution() {
        let mut game = game_with_prompt(&["fig"]);
        game.outcome = Some(GameOutcome::Lost);
        type_text(&mut game, "fig");
        assert!(game.typed.is_empty());
    }

    #[test]
    fn test_countdown_ticks_once_per_second() {
        let mut game = game_with_prompt(&["fig"]);
        assert!(!tick_typing(&mut game, 999));
        assert_eq!(game.seconds_left, TIME_LIMIT_SECS);

        assert!(tick_typing(&mut game, 1));
        assert_eq!(game.seconds_left, TIME_LIMIT_SECS - 1);
    }

    #[test]
    fn test_expiry_with_too_few_words_loses() {
        let mut game = game_with_prompt(&["fig"]);
        tick_typing(&mut game, u64::from(TIME_LIMIT_SECS) * 1000);
        assert_eq!(game.seconds_left, 0);
        assert_eq!(game.outcome, Some(GameOutcome::Lost));
    }

    #[test]
    fn test_expiry_with_full_prompt_wins() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut game = TypingGame::new(&mut rng);
        let full_text = game.prompt.join(" ");
        type_text(&mut game, &full_text);
        assert_eq!(game.matched, PROMPT_WORDS);

        tick_typing(&mut game, u64::from(TIME_LIMIT_SECS) * 1000);
        assert_eq!(game.outcome, Some(GameOutcome::Won));
    }

    #[test]
    fn test_tick_stops_after_resolution() {
        let mut game = game_with_prompt(&["fig"]);
        tick_typing(&mut game, u64::from(TIME_LIMIT_SECS) * 1000 + 5000);
        assert_eq!(game.outcome, Some(GameOutcome::Lost));
        assert_eq!(game.seconds_left, 0);

        // Further ticks are no-ops
        assert!(!tick_typing(&mut game, 10_000));
    }
}
