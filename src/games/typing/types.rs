//! Typing race data structures.
//!
//! The player has one minute to type out a 60-word prompt drawn from a small
//! fruit vocabulary. Words are scored positionally, so a stumble early on
//! does not spoil the rest of the run.

use crate::games::GameOutcome;
use rand::Rng;

/// Words the prompt is sampled from, uniformly and with replacement.
pub const VOCABULARY: [&str; 8] = [
    "apple",
    "banana",
    "cherry",
    "date",
    "elderberry",
    "fig",
    "grape",
    "honeydew",
];

/// Number of words in the prompt, and the count needed to win.
pub const PROMPT_WORDS: usize = 60;

/// Countdown length in seconds.
pub const TIME_LIMIT_SECS: u32 = 60;

/// Main typing race state.
#[derive(Debug, Clone)]
pub struct TypingGame {
    pub prompt: Vec<&'static str>,
    /// Everything typed so far, edited only by character and backspace input.
    pub typed: String,
    /// Count of typed words equal to the prompt word at the same index.
    pub matched: usize,
    pub seconds_left: u32,
    /// Sub-second time accumulator (milliseconds).
    pub elapsed_ms: u64,
    pub outcome: Option<GameOutcome>,
}

impl TypingGame {
    /// Create a new race with a freshly sampled prompt.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let prompt = (0..PROMPT_WORDS)
            .map(|_| VOCABULARY[rng.gen_range(0..VOCABULARY.len())])
            .collect();

        Self {
            prompt,
            typed: String::new(),
            matched: 0,
            seconds_left: TIME_LIMIT_SECS,
            elapsed_ms: 0,
            outcome: None,
        }
    }
}
