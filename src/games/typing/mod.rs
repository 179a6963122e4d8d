pub mod logic;
pub mod types;

#[allow(unused_imports)]
pub use logic::{matched_words, process_input, tick_typing, TypingInput};
#[allow(unused_imports)]
pub use types::{TypingGame, PROMPT_WORDS, TIME_LIMIT_SECS, VOCABULARY};
