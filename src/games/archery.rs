//! The archery booth.
//!
//! The booth opens and can be left again, and that is all it does: no targets
//! are set up and no shot is ever scored, so it cannot be won or lost.

use crate::games::GameOutcome;

// TODO: design and implement archery scoring; until then the booth is a shell.

/// State for the archery booth. `outcome` is never set.
#[derive(Debug, Clone, Default)]
pub struct ArcheryGame {
    pub outcome: Option<GameOutcome>,
}

impl ArcheryGame {
    pub fn new() -> Self {
        Self::default()
    }
}
