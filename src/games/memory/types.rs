//! Memory match data structures.
//!
//! 24 cards hiding 12 value-pairs. The board is rebuilt from scratch on every
//! visit to the booth; nothing carries over between runs.

use crate::games::GameOutcome;
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of value-pairs on the board.
pub const PAIR_COUNT: usize = 12;

/// Board shape: 4 rows of 6 cards.
pub const GRID_ROWS: usize = 4;
pub const GRID_COLS: usize = 6;

/// How long a mismatched pair stays revealed, in milliseconds.
pub const REVEAL_DELAY_MS: u64 = 1000;

/// A card's visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    Down,
    Up,
    /// Permanently face-up after its pair was found.
    Matched,
}

/// One card on the board.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub value: u8,
    pub face: CardFace,
}

/// A mismatched pair waiting to be turned back over.
#[derive(Debug, Clone, Copy)]
pub struct PendingHide {
    pub first: usize,
    pub second: usize,
    pub remaining_ms: u64,
}

/// Main memory match state.
#[derive(Debug, Clone)]
pub struct MemoryGame {
    /// The 24 cards in board order (row-major).
    pub cards: Vec<Card>,
    /// Cursor as (row, col).
    pub cursor: (usize, usize),
    /// Index of a single unresolved face-up card, if any.
    pub flipped: Option<usize>,
    /// Mismatched pair currently revealed; flips block while this is set.
    pub pending_hide: Option<PendingHide>,
    pub matched_pairs: u32,
    pub outcome: Option<GameOutcome>,
}

impl MemoryGame {
    /// Build and shuffle a fresh board.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut values: Vec<u8> = (1..=PAIR_COUNT as u8).flat_map(|v| [v, v]).collect();
        values.shuffle(rng);

        let cards = values
            .into_iter()
            .map(|value| Card {
                value,
                face: CardFace::Down,
            })
            .collect();

        Self {
            cards,
            cursor: (0, 0),
            flipped: None,
            pending_hide: None,
            matched_pairs: 0,
            outcome: None,
        }
    }

    /// Move the cursor by (drow, dcol), clamped to the board.
    pub fn move_cursor(&mut self, drow: i32, dcol: i32) {
        let row = (self.cursor.0 as i32 + drow).clamp(0, GRID_ROWS as i32 - 1);
        let col = (self.cursor.1 as i32 + dcol).clamp(0, GRID_COLS as i32 - 1);
        self.cursor = (row as usize, col as usize);
    }

    /// Board index under the cursor.
    pub fn cursor_index(&self) -> usize {
        self.cursor.0 * GRID_COLS + self.cursor.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_board_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let game = MemoryGame::new(&mut rng);
        assert_eq!(game.cards.len(), PAIR_COUNT * 2);
        assert_eq!(game.cards.len(), GRID_ROWS * GRID_COLS);
        assert!(game.cards.iter().all(|c| c.face == CardFace::Down));
        assert_eq!(game.matched_pairs, 0);
        assert!(game.outcome.is_none());
    }

    #[test]
    fn test_every_value_appears_twice() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let game = MemoryGame::new(&mut rng);
        for v in 1..=PAIR_COUNT as u8 {
            let count = game.cards.iter().filter(|c| c.value == v).count();
            assert_eq!(count, 2, "value {} appears {} times", v, count);
        }
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(21);
        let mut b = ChaCha8Rng::seed_from_u64(21);
        let values_a: Vec<u8> = MemoryGame::new(&mut a).cards.iter().map(|c| c.value).collect();
        let values_b: Vec<u8> = MemoryGame::new(&mut b).cards.iter().map(|c| c.value).collect();
        assert_eq!(values_a, values_b);
    }

    #[test]
    fn test_cursor_clamped_to_board() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut game = MemoryGame::new(&mut rng);

        game.move_cursor(-1, -1);
        assert_eq!(game.cursor, (0, 0));

        for _ in 0..10 {
            game.move_cursor(1, 1);
        }
        assert_eq!(game.cursor, (GRID_ROWS - 1, GRID_COLS - 1));
    }

    #[test]
    fn test_cursor_index_row_major() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut game = MemoryGame::new(&mut rng);
        game.cursor = (2, 3);
        assert_eq!(game.cursor_index(), 2 * GRID_COLS + 3);
    }
}
