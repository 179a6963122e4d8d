pub mod logic;
pub mod types;

#[allow(unused_imports)]
pub use logic::{flip_card, process_input, tick_memory, MemoryInput};
#[allow(unused_imports)]
pub use types::{Card, CardFace, MemoryGame, GRID_COLS, GRID_ROWS, PAIR_COUNT, REVEAL_DELAY_MS};
