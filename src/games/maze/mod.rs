pub mod logic;
pub mod types;

pub use logic::process_input;
#[allow(unused_imports)]
pub use types::{MazeGame, MAZE_PLAYER_SIZE};
