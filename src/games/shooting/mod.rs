pub mod logic;
pub mod types;

#[allow(unused_imports)]
pub use logic::{fire, process_input, tick_shooting, ShootingInput};
#[allow(unused_imports)]
pub use types::{ShootingGame, Target, STEP_INTERVAL_MS, TARGETS_TO_WIN, TARGET_COUNT, TARGET_SIZE};
