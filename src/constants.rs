//! Fixed gameplay constants shared across modules.

/// Distance in world units the hub player and the maze runner move per key press.
pub const MOVE_STEP: i32 = 10;

/// Maximum number of entries kept in the session event log.
pub const LOG_CAPACITY: usize = 8;

/// Input poll interval for the main loop, in milliseconds.
pub const INPUT_POLL_MS: u64 = 50;
