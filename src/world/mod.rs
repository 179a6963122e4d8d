//! The main world: booth layout data and player movement/hover logic.

pub mod data;
pub mod logic;

#[allow(unused_imports)]
pub use data::{world_layout, MazeLayout, ShootingLayout, Size, WorldLayout, Zone};
