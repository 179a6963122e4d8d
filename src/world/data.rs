//! World layout: booth rectangles, maze walls, and field sizes.
//!
//! The layout is data, not code: it is read from the embedded `world.json`
//! asset and only ever consumed through geometry queries. Nothing in the
//! game logic computes or adjusts these rectangles.

use crate::games::GameId;
use crate::geometry::{Point, Rect};
use serde::Deserialize;
use std::sync::OnceLock;

const WORLD_JSON: &str = include_str!("../../assets/world.json");

/// Width/height pair in world units.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// A booth zone: the rectangle on the midway grounds that triggers a game.
#[derive(Debug, Clone, Deserialize)]
pub struct Zone {
    pub game: GameId,
    pub rect: Rect,
}

/// Static geometry for the maze booth.
#[derive(Debug, Clone, Deserialize)]
pub struct MazeLayout {
    pub start: Point,
    pub field: Size,
    pub walls: Vec<Rect>,
}

/// Static geometry for the shooting gallery booth.
#[derive(Debug, Clone, Deserialize)]
pub struct ShootingLayout {
    pub field: Size,
}

/// The full world layout loaded from the embedded asset.
#[derive(Debug, Clone, Deserialize)]
pub struct WorldLayout {
    pub world: Size,
    pub zones: Vec<Zone>,
    pub maze: MazeLayout,
    pub shooting: ShootingLayout,
}

static LAYOUT: OnceLock<WorldLayout> = OnceLock::new();

/// The world layout, parsed once from the embedded asset.
pub fn world_layout() -> &'static WorldLayout {
    LAYOUT.get_or_init(|| {
        serde_json::from_str(WORLD_JSON).expect("embedded world.json is valid layout data")
    })
}

impl WorldLayout {
    /// The zone rectangle for a given game.
    pub fn zone_rect(&self, game: GameId) -> Option<Rect> {
        self.zones.iter().find(|z| z.game == game).map(|z| z.rect)
    }
}
