//! Booth mini-games: Archery, Typing Race, Maze, Memory Match, Shooting Gallery.

pub mod archery;
pub mod maze;
pub mod memory;
pub mod shooting;
pub mod typing;

pub use archery::ArcheryGame;
pub use maze::MazeGame;
pub use memory::MemoryGame;
pub use shooting::ShootingGame;
pub use typing::TypingGame;

use crate::world::WorldLayout;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Identifies one of the five booths. The set is closed: the world layout,
/// the dispatcher, and the beaten set all key on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    Archery,
    Typing,
    Maze,
    Memory,
    Shooting,
}

impl GameId {
    pub const ALL: [GameId; 5] = [
        GameId::Archery,
        GameId::Typing,
        GameId::Maze,
        GameId::Memory,
        GameId::Shooting,
    ];

    /// Display name used in banners and the event log.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Archery => "Archery",
            Self::Typing => "Typing Race",
            Self::Maze => "Maze",
            Self::Memory => "Memory Match",
            Self::Shooting => "Shooting Gallery",
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
}

/// The currently running booth game. Only one can be active at a time, and
/// dropping the value destroys every timer the game owns.
#[derive(Debug, Clone)]
pub enum ActiveMinigame {
    Archery(ArcheryGame),
    Typing(TypingGame),
    Maze(MazeGame),
    Memory(MemoryGame),
    Shooting(ShootingGame),
}

impl ActiveMinigame {
    pub fn id(&self) -> GameId {
        match self {
            Self::Archery(_) => GameId::Archery,
            Self::Typing(_) => GameId::Typing,
            Self::Maze(_) => GameId::Maze,
            Self::Memory(_) => GameId::Memory,
            Self::Shooting(_) => GameId::Shooting,
        }
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            Self::Archery(g) => g.outcome,
            Self::Typing(g) => g.outcome,
            Self::Maze(g) => g.outcome,
            Self::Memory(g) => g.outcome,
            Self::Shooting(g) => g.outcome,
        }
    }
}

/// Construct a fresh game state machine for the given booth.
pub fn start_game<R: Rng>(id: GameId, layout: &WorldLayout, rng: &mut R) -> ActiveMinigame {
    match id {
        GameId::Archery => ActiveMinigame::Archery(ArcheryGame::new()),
        GameId::Typing => ActiveMinigame::Typing(TypingGame::new(rng)),
        GameId::Maze => ActiveMinigame::Maze(MazeGame::new(&layout.maze)),
        GameId::Memory => ActiveMinigame::Memory(MemoryGame::new(rng)),
        GameId::Shooting => ActiveMinigame::Shooting(ShootingGame::new(&layout.shooting, rng)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::world_layout;

    #[test]
    fn test_game_id_names() {
        assert_eq!(GameId::Archery.name(), "Archery");
        assert_eq!(GameId::Typing.name(), "Typing Race");
        assert_eq!(GameId::Maze.name(), "Maze");
        assert_eq!(GameId::Memory.name(), "Memory Match");
        assert_eq!(GameId::Shooting.name(), "Shooting Gallery");
    }

    #[test]
    fn test_game_id_serde_names_match_layout_keys() {
        for id in GameId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            let back: GameId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, id);
        }
        assert_eq!(
            serde_json::from_str::<GameId>("\"shooting\"").unwrap(),
            GameId::Shooting
        );
    }

    #[test]
    fn test_start_game_builds_matching_variant() {
        let layout = world_layout();
        let mut rng = rand::thread_rng();
        for id in GameId::ALL {
            let game = start_game(id, layout, &mut rng);
            assert_eq!(game.id(), id);
            assert!(game.outcome().is_none(), "{:?} starts unresolved", id);
        }
    }
}
