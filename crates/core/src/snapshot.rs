//! Snapshot module - plain-data view of a session for frontends
//!
//! A [`SessionSnapshot`] is everything a rendering layer needs for one
//! frame, copied out of the session so the frontend never holds a reference
//! into engine state. It serializes to JSON for web frontends.

use serde::{Deserialize, Serialize};

use fifteen_puzzle_types::GRID_SIZE;

/// One renderable frame of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Tile ids in row-major order, 0 for the empty cell
    pub grid: [[u8; GRID_SIZE]; GRID_SIZE],
    pub moves: u32,
    pub elapsed_seconds: u32,
    pub started: bool,
    pub completed: bool,
    pub seed: u32,
}

impl SessionSnapshot {
    /// Whether the session is underway (timer running, input accepted)
    pub fn in_progress(&self) -> bool {
        self.started && !self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameSession;

    #[test]
    fn test_in_progress() {
        let mut snapshot = GameSession::new(3).snapshot();
        assert!(!snapshot.in_progress());

        snapshot.started = true;
        assert!(snapshot.in_progress());

        snapshot.completed = true;
        assert!(!snapshot.in_progress());
    }

    #[test]
    fn test_grid_encodes_every_tile_once() {
        let snapshot = GameSession::new(12345).snapshot();

        let mut seen = [0u8; 16];
        for row in snapshot.grid {
            for value in row {
                assert!(value < 16);
                seen[value as usize] += 1;
            }
        }
        assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn test_json_roundtrip() {
        let snapshot = GameSession::new(2024).snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
