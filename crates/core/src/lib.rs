//! Core engine module - pure, deterministic, and testable
//!
//! This module contains all the puzzle rules, state transitions, and session
//! bookkeeping. It has **zero dependencies** on UI, networking, or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical shuffles and sessions
//! - **Testable**: Comprehensive unit tests for all move rules
//! - **Portable**: Can run in any environment (web, terminal, headless)
//! - **Fast**: Zero-allocation board operations
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid with move validation, immutable move application,
//!   and randomized-walk shuffling
//! - [`session`]: Session bookkeeping (move counter, elapsed time, completion)
//! - [`rng`]: Injectable uniform randomness for the shuffle walk
//! - [`snapshot`]: Plain-data view of a session for frontends
//! - [`format`]: Elapsed-time display formatting
//!
//! # Puzzle Rules
//!
//! - A move relocates the tile orthogonally adjacent to the empty cell into
//!   the empty cell's position; everything else is a rejected no-op
//! - Boards are never mutated in place: applying a move yields a fresh board
//! - Shuffling replays 1600 random legal moves from the solved board, so a
//!   shuffled board is always solvable by construction
//! - The puzzle is complete when the board equals the solved board
//!
//! # Example
//!
//! ```
//! use fifteen_puzzle_core::GameSession;
//! use fifteen_puzzle_types::{Direction, GameAction};
//!
//! // Create a session with a shuffled board
//! let mut game = GameSession::new(12345);
//! assert!(!game.completed());
//!
//! // Slide the tile above the empty cell into it (if there is one)
//! let moved = game.apply_action(GameAction::Slide(Direction::Up));
//! assert_eq!(game.moves() > 0, moved);
//! ```

pub mod board;
pub mod format;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use fifteen_puzzle_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use format::format_elapsed;
pub use rng::{EntropyRng, RandomSource, SimpleRng};
pub use session::GameSession;
pub use snapshot::SessionSnapshot;
