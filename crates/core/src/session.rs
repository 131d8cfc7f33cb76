//! Session module - bookkeeping around the board
//!
//! Ties the board to the counters a frontend displays: move count, elapsed
//! seconds, a started latch, and the completion flag. The board transitions
//! themselves stay in [`Board`]; this type only records their outcomes.
//! The caller owns the actual timer and reports whole seconds through
//! [`GameSession::tick_second`].

use crate::board::Board;
use crate::format::format_elapsed;
use crate::rng::SimpleRng;
use crate::snapshot::SessionSnapshot;
use fifteen_puzzle_types::{Direction, GameAction, Position};

/// Complete session state: a shuffled board plus display bookkeeping
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    target: Board,
    rng: SimpleRng,
    seed: u32,
    moves: u32,
    elapsed_seconds: u32,
    started: bool,
    completed: bool,
}

impl GameSession {
    /// Create a session with a freshly shuffled board
    pub fn new(seed: u32) -> Self {
        let target = Board::solved();
        let mut rng = SimpleRng::new(seed);
        let board = target.shuffle(&mut rng);

        Self {
            board,
            target,
            rng,
            seed,
            moves: 0,
            elapsed_seconds: 0,
            started: false,
            completed: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn target(&self) -> &Board {
        &self.target
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Apply a game action
    /// Returns true when the action changed the session
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveTile(pos) => self.move_tile(pos),
            GameAction::Slide(direction) => self.slide(direction),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Move the tile at `pos` into the empty cell
    ///
    /// Returns false on an illegal move and after completion (a finished
    /// board no longer accepts moves). The result doubles as the pass/fail
    /// signal a frontend uses to trigger feedback.
    pub fn move_tile(&mut self, pos: Position) -> bool {
        if self.completed {
            return false;
        }
        let Some(next) = self.board.apply_move(pos) else {
            return false;
        };

        self.board = next;
        self.moves += 1;
        self.started = true;
        self.completed = self.board.is_completed(&self.target);
        true
    }

    /// Move the tile on the given side of the empty cell into it
    pub fn slide(&mut self, direction: Direction) -> bool {
        let Some(empty) = self.board.empty_position() else {
            return false;
        };
        let Some(pos) = direction.step(empty) else {
            return false;
        };
        self.move_tile(pos)
    }

    /// Reshuffle from the ongoing RNG stream and zero all bookkeeping
    pub fn restart(&mut self) {
        self.board = self.target.shuffle(&mut self.rng);
        self.moves = 0;
        self.elapsed_seconds = 0;
        self.started = false;
        self.completed = false;
    }

    /// Advance the displayed time by one second
    ///
    /// Counts only between the first successful move and completion,
    /// mirroring a frontend timer that starts on the first move and stops
    /// when the puzzle is solved.
    pub fn tick_second(&mut self) {
        if self.started && !self.completed {
            self.elapsed_seconds += 1;
        }
    }

    /// Elapsed time rendered for display
    pub fn elapsed_label(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }

    /// Copy out everything a frontend needs to render one frame
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snapshot = SessionSnapshot {
            grid: Default::default(),
            moves: self.moves,
            elapsed_seconds: self.elapsed_seconds,
            started: self.started,
            completed: self.completed,
            seed: self.seed,
        };
        self.board.write_u8_grid(&mut snapshot.grid);
        snapshot
    }
}
