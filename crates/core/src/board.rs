//! Board module - the puzzle grid and its move rules
//!
//! The board is a 4x4 grid where each cell holds a tile id (1-15) or the
//! single empty cell. Uses a flat array for better cache locality and
//! zero-allocation.
//! Coordinates: (row, col) where both range 0..3, row-major order.
//! The solved board has tiles ascending with the empty cell bottom-right.

use arrayvec::ArrayVec;

use crate::rng::RandomSource;
use fifteen_puzzle_types::{Cell, Position, GRID_CELLS, GRID_SIZE, SHUFFLE_MOVES};

/// The puzzle board - 4x4 grid using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; GRID_CELLS],
}

impl Board {
    /// Create the solved board: tiles 1..=15 ascending, empty cell last
    pub fn solved() -> Self {
        let mut cells: [Cell; GRID_CELLS] = [None; GRID_CELLS];
        for (i, cell) in cells.iter_mut().take(GRID_CELLS - 1).enumerate() {
            *cell = Some(i as u8 + 1);
        }
        Self { cells }
    }

    /// Calculate flat index from a position
    /// Returns None if out of bounds
    #[inline(always)]
    fn index(pos: Position) -> Option<usize> {
        pos.in_bounds().then(|| pos.row * GRID_SIZE + pos.col)
    }

    /// Flat index for a position already known to be in bounds
    #[inline(always)]
    fn offset(pos: Position) -> usize {
        pos.row * GRID_SIZE + pos.col
    }

    /// Grid side length
    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    /// Get cell at position
    /// Returns None if out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        Self::index(pos).map(|idx| self.cells[idx])
    }

    /// Locate the empty cell by row-major scan
    ///
    /// Every board built by this module contains exactly one empty cell.
    /// None signals a malformed board, i.e. a broken caller contract.
    pub fn empty_position(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(|cell| cell.is_none())
            .map(|idx| Position::new(idx / GRID_SIZE, idx % GRID_SIZE))
    }

    /// Whether moving the tile at `pos` into the empty cell is legal
    ///
    /// Legal iff `pos` is in bounds and orthogonally adjacent to the empty
    /// cell. Diagonals, the empty cell itself, and out-of-bounds positions
    /// are all illegal. No side effects.
    pub fn is_valid_move(&self, pos: Position) -> bool {
        let Some(empty) = self.empty_position() else {
            return false;
        };
        pos.in_bounds() && pos.is_adjacent(empty)
    }

    /// Board resulting from moving the tile at `pos` into the empty cell
    ///
    /// Returns None when the move is illegal; callers treat that as a
    /// recoverable no-op. On success exactly the tile and the empty marker
    /// exchange positions. The receiver is never mutated.
    pub fn apply_move(&self, pos: Position) -> Option<Board> {
        let empty = self.empty_position()?;
        if !(pos.in_bounds() && pos.is_adjacent(empty)) {
            return None;
        }

        let mut next = *self;
        next.cells.swap(Self::offset(pos), Self::offset(empty));
        Some(next)
    }

    /// Randomized board produced by `SHUFFLE_MOVES` legal empty-cell steps
    ///
    /// Each step swaps the empty cell with a uniformly chosen in-bounds
    /// orthogonal neighbor, so the result is always reachable from the
    /// receiver by legal play. A step may undo the previous one; the walk is
    /// long enough that no backtrack exclusion is applied. The receiver is
    /// never mutated.
    pub fn shuffle<R: RandomSource>(&self, rng: &mut R) -> Board {
        let mut board = *self;
        let Some(mut empty) = board.empty_position() else {
            return board;
        };

        for _ in 0..SHUFFLE_MOVES {
            let mut candidates: ArrayVec<Position, 4> = ArrayVec::new();
            if empty.row > 0 {
                candidates.push(Position::new(empty.row - 1, empty.col));
            }
            if empty.row < GRID_SIZE - 1 {
                candidates.push(Position::new(empty.row + 1, empty.col));
            }
            if empty.col > 0 {
                candidates.push(Position::new(empty.row, empty.col - 1));
            }
            if empty.col < GRID_SIZE - 1 {
                candidates.push(Position::new(empty.row, empty.col + 1));
            }

            let tile = candidates[rng.next_range(candidates.len() as u32) as usize];
            board.cells.swap(Self::offset(tile), Self::offset(empty));
            empty = tile;
        }

        board
    }

    /// Whether this board matches `target` cell for cell
    pub fn is_completed(&self, target: &Board) -> bool {
        self == target
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Fill a u8 grid for rendering or serialization (0 = empty cell)
    pub fn write_u8_grid(&self, out: &mut [[u8; GRID_SIZE]; GRID_SIZE]) {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                out[row][col] = self.cells[row * GRID_SIZE + col].unwrap_or(0);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::solved()
    }
}
