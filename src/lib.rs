//! Fifteen-puzzle engine (workspace facade crate).
//!
//! This package keeps the `fifteen_puzzle::{core,types}` public API stable while the
//! implementation lives in dedicated crates under `crates/`.

pub use fifteen_puzzle_core as core;
pub use fifteen_puzzle_types as types;
