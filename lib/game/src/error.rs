//! # error.rs
//!
//! Error type for the checkers engine.
//!
//! Most engine queries cannot fail: an empty move list or a missing root is an
//! ordinary result. `GameError` covers the remaining caller mistakes, such as
//! building a board of unsupported size or committing a child that does not
//! exist.
//!
//! # Author
//! Alden Luthfi

use thiserror::Error;

use crate::constants::{MAX_SIZE, MIN_SIZE};
use crate::representations::board::Coord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("board size {0} is outside {min}..={max}", min = MIN_SIZE, max = MAX_SIZE)]
    InvalidSize(u16),

    #[error("move from {from} has {children} continuations, index {index} is out of range")]
    ChildOutOfRange {
        from: Coord,
        index: usize,
        children: usize,
    },

    #[error("no piece on {0} to move")]
    EmptySquare(Coord),

    #[error("unknown bot kind `{0}` (expected random, heuristic or smart[:depth])")]
    UnknownBot(String),
}
