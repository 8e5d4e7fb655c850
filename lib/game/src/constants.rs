//! # constants.rs
//!
//! Defines game-wide constants and configuration values.
//!
//! This file contains the board size limits, the draw counter limit, the
//! diagonal direction table and the default random seed. These constants are
//! used throughout the codebase to ensure consistency and allow for easy
//! modification of game parameters.
//!
//! # Author
//! Alden Luthfi

pub const MIN_SIZE: u16 = 1;
pub const MAX_SIZE: u16 = 31;                                                   /* 2*31+2 = 64, fits a U4096 board    */

pub const DRAW_MOVE_LIMIT: u32 = 80;                                            /* 40 full moves without a capture    */

pub const RNG_SEED: u64 = 0xDEADBEEFCAFEBABE;

pub const NW: usize = 0;
pub const NE: usize = 1;
pub const SE: usize = 2;
pub const SW: usize = 3;

pub const DIRECTIONS: [usize; 4] = [NW, NE, SE, SW];

pub const DIRECTION_VECTORS: [(i8, i8); 4] = [
    (-1, -1),                                                                   /* nw,ne,se,sw as (row, col)          */
    (-1,  1),
    ( 1,  1),
    ( 1, -1),
];

pub const KING_DIRECTIONS: &[usize] = &[NW, NE, SE, SW];
pub const BLACK_DIRECTIONS: &[usize] = &[SE, SW];
pub const RED_DIRECTIONS: &[usize] = &[NW, NE];

pub const KING_SCORE: i32 = 5;
pub const LONGEST_JUMP_SCORE: i32 = 3;
pub const CAPTURE_AVAILABLE_SCORE: i32 = 1;
pub const CENTER_SCORE: i32 = 1;
pub const BACK_ROW_PENALTY: i32 = -4;
