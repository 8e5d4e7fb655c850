//! # piece.rs
//!
//! Defines piece representation and properties.
//!
//! This file contains the `Color` of a side and the `Piece` struct, a man or
//! a king of one color. A piece knows which diagonal directions it may travel
//! in: men only go forward, toward the opponent's back row, kings go in all
//! four directions.
//!
//! # Author
//! Alden Luthfi

use std::fmt;

use crate::constants::{BLACK_DIRECTIONS, KING_DIRECTIONS, RED_DIRECTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    pub fn opposite(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// The row on which a man of this color is crowned.
    pub fn promotion_row(self, board_dim: u16) -> u16 {
        match self {
            Color::Red => 0,
            Color::Black => board_dim - 1,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub is_king: bool,
}

impl Piece {
    pub fn man(color: Color) -> Self {
        Piece { color, is_king: false }
    }

    pub fn king(color: Color) -> Self {
        Piece { color, is_king: true }
    }

    /// Direction indices this piece may travel in, in NW, NE, SE, SW order.
    pub fn move_directions(&self) -> &'static [usize] {
        if self.is_king {
            return KING_DIRECTIONS;
        }

        match self.color {
            Color::Black => BLACK_DIRECTIONS,
            Color::Red => RED_DIRECTIONS,
        }
    }

    /// `r`/`b` for men, `R`/`B` for kings.
    pub fn symbol(&self) -> char {
        let c = self.color.symbol();
        if self.is_king {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}
