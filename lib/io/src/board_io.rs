//! # board_io.rs
//!
//! Implements board formatting and square naming.
//!
//! This file renders a board with Unicode box-drawing characters, row
//! numbers on the left and column labels underneath, and converts between
//! grid coordinates and square names. Boards up to 26 columns wide name
//! squares like `c3` (column letter, then rank counted from the bottom row);
//! wider boards use two two-digit numbers, column then rank, like `0203`.
//! The raw grid form `row,col` is always accepted on input.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use lazy_static::lazy_static;
use regex::Regex;

use game::representations::board::{Board, Coord};

use crate::error::IoError;

lazy_static! {
    pub static ref LETTER_SQUARE: Regex = Regex::new(
        r"^([a-zA-Z])(\d{1,2})$"
    ).unwrap();
    pub static ref NUMBER_SQUARE: Regex = Regex::new(
        r"^(\d{2})(\d{2})$"
    ).unwrap();
    pub static ref GRID_SQUARE: Regex = Regex::new(
        r"^\(?\s*(\d+)\s*,\s*(\d+)\s*\)?$"
    ).unwrap();
}

pub fn format_square(coord: Coord, dim: u16) -> String {
    let rank = dim - coord.row;

    if dim <= 26 {
        let file = (b'a' + coord.col as u8) as char;
        format!("{}{}", file, rank)
    } else {
        format!("{:02}{:02}", coord.col, rank)
    }
}

/// Reads a square name in any of the accepted forms. Fails when the text
/// matches no form or names a cell off a `dim`-wide board.
pub fn parse_square(text: &str, dim: u16) -> Result<Coord, IoError> {
    let text = text.trim();
    let bad = || IoError::BadCoord(text.to_string());

    let coord = if let Some(caps) = GRID_SQUARE.captures(text) {
        let row: u16 = caps[1].parse().map_err(|_| bad())?;
        let col: u16 = caps[2].parse().map_err(|_| bad())?;
        Coord::new(row, col)
    } else {
        let (col, rank) = if let Some(caps) = LETTER_SQUARE.captures(text) {
            let letter = caps[1].to_ascii_lowercase().as_bytes()[0];
            let rank: u16 = caps[2].parse().map_err(|_| bad())?;
            ((letter - b'a') as u16, rank)
        } else if let Some(caps) = NUMBER_SQUARE.captures(text) {
            let col: u16 = caps[1].parse().map_err(|_| bad())?;
            let rank: u16 = caps[2].parse().map_err(|_| bad())?;
            (col, rank)
        } else {
            return Err(bad());
        };

        if rank == 0 || rank > dim {
            return Err(bad());
        }
        Coord::new(dim - rank, col)
    };

    if coord.row >= dim || coord.col >= dim {
        return Err(bad());
    }

    Ok(coord)
}

pub fn format_board(board: &Board) -> String {
    let dim = board.dim() as usize;
    let mut result = String::new();

    result.push_str(
        &format!("   ╔{}╗\n", "═══╤".repeat(dim - 1) + "═══")
    );

    for row in 0..dim {
        let cells: Vec<String> = (0..dim)
            .map(|col| {
                let coord = Coord::new(row as u16, col as u16);
                match board.piece_at(coord) {
                    Some(piece) => piece.symbol().to_string(),
                    None if (row + col) % 2 == 1 => "·".to_string(),            /* empty playable square              */
                    None => " ".to_string(),
                }
            })
            .collect();

        result.push_str(
            &format!("{:02} ║ {} ║\n", dim - row, cells.join(" │ "))
        );

        if row != dim - 1 {
            result.push_str(
                &format!("   ╟{}╢\n", "───┼".repeat(dim - 1) + "───")
            );
        }
    }

    result.push_str(
        &format!("   ╚{}╝\n     ", "═══╧".repeat(dim - 1) + "═══")
    );

    for col in 0..dim {
        let label = if dim <= 26 {
            ((b'a' + col as u8) as char).to_string()
        } else {
            format!("{:02}", col)
        };
        result.push_str(&format!("{:3} ", label));
    }

    result.trim_end().to_string() + "\n"
}
