//! # util.rs
//!
//! Consistency checks for board state.
//!
//! `verify_board_state` recomputes what must hold of the occupancy bitboards
//! and panics on the first violation. The state machine runs it after every
//! committed step in debug builds.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2025

use crate::representations::{board::Board, piece::Color};

pub fn verify_board_state(board: &Board) {
    let red = board.color_board(Color::Red);
    let black = board.color_board(Color::Black);
    let kings = board.kings_board();

    assert_eq!(
        red.count_common(black),
        0,
        "A square holds both a red and a black piece"
    );

    assert_eq!(
        kings.count_common(red) + kings.count_common(black),
        kings.count_bits(),
        "King flag set on an empty square"
    );

    for color in Color::ALL {
        for coord in board.occupied(color) {
            assert!(
                (coord.row + coord.col) % 2 == 1,
                "{} piece on non-playable square {}",
                color,
                coord
            );
        }
    }
}
