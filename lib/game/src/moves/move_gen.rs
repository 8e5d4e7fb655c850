//! # move_gen.rs
//!
//! Implements legal move generation.
//!
//! This file builds one `MoveTree` per piece of the side to move and applies
//! the forced-capture rule across the whole side: when any piece can capture,
//! only capture trees are legal. Capture trees are built recursively, one
//! level per jump, so a tree holds every multi-jump chain the piece can make.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2025

use crate::representations::{
    board::{Board, Coord},
    moves::{find_root, MoveTree},
    piece::Color,
};

/// Legal move trees for `color`, one root per piece. If any piece can
/// capture, every root is a capture tree; otherwise every root is a regular
/// move tree. Roots may be childless.
pub fn valid_moves(board: &Board, color: Color) -> Vec<MoveTree> {
    let (jump_list, can_jump) = jump_moves(board, color);
    if can_jump {
        return jump_list;
    }
    reg_moves(board, color)
}

/// Root for the piece on `coord` within the legal moves of `color`, `None` if
/// no piece of `color` stands there.
pub fn piece_valid_moves(board: &Board, coord: Coord, color: Color) -> Option<MoveTree> {
    let roots = valid_moves(board, color);
    find_root(&roots, coord).cloned()
}

/// Capture trees for every piece of `color` and whether any of them can
/// execute.
pub fn jump_moves(board: &Board, color: Color) -> (Vec<MoveTree>, bool) {
    let mut move_list = Vec::new();
    let mut can_jump = false;

    for square in board.occupied(color) {
        let tree = jump_moves_piece(board, square);
        can_jump |= tree.can_execute();
        move_list.push(tree);
    }

    (move_list, can_jump)
}

/// Single-step trees for every piece of `color`.
pub fn reg_moves(board: &Board, color: Color) -> Vec<MoveTree> {
    board.occupied(color)
        .into_iter()
        .map(|square| reg_moves_piece(board, square))
        .collect()
}

fn jump_moves_piece(board: &Board, start: Coord) -> MoveTree {
    let mut root = MoveTree::root(start);

    if let Some(piece) = board.piece_at(start) {
        jump_recurse(
            board,
            start,
            piece.color.opposite(),
            piece.move_directions(),
            start,
            &mut root,
        );                                                                      /* directions fixed for whole chain   */
    }

    root
}

fn jump_recurse(
    board: &Board,
    square: Coord,
    opposite: Color,
    directions: &[usize],
    first_square: Coord,
    node: &mut MoveTree,
) {
    for &dir in directions {
        let Some(over) = board.neighbor(square, dir) else {
            continue;
        };

        if !board.has_color(over, opposite) {
            continue;
        }

        if node.dead_squares.contains(&over) {
            continue;                                                           /* already captured in this chain     */
        }

        let Some(landing) = board.neighbor(over, dir) else {
            continue;
        };

        if board.is_empty(landing) || landing == first_square {                 /* start square is vacated by the jump*/
            let child = node.add_move(landing, Some(over));
            jump_recurse(board, landing, opposite, directions, first_square, child);
        }
    }
}

fn reg_moves_piece(board: &Board, square: Coord) -> MoveTree {
    let mut root = MoveTree::root(square);

    let Some(piece) = board.piece_at(square) else {
        return root;
    };

    for &dir in piece.move_directions() {
        if let Some(next) = board.neighbor(square, dir) {
            if board.is_empty(next) {
                root.add_move(next, None);
            }
        }
    }

    root
}
