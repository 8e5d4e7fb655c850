//! # state.rs
//!
//! Defines game state representation and management.
//!
//! This file contains `Checkers`, the state machine of one game: it owns the
//! board, the counter of consecutive non-capturing moves and the result
//! fields, and it is the only place where moves are committed. Committing a
//! step moves the piece, removes every captured piece and crowns men that
//! reach the far row. Terminal detection covers resignation, agreed draws, the
//! forty-move rule and a side left without moves.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2025

use std::fmt;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace};

#[cfg(debug_assertions)]
use crate::util::verify_board_state;
use crate::{
    constants::{DRAW_MOVE_LIMIT, RNG_SEED},
    error::GameError,
    moves::move_gen,
    representations::{
        board::{Board, Coord},
        moves::MoveTree,
        piece::Color,
    },
};

/// How the rest of a capture chain is played once its first jump is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainCompletion {
    /// Uniformly random continuation at every further step.
    #[default]
    Random,
    /// Always the first continuation, for reproducible replays.
    First,
}

#[derive(Debug, Clone)]
pub struct Checkers {
    board: Board,
    size: u16,
    board_dim: u16,

    winner: Option<Color>,
    consecutive_non_jump_moves: u32,
    resigned: bool,

    chain_completion: ChainCompletion,
    rng: StdRng,
}

impl Checkers {
    /// A new game with `size` rows of men per side, seeded from the OS.
    pub fn new(size: u16) -> Result<Self, GameError> {
        let board = Board::new(size)?;
        Ok(Checkers::from_board(board, StdRng::from_os_rng()))
    }

    /// A new game whose random choices are reproducible from `seed`.
    pub fn with_seed(size: u16, seed: u64) -> Result<Self, GameError> {
        let board = Board::new(size)?;
        Ok(Checkers::from_board(board, StdRng::seed_from_u64(seed)))
    }

    /// A game continuing from an arbitrary position.
    pub fn from_position(board: Board) -> Self {
        Checkers::from_board(board, StdRng::seed_from_u64(RNG_SEED))
    }

    fn from_board(board: Board, rng: StdRng) -> Self {
        Checkers {
            size: board.size(),
            board_dim: board.dim(),
            board,

            winner: None,
            consecutive_non_jump_moves: 0,
            resigned: false,

            chain_completion: ChainCompletion::default(),
            rng,
        }
    }

    pub fn with_chain_completion(mut self, mode: ChainCompletion) -> Self {
        self.chain_completion = mode;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn board_dim(&self) -> u16 {
        self.board_dim
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn consecutive_non_jump_moves(&self) -> u32 {
        self.consecutive_non_jump_moves
    }

    pub fn is_resigned(&self) -> bool {
        self.resigned
    }

    pub fn chain_completion(&self) -> ChainCompletion {
        self.chain_completion
    }

    /*------------------------------------------------------------------------*\
                                  MOVE QUERIES
    \*------------------------------------------------------------------------*/

    pub fn valid_moves(&self, color: Color) -> Vec<MoveTree> {
        move_gen::valid_moves(&self.board, color)
    }

    pub fn jump_moves(&self, color: Color) -> (Vec<MoveTree>, bool) {
        move_gen::jump_moves(&self.board, color)
    }

    pub fn reg_moves(&self, color: Color) -> Vec<MoveTree> {
        move_gen::reg_moves(&self.board, color)
    }

    pub fn piece_valid_moves(&self, coord: Coord, color: Color) -> Option<MoveTree> {
        move_gen::piece_valid_moves(&self.board, coord, color)
    }

    /*------------------------------------------------------------------------*\
                                 MOVE EXECUTION
    \*------------------------------------------------------------------------*/

    /// Commits one step: the piece on `mv.location` goes to the chosen
    /// child's cell, the child's dead squares are emptied and a man reaching
    /// the far row is crowned. A childless `mv` is a no-op.
    ///
    /// Only one step is played. While the chosen child can still execute,
    /// the chain is unfinished and the caller continues from that child.
    pub fn execute_single_move(&mut self, mv: &MoveTree, child: usize) -> Result<(), GameError> {
        if !mv.can_execute() {
            return Ok(());
        }

        let target = mv.child(child).ok_or(GameError::ChildOutOfRange {
            from: mv.location,
            index: child,
            children: mv.children.len(),
        })?;

        let piece = self.board
            .remove_piece(mv.location)
            .ok_or(GameError::EmptySquare(mv.location))?;

        self.board.set_piece(target.location, piece);

        if target.is_jump() {
            for dead in &target.dead_squares {
                self.board.remove_piece(*dead);                                 /* earlier steps may have done this   */
            }
            self.consecutive_non_jump_moves = 0;
        } else {
            self.consecutive_non_jump_moves += 1;
        }

        if !piece.is_king && target.location.row == piece.color.promotion_row(self.board_dim) {
            self.board.promote(target.location);
            debug!(color = %piece.color, at = %target.location, "crowned");
        }

        trace!(
            from = %mv.location,
            to = %target.location,
            captured = target.dead_squares.len(),
            "step committed"
        );

        #[cfg(debug_assertions)]
        verify_board_state(&self.board);

        Ok(())
    }

    /// Commits the chosen child, then finishes any remaining capture chain
    /// using the game's `ChainCompletion` policy.
    pub fn execute_single_move_rand(&mut self, mv: &MoveTree, child: usize) -> Result<(), GameError> {
        self.execute_single_move(mv, child)?;

        let Some(mut current) = mv.child(child) else {
            return Ok(());
        };

        while current.can_execute() {
            let index = self.pick_continuation(current.children.len());
            self.execute_single_move(current, index)?;
            current = &current.children[index];
        }

        debug!(
            from = %mv.location,
            to = %current.location,
            captured = current.dead_squares.len(),
            "move committed"
        );

        Ok(())
    }

    /// Commits a whole tree from its root: a random first step, then the rest
    /// of the chain per the `ChainCompletion` policy.
    pub fn execute_move(&mut self, mv: &MoveTree) -> Result<(), GameError> {
        if !mv.can_execute() {
            return Ok(());
        }

        let index = self.rng.random_range(0..mv.children.len());
        self.execute_single_move_rand(mv, index)
    }

    /// Plays a random legal move for `color`. Returns false when `color` has
    /// nothing to play.
    pub fn make_random_move(&mut self, color: Color) -> Result<bool, GameError> {
        let roots: Vec<MoveTree> = self.valid_moves(color)
            .into_iter()
            .filter(MoveTree::can_execute)
            .collect();

        if roots.is_empty() {
            return Ok(false);
        }

        let index = self.rng.random_range(0..roots.len());
        self.execute_move(&roots[index])?;
        Ok(true)
    }

    fn pick_continuation(&mut self, choices: usize) -> usize {
        match self.chain_completion {
            ChainCompletion::Random => self.rng.random_range(0..choices),
            ChainCompletion::First => 0,
        }
    }

    /*------------------------------------------------------------------------*\
                                  GAME RESULT
    \*------------------------------------------------------------------------*/

    /// Whether the game is over with `color` to move. A side without any
    /// executable move loses; the winner is recorded as a side effect.
    pub fn is_done(&mut self, color: Color) -> bool {
        if self.resigned {
            return true;
        }

        if self.consecutive_non_jump_moves >= DRAW_MOVE_LIMIT {
            return true;
        }

        let can_move = self.valid_moves(color)
            .iter()
            .any(MoveTree::can_execute);

        if !can_move {
            if self.winner.is_none() {
                self.winner = Some(color.opposite());
                debug!(loser = %color, "no moves left");
            }
            return true;
        }

        false
    }

    pub fn resign_game(&mut self, color: Color) {
        self.resigned = true;
        self.winner = Some(color.opposite());
        debug!(color = %color, "resigned");
    }

    pub fn draw_game(&mut self) {
        self.resigned = true;
        self.winner = None;
        debug!("draw agreed");
    }
}

impl fmt::Display for Checkers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representations::piece::Piece;

    fn position(size: u16, pieces: &[((u16, u16), Piece)]) -> Checkers {
        let mut board = Board::empty(size).unwrap();
        for &(c, p) in pieces {
            board.set_piece(Coord::from(c), p);
        }
        Checkers::from_position(board)
    }

    #[test]
    fn new_game_fields() {
        let game = Checkers::with_seed(3, 1).unwrap();
        assert_eq!(game.size(), 3);
        assert_eq!(game.board_dim(), 8);
        assert_eq!(game.winner(), None);
        assert_eq!(game.consecutive_non_jump_moves(), 0);
        assert!(!game.is_resigned());
        assert!(Checkers::new(0).is_err());
    }

    #[test]
    fn regular_step_moves_piece_and_counts() {
        let mut game = Checkers::with_seed(1, 1).unwrap();
        let root = game.piece_valid_moves(Coord::new(0, 1), Color::Black).unwrap();
        let to = root.children[1].location;

        game.execute_single_move(&root, 1).unwrap();

        assert!(game.board().is_empty(Coord::new(0, 1)));
        assert!(game.board().has_color(to, Color::Black));
        assert_eq!(game.consecutive_non_jump_moves(), 1);
    }

    #[test]
    fn childless_root_is_a_noop() {
        let mut game = Checkers::with_seed(3, 1).unwrap();
        let before = game.board().clone();
        let stuck = game.piece_valid_moves(Coord::new(7, 0), Color::Red).unwrap();

        assert!(!stuck.can_execute());
        game.execute_single_move(&stuck, 0).unwrap();
        game.execute_single_move_rand(&stuck, 3).unwrap();

        assert_eq!(game.board(), &before);
        assert_eq!(game.consecutive_non_jump_moves(), 0);
    }

    #[test]
    fn bad_child_index_is_an_error() {
        let mut game = Checkers::with_seed(3, 1).unwrap();
        let root = game.piece_valid_moves(Coord::new(5, 0), Color::Red).unwrap();
        let err = game.execute_single_move(&root, 5).unwrap_err();

        assert!(matches!(err, GameError::ChildOutOfRange { index: 5, children: 1, .. }));
        assert!(game.board().has_color(Coord::new(5, 0), Color::Red));
    }

    #[test]
    fn stale_tree_is_an_error() {
        let mut game = Checkers::with_seed(3, 1).unwrap();
        let root = game.piece_valid_moves(Coord::new(5, 0), Color::Red).unwrap();
        game.execute_single_move(&root, 0).unwrap();

        let err = game.execute_single_move(&root, 0).unwrap_err();
        assert_eq!(err, GameError::EmptySquare(Coord::new(5, 0)));
    }

    #[test]
    fn capture_removes_piece_and_resets_counter() {
        let mut game = position(3, &[
            ((5, 0), Piece::man(Color::Red)),
            ((4, 1), Piece::man(Color::Black)),
            ((0, 7), Piece::man(Color::Black)),
            ((7, 6), Piece::man(Color::Red)),
        ]);

        let quiet = game.piece_valid_moves(Coord::new(0, 7), Color::Black).unwrap();
        game.execute_single_move(&quiet, 0).unwrap();
        assert_eq!(game.consecutive_non_jump_moves(), 1);

        let jump = game.piece_valid_moves(Coord::new(5, 0), Color::Red).unwrap();
        game.execute_single_move(&jump, 0).unwrap();

        assert!(game.board().is_empty(Coord::new(4, 1)));
        assert!(game.board().has_color(Coord::new(3, 2), Color::Red));
        assert_eq!(game.board().count_pieces(Color::Black), 1);
        assert_eq!(game.consecutive_non_jump_moves(), 0);
    }

    #[test]
    fn single_move_stops_mid_chain() {
        let mut game = position(3, &[
            ((7, 2), Piece::man(Color::Red)),
            ((6, 3), Piece::man(Color::Black)),
            ((4, 3), Piece::man(Color::Black)),
        ]);

        let root = game.piece_valid_moves(Coord::new(7, 2), Color::Red).unwrap();
        game.execute_single_move(&root, 0).unwrap();

        let landed = &root.children[0];
        assert!(landed.can_execute());
        assert!(game.board().has_color(Coord::new(5, 4), Color::Red));
        assert_eq!(game.board().count_pieces(Color::Black), 1);

        game.execute_single_move(landed, 0).unwrap();
        assert!(game.board().has_color(Coord::new(3, 2), Color::Red));
        assert_eq!(game.board().count_pieces(Color::Black), 0);
    }

    #[test]
    fn rand_variant_finishes_the_chain() {
        let mut game = position(3, &[
            ((7, 2), Piece::man(Color::Red)),
            ((6, 3), Piece::man(Color::Black)),
            ((4, 3), Piece::man(Color::Black)),
            ((4, 5), Piece::man(Color::Black)),
        ]);

        let root = game.piece_valid_moves(Coord::new(7, 2), Color::Red).unwrap();
        game.execute_single_move_rand(&root, 0).unwrap();

        assert_eq!(game.board().count_pieces(Color::Black), 1);
        let landed = game.board().occupied(Color::Red);
        assert!(landed == vec![Coord::new(3, 2)] || landed == vec![Coord::new(3, 6)]);
    }

    #[test]
    fn first_policy_is_deterministic() {
        let mut game = position(3, &[
            ((7, 2), Piece::man(Color::Red)),
            ((6, 3), Piece::man(Color::Black)),
            ((4, 3), Piece::man(Color::Black)),
            ((4, 5), Piece::man(Color::Black)),
        ]).with_chain_completion(ChainCompletion::First);

        let root = game.piece_valid_moves(Coord::new(7, 2), Color::Red).unwrap();
        game.execute_single_move_rand(&root, 0).unwrap();

        assert_eq!(game.board().occupied(Color::Red), vec![Coord::new(3, 2)]);
        assert_eq!(game.board().occupied(Color::Black), vec![Coord::new(4, 5)]);
    }

    #[test]
    fn crowning_on_far_row() {
        let mut game = position(2, &[
            ((1, 2), Piece::man(Color::Red)),
            ((4, 1), Piece::man(Color::Black)),
        ]);

        let red = game.piece_valid_moves(Coord::new(1, 2), Color::Red).unwrap();
        game.execute_single_move(&red, 0).unwrap();
        assert_eq!(game.board().piece_at(Coord::new(0, 1)), Some(Piece::king(Color::Red)));

        let black = game.piece_valid_moves(Coord::new(4, 1), Color::Black).unwrap();
        game.execute_single_move(&black, 0).unwrap();
        let landed = black.children[0].location;
        assert_eq!(landed.row, 5);
        assert_eq!(game.board().piece_at(landed), Some(Piece::king(Color::Black)));
    }

    #[test]
    fn promotion_during_chain_keeps_man_directions() {
        let mut game = position(2, &[
            ((2, 1), Piece::man(Color::Red)),
            ((1, 2), Piece::man(Color::Black)),
            ((1, 4), Piece::man(Color::Black)),
        ]);

        let root = game.piece_valid_moves(Coord::new(2, 1), Color::Red).unwrap();
        assert_eq!(root.to_string(), "[2,1][0,3]");                            /* no SE jump over (1,4) from row 0   */

        game.execute_single_move_rand(&root, 0).unwrap();
        assert_eq!(game.board().piece_at(Coord::new(0, 3)), Some(Piece::king(Color::Red)));
        assert!(game.board().has_color(Coord::new(1, 4), Color::Black));

        let (_, can_jump) = game.jump_moves(Color::Red);
        assert!(can_jump);                                                      /* next turn the king may take it     */
    }

    #[test]
    fn no_pieces_loses() {
        let mut game = position(2, &[((5, 0), Piece::man(Color::Red))]);
        assert!(game.is_done(Color::Black));
        assert_eq!(game.winner(), Some(Color::Red));
    }

    #[test]
    fn blocked_side_loses() {
        let mut game = position(1, &[
            ((3, 0), Piece::man(Color::Red)),
            ((2, 1), Piece::man(Color::Black)),
            ((1, 2), Piece::man(Color::Black)),
        ]);

        assert!(!game.is_done(Color::Black));
        assert!(game.is_done(Color::Red));
        assert_eq!(game.winner(), Some(Color::Black));
    }

    #[test]
    fn resign_and_draw() {
        let mut game = Checkers::with_seed(2, 1).unwrap();
        game.resign_game(Color::Red);
        assert!(game.is_done(Color::Red));
        assert!(game.is_done(Color::Black));
        assert_eq!(game.winner(), Some(Color::Black));

        let mut game = Checkers::with_seed(2, 1).unwrap();
        game.draw_game();
        assert!(game.is_done(Color::Black));
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn forty_move_rule() {
        let mut game = position(3, &[
            ((7, 0), Piece::king(Color::Red)),
            ((0, 7), Piece::king(Color::Black)),
        ]);

        for ply in 0..DRAW_MOVE_LIMIT {
            let color = if ply % 2 == 0 { Color::Red } else { Color::Black };
            assert!(!game.is_done(color));

            let at = game.board().occupied(color)[0];
            let root = game.piece_valid_moves(at, color).unwrap();
            game.execute_single_move(&root, 0).unwrap();
        }

        assert_eq!(game.consecutive_non_jump_moves(), DRAW_MOVE_LIMIT);
        assert!(game.is_done(Color::Red));
        assert!(game.is_done(Color::Black));
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn random_moves_until_the_end() {
        let mut game = Checkers::with_seed(2, 7).unwrap();
        let mut color = Color::Red;
        let mut plies = 0;

        while !game.is_done(color) {
            assert!(game.make_random_move(color).unwrap());
            color = color.opposite();
            plies += 1;
            assert!(plies < 10_000);
        }

        let draw = game.consecutive_non_jump_moves() >= DRAW_MOVE_LIMIT;
        assert!(draw || game.winner() == Some(color.opposite()));
    }
}
