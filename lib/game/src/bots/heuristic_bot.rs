//! # heuristic_bot.rs
//!
//! A single-ply bot that scores each legal (root, child) pair with a few
//! positional rules of thumb and plays one of the best at random.
//!
//! Scoring, per pair:
//!
//! ```text
//! +5  lands on the crowning row with a man
//! +3  is a capture whose chain is as long as the longest available
//! +1  any capture is available
//! +1  a piece off the edge columns steps toward the center column
//! -4  lands on either back row
//! ```
//!
//! # Author
//! Alden Luthfi

use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};
use tracing::trace;

use crate::{
    bots::bot::{legal_moves, Bot, Suggestion},
    constants::{
        BACK_ROW_PENALTY, CAPTURE_AVAILABLE_SCORE, CENTER_SCORE, KING_SCORE,
        LONGEST_JUMP_SCORE,
    },
    representations::{moves::MoveTree, piece::Color, state::Checkers},
};

#[derive(Debug, Clone)]
pub struct HeuristicBot {
    color: Color,
    rng: StdRng,
}

impl HeuristicBot {
    pub fn new(color: Color, seed: u64) -> Self {
        HeuristicBot {
            color,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Score of playing `root.children[child]`, `None` when there is no such
    /// child. `longest` is the longest chain among all legal pairs,
    /// `capture_available` whether any pair captures.
    pub fn score(
        &self,
        game: &Checkers,
        root: &MoveTree,
        child: usize,
        longest: usize,
        capture_available: bool,
    ) -> Option<i32> {
        let dim = game.board_dim();
        let target = root.child(child)?;
        let from = root.location;
        let to = target.location;
        let is_king = game.board()
            .piece_at(from)
            .is_some_and(|p| p.is_king);

        let mut score = 0;

        if to.row == self.color.promotion_row(dim) && !is_king {
            score += KING_SCORE;
        }

        if target.is_jump() && target.chain_length() == longest {
            score += LONGEST_JUMP_SCORE;
        }

        if capture_available {
            score += CAPTURE_AVAILABLE_SCORE;
        }

        if is_toward_center(from.col, to.col, dim) {
            score += CENTER_SCORE;
        }

        if to.row == 0 || to.row == dim - 1 {
            score += BACK_ROW_PENALTY;
        }

        Some(score)
    }
}

/// Whether stepping from column `from` to column `to` approaches the center
/// column of a `dim`-wide board. Pieces on an edge column never count.
fn is_toward_center(from: u16, to: u16, dim: u16) -> bool {
    if from == 0 || from == dim - 1 {
        return false;
    }

    let (twice_from, center) = (2 * from, dim - 1);                              /* compare 2*col with 2*center         */
    (twice_from < center && to > from) || (twice_from > center && to < from)
}

impl Bot for HeuristicBot {
    fn color(&self) -> Color {
        self.color
    }

    fn suggest_move(&mut self, game: &Checkers) -> Option<Suggestion> {
        let roots = legal_moves(game, self.color);

        let longest = roots.iter()
            .flat_map(|r| r.children.iter())
            .map(MoveTree::chain_length)
            .max()
            .unwrap_or(0);
        let capture_available = roots.iter()
            .flat_map(|r| r.children.iter())
            .any(MoveTree::is_jump);

        let mut best_score = i32::MIN;
        let mut best: Vec<(usize, usize)> = Vec::new();

        for (i, root) in roots.iter().enumerate() {
            for child in 0..root.children.len() {
                let Some(score) = self.score(game, root, child, longest, capture_available) else {
                    continue;
                };

                if score > best_score {
                    best_score = score;
                    best.clear();
                }
                if score == best_score {
                    best.push((i, child));
                }
            }
        }

        let &(i, child) = best.choose(&mut self.rng)?;
        trace!(color = %self.color, score = best_score, ties = best.len(), "heuristic pick");

        Suggestion::new(roots[i].clone(), child).ok()
    }
}
