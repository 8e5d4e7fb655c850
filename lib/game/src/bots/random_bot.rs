//! # random_bot.rs
//!
//! A bot that plays uniformly at random: a random movable piece, then a
//! random continuation of that piece.
//!
//! # Author
//! Alden Luthfi

use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};
use tracing::trace;

use crate::{
    bots::bot::{legal_moves, Bot, Suggestion},
    representations::{piece::Color, state::Checkers},
};

#[derive(Debug, Clone)]
pub struct RandomBot {
    color: Color,
    rng: StdRng,
}

impl RandomBot {
    pub fn new(color: Color, seed: u64) -> Self {
        RandomBot {
            color,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Bot for RandomBot {
    fn color(&self) -> Color {
        self.color
    }

    fn suggest_move(&mut self, game: &Checkers) -> Option<Suggestion> {
        let roots = legal_moves(game, self.color);
        let root = roots.choose(&mut self.rng)?.clone();
        let child = self.rng.random_range(0..root.children.len());

        trace!(color = %self.color, from = %root.location, child, "random pick");
        Suggestion::new(root, child).ok()
    }
}
