//! # smart_bot.rs
//!
//! A fixed-depth minimax bot.
//!
//! Every legal (root, child) pair of the bot is tried on a copy of the game,
//! then the reply tree is searched `depth` plies further with the two sides
//! alternating: the bot's plies take the maximum, the opponent's the minimum.
//! A leaf is scored by material from the bot's point of view, a man worth two
//! and a king three. A side with nothing to play is a leaf as well.
//!
//! Copies are cheap: the board geometry is shared and only the occupancy
//! bitboards and counters are duplicated. No pruning is done, so the node
//! count grows as the branching factor to the power of the depth.
//!
//! # Author
//! Alden Luthfi

use tracing::{debug, trace};

use crate::{
    bots::bot::{legal_moves, Bot, Suggestion},
    representations::{
        moves::{find_root, MoveTree},
        piece::Color,
        state::Checkers,
    },
};

#[derive(Debug, Clone)]
pub struct SmartBot {
    color: Color,
    opponent: Color,
    depth: u32,
    nodes: u64,
}

impl SmartBot {
    pub fn new(color: Color, opponent: Color, depth: u32) -> Self {
        SmartBot {
            color,
            opponent,
            depth,
            nodes: 0,
        }
    }

    /// Positions visited by the last search.
    pub fn last_nodes(&self) -> u64 {
        self.nodes
    }

    /// Material balance of `game` for this bot.
    pub fn evaluate(&self, game: &Checkers) -> i32 {
        let board = game.board();
        let pieces = board.count_pieces(self.color) as i32
            - board.count_pieces(self.opponent) as i32;
        let kings = board.count_kings(self.color) as i32
            - board.count_kings(self.opponent) as i32;

        2 * pieces + kings
    }

    fn minimax(&mut self, game: &Checkers, side: Color, depth: u32) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return self.evaluate(game);
        }

        let roots = legal_moves(game, side);
        if roots.is_empty() {
            return self.evaluate(game);
        }

        let maximizing = side == self.color;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for root in &roots {
            for child in 0..root.children.len() {
                let Some(next) = simulate(game, side, root, child) else {
                    continue;
                };

                let value = self.minimax(&next, side.opposite(), depth - 1);
                best = if maximizing { best.max(value) } else { best.min(value) };
            }
        }

        if best == i32::MIN || best == i32::MAX {                               /* every simulation failed            */
            return self.evaluate(game);
        }

        best
    }
}

/// Copy of `game` after `side` plays `root.children[child]` and finishes the
/// chain it starts. The root is looked up again in the copy so the step is
/// committed against the copy's own move list.
fn simulate(game: &Checkers, side: Color, root: &MoveTree, child: usize) -> Option<Checkers> {
    let mut copy = game.clone();
    let roots = legal_moves(&copy, side);
    let root = find_root(&roots, root.location)?;

    match copy.execute_single_move_rand(root, child) {
        Ok(()) => Some(copy),
        Err(err) => {
            debug!(%err, "simulation rejected");
            None
        }
    }
}

impl Bot for SmartBot {
    fn color(&self) -> Color {
        self.color
    }

    fn suggest_move(&mut self, game: &Checkers) -> Option<Suggestion> {
        self.nodes = 0;

        let roots = legal_moves(game, self.color);
        let mut best: Option<(i32, usize, usize)> = None;

        for (i, root) in roots.iter().enumerate() {
            for child in 0..root.children.len() {
                let Some(next) = simulate(game, self.color, root, child) else {
                    continue;
                };

                let value = self.minimax(&next, self.opponent, self.depth);
                trace!(from = %root.location, to = %root.children[child].location, value, "root scored");

                if best.is_none_or(|(v, _, _)| value > v) {                     /* ties keep the first found          */
                    best = Some((value, i, child));
                }
            }
        }

        let (value, i, child) = best?;
        debug!(
            color = %self.color,
            depth = self.depth,
            nodes = self.nodes,
            value,
            "search done"
        );

        Suggestion::new(roots[i].clone(), child).ok()
    }
}
