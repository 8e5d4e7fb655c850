//! # bot.rs
//!
//! The seam shared by every automated player.
//!
//! A bot is asked for a move with the game it should play in; it answers with
//! a root of that game's legal moves and the index of the child to play. The
//! answer is committed by the caller, normally through
//! `Checkers::execute_single_move_rand`, which finishes any capture chain the
//! chosen child starts.
//!
//! # Author
//! Alden Luthfi

use std::fmt;
use std::str::FromStr;

use crate::{
    bots::{heuristic_bot::HeuristicBot, random_bot::RandomBot, smart_bot::SmartBot},
    error::GameError,
    representations::{
        board::Coord,
        moves::{executable, MoveTree},
        piece::Color,
        state::Checkers,
    },
};

/// A root and the index of one of its children. The index always names an
/// existing child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    root: MoveTree,
    child: usize,
}

impl Suggestion {
    pub fn new(root: MoveTree, child: usize) -> Result<Self, GameError> {
        if child >= root.children.len() {
            return Err(GameError::ChildOutOfRange {
                from: root.location,
                index: child,
                children: root.children.len(),
            });
        }
        Ok(Suggestion { root, child })
    }

    pub fn root(&self) -> &MoveTree {
        &self.root
    }

    pub fn child(&self) -> usize {
        self.child
    }

    /// The chosen continuation of the root.
    pub fn target(&self) -> &MoveTree {
        &self.root.children[self.child]
    }

    pub fn origin(&self) -> Coord {
        self.root.location
    }

    pub fn destination(&self) -> Coord {
        self.target().location
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin(), self.destination())
    }
}

pub trait Bot {
    fn color(&self) -> Color;

    /// A legal (root, child) pair for this bot's color in `game`, or `None`
    /// when the bot has nothing to play.
    fn suggest_move(&mut self, game: &Checkers) -> Option<Suggestion>;
}

/// Roots of `color` that have at least one continuation.
pub fn legal_moves(game: &Checkers, color: Color) -> Vec<MoveTree> {
    executable(game.valid_moves(color))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotKind {
    Random,
    Heuristic,
    Smart(u32),
}

impl BotKind {
    pub const DEFAULT_DEPTH: u32 = 3;

    pub fn build(self, color: Color, seed: u64) -> Box<dyn Bot> {
        match self {
            BotKind::Random => Box::new(RandomBot::new(color, seed)),
            BotKind::Heuristic => Box::new(HeuristicBot::new(color, seed)),
            BotKind::Smart(depth) => Box::new(SmartBot::new(color, color.opposite(), depth)),
        }
    }
}

impl FromStr for BotKind {
    type Err = GameError;

    /// `random`, `heuristic`, `smart` or `smart:<depth>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let unknown = || GameError::UnknownBot(s.to_string());

        match lowered.split_once(':') {
            None => match lowered.as_str() {
                "random" => Ok(BotKind::Random),
                "heuristic" => Ok(BotKind::Heuristic),
                "smart" => Ok(BotKind::Smart(BotKind::DEFAULT_DEPTH)),
                _ => Err(unknown()),
            },
            Some(("smart", depth)) => depth
                .parse()
                .map(BotKind::Smart)
                .map_err(|_| unknown()),
            Some(_) => Err(unknown()),
        }
    }
}

impl fmt::Display for BotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotKind::Random => write!(f, "random"),
            BotKind::Heuristic => write!(f, "heuristic"),
            BotKind::Smart(depth) => write!(f, "smart:{depth}"),
        }
    }
}
