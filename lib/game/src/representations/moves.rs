//! # moves.rs
//!
//! Implements the move tree of a single piece.
//!
//! A `MoveTree` is rooted at the cell a piece stands on. Each child is a cell
//! the piece can land on next; for a regular move the children are leaves, for
//! a capture each child may in turn have children, one per further capture in
//! the chain. Every node carries the set of cells captured on the way from
//! the root, so committing any node knows exactly which pieces to take off.
//!
//! Trees name cells by coordinate only. A tree is only meaningful against the
//! position it was generated from; to use it on a copy of that position, look
//! the equivalent root up again with [`find_root`].
//!
//! # Author
//! Alden Luthfi

use std::collections::BTreeSet;
use std::fmt;

use crate::representations::board::Coord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTree {
    pub location: Coord,
    pub dead_squares: BTreeSet<Coord>,
    pub children: Vec<MoveTree>,
}

impl MoveTree {
    pub fn new(location: Coord, dead_squares: BTreeSet<Coord>) -> Self {
        MoveTree {
            location,
            dead_squares,
            children: Vec::new(),
        }
    }

    pub fn root(location: Coord) -> Self {
        MoveTree::new(location, BTreeSet::new())
    }

    /// Appends a continuation landing on `square`. `captured` is the cell
    /// jumped over, `None` for a regular step. Returns the new child.
    pub fn add_move(&mut self, square: Coord, captured: Option<Coord>) -> &mut MoveTree {
        let mut dead = self.dead_squares.clone();
        if let Some(c) = captured {
            dead.insert(c);
        }

        self.children.push(MoveTree::new(square, dead));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn can_execute(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_jump(&self) -> bool {
        !self.dead_squares.is_empty()
    }

    pub fn child(&self, index: usize) -> Option<&MoveTree> {
        self.children.get(index)
    }

    /// Longest number of captures from the root's position to a leaf through
    /// this node, counting this node's own captures.
    pub fn chain_length(&self) -> usize {
        self.dead_squares.len() + self.height()
    }

    /// Number of edges on the longest path down to a leaf.
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.height())
            .max()
            .unwrap_or(0)
    }

    pub fn leaf_count(&self) -> usize {
        if self.children.is_empty() {
            return 1;
        }
        self.children.iter().map(MoveTree::leaf_count).sum()
    }
}

impl fmt::Display for MoveTree {
    /// Depth-first `[row,col]` listing of the tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.location.row, self.location.col)?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        Ok(())
    }
}

/// Finds the root anchored at `coord`.
pub fn find_root(roots: &[MoveTree], coord: Coord) -> Option<&MoveTree> {
    roots.iter().find(|r| r.location == coord)
}

/// Keeps only roots with at least one continuation.
pub fn executable(roots: Vec<MoveTree>) -> Vec<MoveTree> {
    roots.into_iter().filter(MoveTree::can_execute).collect()
}
