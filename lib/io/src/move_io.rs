//! # move_io.rs
//!
//! Formats moves in the usual draughts notation: `-` between the squares of
//! a regular step, `x` between the squares of a capture chain.
//!
//! # Author
//! Alden Luthfi

use game::bots::bot::Suggestion;
use game::representations::moves::MoveTree;

use crate::board_io::format_square;

/// The first step of a suggestion. A capture whose chain continues past the
/// chosen child ends in `x…`.
pub fn format_suggestion(suggestion: &Suggestion, dim: u16) -> String {
    let target = suggestion.target();
    let separator = if target.is_jump() { "x" } else { "-" };
    let more = if target.can_execute() { "x…" } else { "" };

    format!(
        "{}{}{}{}",
        format_square(suggestion.origin(), dim),
        separator,
        format_square(target.location, dim),
        more
    )
}

/// Every complete line the tree allows, one per leaf, in tree order.
pub fn format_paths(tree: &MoveTree, dim: u16) -> Vec<String> {
    let mut paths = Vec::with_capacity(tree.leaf_count());
    let start = format_square(tree.location, dim);

    for child in &tree.children {
        collect_paths(child, dim, &start, &mut paths);
    }

    paths
}

fn collect_paths(node: &MoveTree, dim: u16, prefix: &str, paths: &mut Vec<String>) {
    let separator = if node.is_jump() { "x" } else { "-" };
    let line = format!("{}{}{}", prefix, separator, format_square(node.location, dim));

    if node.children.is_empty() {
        paths.push(line);
        return;
    }

    for child in &node.children {
        collect_paths(child, dim, &line, paths);
    }
}
