//! # game_io.rs
//!
//! Implements match configuration parsing and game state formatting.
//!
//! This file reads the match config files used by the command line driver.
//! A config file is a list of `key = value` lines; blank lines and anything
//! after a `#` are ignored, and keys that do not appear keep their defaults.
//! The recognised keys are:
//!
//! ```plaintext
//! # Heuristic against a depth 4 search on the standard board.
//! size      = 3
//! games     = 50
//! red       = heuristic
//! black     = smart:4
//! seed      = 0xC0FFEE
//! max_plies = 500
//! ```
//!
//! It also formats a running game: the board followed by the side to move
//! and the draw counter.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 25/01/2026

use std::fs;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use game::{
    bots::bot::BotKind,
    constants::{DRAW_MOVE_LIMIT, MAX_SIZE, MIN_SIZE, RNG_SEED},
    representations::{piece::Color, state::Checkers},
};

use crate::{board_io::format_board, error::IoError};

lazy_static! {
    pub static ref CONFIG_LINE: Regex = Regex::new(
        r"^\s*([A-Za-z_]+)\s*=\s*(\S+)\s*$"
    ).unwrap();
    pub static ref HEX_NUMBER: Regex = Regex::new(
        r"^0[xX]([0-9a-fA-F_]+)$"
    ).unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub size: u16,
    pub games: u32,
    pub red: BotKind,
    pub black: BotKind,
    pub seed: u64,
    pub max_plies: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            size: 3,
            games: 100,
            red: BotKind::Random,
            black: BotKind::Random,
            seed: RNG_SEED,
            max_plies: 1000,
        }
    }
}

impl MatchConfig {
    /// Sets `key` from its text `value`. `line` is only used in errors.
    pub fn apply(&mut self, line: usize, key: &str, value: &str) -> Result<(), IoError> {
        let bad = || IoError::BadValue {
            line,
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "size" => {
                let size: u16 = value.parse().map_err(|_| bad())?;
                if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
                    return Err(bad());
                }
                self.size = size;
            }
            "games" => self.games = value.parse().map_err(|_| bad())?,
            "red" => self.red = value.parse().map_err(|_| bad())?,
            "black" => self.black = value.parse().map_err(|_| bad())?,
            "seed" => self.seed = parse_seed(value).ok_or_else(bad)?,
            "max_plies" => self.max_plies = value.parse().map_err(|_| bad())?,
            _ => {
                return Err(IoError::UnknownKey {
                    line,
                    key: key.to_string(),
                })
            }
        }

        Ok(())
    }
}

impl FromStr for MatchConfig {
    type Err = IoError;

    fn from_str(contents: &str) -> Result<Self, Self::Err> {
        let mut config = MatchConfig::default();

        for (i, raw) in contents.lines().enumerate() {
            let line = i + 1;
            let text = raw.split('#').next().unwrap_or("");                     /* strip comments                     */
            if text.trim().is_empty() {
                continue;
            }

            let caps = CONFIG_LINE.captures(text).ok_or_else(|| IoError::BadConfigLine {
                line,
                text: raw.trim().to_string(),
            })?;

            config.apply(line, &caps[1].to_ascii_lowercase(), &caps[2])?;
        }

        Ok(config)
    }
}

/// Decimal, or hexadecimal with a `0x` prefix. Underscores are allowed in
/// hexadecimal seeds.
fn parse_seed(value: &str) -> Option<u64> {
    match HEX_NUMBER.captures(value) {
        Some(caps) => u64::from_str_radix(&caps[1].replace('_', ""), 16).ok(),
        None => value.parse().ok(),
    }
}

pub fn parse_config_file(path: &str) -> Result<MatchConfig, IoError> {
    let contents = fs::read_to_string(path)?;
    contents.parse()
}

/// The board followed by a status line for `to_move`.
pub fn format_game(game: &Checkers, to_move: Color) -> String {
    let board = game.board();
    let mut result = format_board(board);

    result.push_str(&format!(
        "red {} ({} kings)  black {} ({} kings)  quiet plies {}/{}\n",
        board.count_pieces(Color::Red),
        board.count_kings(Color::Red),
        board.count_pieces(Color::Black),
        board.count_kings(Color::Black),
        game.consecutive_non_jump_moves(),
        DRAW_MOVE_LIMIT,
    ));

    match game.winner() {
        Some(winner) => result.push_str(&format!("{} wins\n", winner)),
        None if game.is_resigned() => result.push_str("drawn\n"),
        None => result.push_str(&format!("{} to move\n", to_move)),
    }

    result
}
