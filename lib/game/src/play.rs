//! # play.rs
//!
//! Bot-versus-bot match driver.
//!
//! # Author
//! Alden Luthfi

use std::fmt;

use tracing::{debug, warn};

use crate::{
    bots::bot::{Bot, Suggestion},
    error::GameError,
    representations::{piece::Color, state::Checkers},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Option<Color>,
    pub plies: u32,
    pub consecutive_non_jump_moves: u32,
    /// False when the ply limit ran out before the game ended.
    pub finished: bool,
}

/// Plays `game` to the end, Red first. Before every ply the side to move is
/// checked with `is_done`; a bot's suggestion is committed with
/// `execute_single_move_rand`. Stops after `max_plies` plies at the latest.
pub fn play_game(
    game: &mut Checkers,
    red: &mut dyn Bot,
    black: &mut dyn Bot,
    max_plies: u32,
) -> Result<GameOutcome, GameError> {
    play_game_observed(game, red, black, max_plies, |_, _, _| {})
}

/// Same as [`play_game`], calling `observe` after every committed ply with
/// the new position, the side that moved and its suggestion.
pub fn play_game_observed<F>(
    game: &mut Checkers,
    red: &mut dyn Bot,
    black: &mut dyn Bot,
    max_plies: u32,
    mut observe: F,
) -> Result<GameOutcome, GameError>
where
    F: FnMut(&Checkers, Color, &Suggestion),
{
    let mut side = Color::Red;
    let mut plies = 0;
    let mut finished = false;

    while plies < max_plies {
        if game.is_done(side) {
            finished = true;
            break;
        }

        let suggestion = match side {
            Color::Red => red.suggest_move(game),
            Color::Black => black.suggest_move(game),
        };

        let Some(pick) = suggestion else {
            warn!(color = %side, "bot had no move in a live game, resigning");
            game.resign_game(side);
            finished = true;
            break;
        };

        game.execute_single_move_rand(pick.root(), pick.child())?;
        plies += 1;
        observe(game, side, &pick);
        side = side.opposite();
    }

    if !finished {
        finished = game.is_done(side);
    }

    let outcome = GameOutcome {
        winner: game.winner(),
        plies,
        consecutive_non_jump_moves: game.consecutive_non_jump_moves(),
        finished,
    };
    debug!(winner = ?outcome.winner, plies, finished, "game over");

    Ok(outcome)
}

/// Results of a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub red_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
    pub unfinished: u32,
    pub plies: u64,
}

impl Tally {
    pub fn record(&mut self, outcome: &GameOutcome) {
        self.plies += u64::from(outcome.plies);

        match (outcome.finished, outcome.winner) {
            (false, _) => self.unfinished += 1,
            (true, Some(Color::Red)) => self.red_wins += 1,
            (true, Some(Color::Black)) => self.black_wins += 1,
            (true, None) => self.draws += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.red_wins + self.black_wins + self.draws + self.unfinished
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let games = self.games().max(1);
        let pct = |n: u32| 100.0 * f64::from(n) / f64::from(games);

        writeln!(f, "games played : {}", self.games())?;
        writeln!(f, "red wins     : {} ({:.1}%)", self.red_wins, pct(self.red_wins))?;
        writeln!(f, "black wins   : {} ({:.1}%)", self.black_wins, pct(self.black_wins))?;
        writeln!(f, "draws        : {} ({:.1}%)", self.draws, pct(self.draws))?;
        writeln!(f, "unfinished   : {}", self.unfinished)?;
        write!(f, "average plies: {:.1}", self.plies as f64 / f64::from(games))
    }
}
