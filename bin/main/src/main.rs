//! # main.rs
//!
//! Command line driver: bot tournaments, a narrated single game and a legal
//! move listing for the opening position.
//!
//! Logging goes through `tracing`; set `RUST_LOG` (for example
//! `RUST_LOG=game=debug`) to see committed moves and search summaries.
//!
//! # Author
//! Alden Luthfi

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use game::{
    bots::bot::BotKind,
    error::GameError,
    play::{play_game, play_game_observed, Tally},
    representations::{moves::find_root, piece::Color, state::Checkers},
};
use io::{
    board_io::{format_square, parse_square},
    game_io::{format_game, parse_config_file, MatchConfig},
    move_io::{format_paths, format_suggestion},
};

#[derive(Parser)]
#[command(name = "checkers", version, about = "Checkers engine and bot matches")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a series of bot-versus-bot games and print the tally.
    Simulate {
        #[command(flatten)]
        opts: MatchArgs,

        /// Number of games.
        #[arg(short = 'n', long)]
        games: Option<u32>,

        /// Plies after which a game is abandoned as unfinished.
        #[arg(long)]
        max_plies: Option<u32>,
    },
    /// Play one game, printing the board after every ply.
    Watch {
        #[command(flatten)]
        opts: MatchArgs,
    },
    /// List the legal moves of one side in the opening position.
    Moves {
        #[arg(long, default_value_t = 3)]
        size: u16,

        #[arg(long, value_enum, default_value_t = Side::Black)]
        side: Side,

        /// Only list the moves of the piece on this square (`c3` or `row,col`).
        square: Option<String>,
    },
}

#[derive(Args)]
struct MatchArgs {
    /// Red bot: random, heuristic, smart or smart:<depth>.
    #[arg(long)]
    red: Option<BotKind>,

    /// Black bot: random, heuristic, smart or smart:<depth>.
    #[arg(long)]
    black: Option<BotKind>,

    /// Rows of men per side.
    #[arg(long)]
    size: Option<u16>,

    #[arg(long)]
    seed: Option<u64>,

    /// `key = value` match file; flags given here override it.
    #[arg(long)]
    config: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Red,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::Red => Color::Red,
            Side::Black => Color::Black,
        }
    }
}

impl MatchArgs {
    fn resolve(&self) -> Result<MatchConfig> {
        let mut config = match &self.config {
            Some(path) => parse_config_file(path)
                .with_context(|| format!("reading match config {path}"))?,
            None => MatchConfig::default(),
        };

        if let Some(red) = self.red {
            config.red = red;
        }
        if let Some(black) = self.black {
            config.black = black;
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }

        Ok(config)
    }
}

/// Per-game seeds: the game itself, then each bot.
fn game_seeds(base: u64, index: u32) -> (u64, u64, u64) {
    let seed = base.wrapping_add(u64::from(index).wrapping_mul(3));
    (seed, seed.wrapping_add(1), seed.wrapping_add(2))
}

#[timed::timed]
fn simulate(config: &MatchConfig) -> Result<Tally, GameError> {
    let mut tally = Tally::default();

    for index in 0..config.games {
        let (game_seed, red_seed, black_seed) = game_seeds(config.seed, index);

        let mut game = Checkers::with_seed(config.size, game_seed)?;
        let mut red = config.red.build(Color::Red, red_seed);
        let mut black = config.black.build(Color::Black, black_seed);

        let outcome = play_game(&mut game, red.as_mut(), black.as_mut(), config.max_plies)?;
        tally.record(&outcome);

        if (index + 1) % 10 == 0 {
            info!(games = index + 1, red = tally.red_wins, black = tally.black_wins, "progress");
        }
    }

    Ok(tally)
}

fn watch(config: &MatchConfig) -> Result<()> {
    let (game_seed, red_seed, black_seed) = game_seeds(config.seed, 0);

    let mut game = Checkers::with_seed(config.size, game_seed)?;
    let mut red = config.red.build(Color::Red, red_seed);
    let mut black = config.black.build(Color::Black, black_seed);
    let dim = game.board_dim();

    println!("{}", format_game(&game, Color::Red));

    let outcome = play_game_observed(
        &mut game,
        red.as_mut(),
        black.as_mut(),
        config.max_plies,
        |position, side, pick| {
            println!("{} plays {}", side, format_suggestion(pick, dim));
            println!("{}", format_game(position, side.opposite()));
        },
    )?;

    match (outcome.finished, outcome.winner) {
        (false, _) => println!("stopped after {} plies", outcome.plies),
        (true, Some(winner)) => println!("{} wins after {} plies", winner, outcome.plies),
        (true, None) => println!("draw after {} plies", outcome.plies),
    }

    Ok(())
}

fn list_moves(size: u16, side: Side, square: Option<&str>) -> Result<()> {
    let game = Checkers::new(size)?;
    let color = Color::from(side);
    let dim = game.board_dim();
    let roots = game.valid_moves(color);

    println!("{}", format_game(&game, color));

    let selected = match square {
        Some(text) => {
            let coord = parse_square(text, dim)?;
            match find_root(&roots, coord) {
                Some(root) => vec![root],
                None => bail!("no {} piece on {}", color, format_square(coord, dim)),
            }
        }
        None => roots.iter().collect(),
    };

    for root in selected {
        for line in format_paths(root, dim) {
            println!("{line}");
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Simulate { opts, games, max_plies } => {
            let mut config = opts.resolve()?;
            if let Some(games) = games {
                config.games = games;
            }
            if let Some(max_plies) = max_plies {
                config.max_plies = max_plies;
            }

            info!(
                red = %config.red,
                black = %config.black,
                size = config.size,
                games = config.games,
                "starting tournament"
            );
            let tally = simulate(&config)?;
            println!("{tally}");
        }
        Command::Watch { opts } => watch(&opts.resolve()?)?,
        Command::Moves { size, side, square } => list_moves(size, side, square.as_deref())?,
    }

    Ok(())
}
