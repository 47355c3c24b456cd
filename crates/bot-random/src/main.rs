//! Random mover - plays games where both sides pick random legal moves.
//!
//! Useful as a smoke test for new board shapes and variants, and as a
//! template for smarter players.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use mnk_engine::{Color, Game, GameConfig, GameResult, Square};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Plays m,n,k games between two random movers.
#[derive(Parser)]
#[command(name = "bot-random")]
#[command(about = "Plays m,n,k games between two random movers")]
struct Args {
    /// TOML game configuration; overrides the variant and board flags
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rule variant preset
    #[arg(long, value_enum, default_value = "tic-tac-toe")]
    variant: VariantArg,

    /// Board width (m)
    #[arg(long)]
    width: Option<u32>,

    /// Board height (n)
    #[arg(long)]
    height: Option<u32>,

    /// Stones in a row needed to win
    #[arg(short)]
    k: Option<u32>,

    /// Play on an unbounded grid
    #[arg(long)]
    infinite: bool,

    /// Number of games to play
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Give up on a game after this many moves
    #[arg(long, default_value = "1000")]
    max_moves: usize,

    /// Seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    TicTacToe,
    Gomoku,
    Pente,
    Connect6,
    Wild,
    Impartial,
    Misere,
    OrderAndChaos,
}

impl VariantArg {
    fn preset(self) -> GameConfig {
        match self {
            VariantArg::TicTacToe => GameConfig::default(),
            VariantArg::Gomoku => GameConfig::gomoku(),
            VariantArg::Pente => GameConfig::pente(),
            VariantArg::Connect6 => GameConfig::connect6(),
            VariantArg::Wild => GameConfig::wild(),
            VariantArg::Impartial => GameConfig::impartial(),
            VariantArg::Misere => GameConfig::misere(),
            VariantArg::OrderAndChaos => GameConfig::order_and_chaos(),
        }
    }
}

impl Args {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        if let Some(path) = &self.config {
            return GameConfig::load(path)
                .with_context(|| format!("loading {}", path.display()));
        }
        let preset = self.variant.preset();
        let config = GameConfig {
            width: self.width.unwrap_or(preset.width),
            height: self.height.unwrap_or(preset.height),
            k: self.k.unwrap_or(preset.k),
            infinite: self.infinite || preset.infinite,
            ..preset
        };
        config.validate()?;
        Ok(config)
    }
}

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Finished(GameResult),
    /// Hit the move cap.
    Unfinished,
}

/// Picks a uniformly random legal move group for the player to move.
///
/// Returns `None` once the game is over.
fn random_group<R: Rng>(game: &Game, rng: &mut R) -> Option<(Vec<Square>, Color)> {
    let needed = game.stones_to_place();
    let moves = game.legal_moves();
    if moves.len() < needed {
        return None;
    }
    let squares: Vec<Square> = moves.choose_multiple(rng, needed).copied().collect();

    let turn = game.turn();
    let variant = game.config().variant;
    let pieces: Vec<Color> = Color::ALL
        .into_iter()
        .filter(|&piece| variant.may_place(turn, piece))
        .collect();
    let piece = *pieces.choose(rng)?;
    Some((squares, piece))
}

fn play_game<R: Rng>(
    config: GameConfig,
    max_moves: usize,
    rng: &mut R,
) -> anyhow::Result<(Game, Outcome)> {
    let mut game = Game::new(config)?;

    while game.move_count() < max_moves {
        if let Some(result) = game.result() {
            return Ok((game, Outcome::Finished(result)));
        }
        let (squares, piece) =
            random_group(&game, rng).context("undecided game without a legal move")?;
        tracing::debug!(player = %game.turn(), ?squares, %piece, "playing");
        match squares.as_slice() {
            [square] => game.wild_move(*square, piece)?,
            _ => game.make_multimove(&squares)?,
        }
    }

    let outcome = match game.result() {
        Some(result) => Outcome::Finished(result),
        None => Outcome::Unfinished,
    };
    Ok((game, outcome))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let config = args.game_config()?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    tracing::info!(
        "Playing {} game(s) of {} (k = {})",
        args.games,
        config.variant,
        config.k
    );

    let mut x_wins = 0;
    let mut o_wins = 0;
    let mut draws = 0;
    let mut unfinished = 0;

    for game_num in 1..=args.games {
        let (game, outcome) = play_game(config, args.max_moves, &mut rng)?;
        match outcome {
            Outcome::Finished(GameResult::XWins) => x_wins += 1,
            Outcome::Finished(GameResult::OWins) => o_wins += 1,
            Outcome::Finished(GameResult::Draw) => draws += 1,
            Outcome::Unfinished => unfinished += 1,
        }
        tracing::info!(
            "Game {}: {:?} after {} moves ({:?})",
            game_num,
            outcome,
            game.move_count(),
            game.termination()
        );
        if args.games == 1 {
            print!("{}", game);
        }
    }

    println!(
        "X wins: {}, O wins: {}, draws: {}, unfinished: {}",
        x_wins, o_wins, draws, unfinished
    );
    Ok(())
}
