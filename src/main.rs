//! Play perfect tic-tac-toe on the command line, or ask for the best move in a position.
//!

use std::str::FromStr;

use anyhow::{anyhow, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter};
use rand::{rngs::StdRng, Rng as _, SeedableRng as _};
use simple_logger::SimpleLogger;
use xoxo_minimax::{
    core::{Player, Role},
    game::{
        run_game,
        tictactoe::{Board, Cell},
        GameRecord,
    },
    player::{min_max, MinMaxAi, RandomAi},
    GameError,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Opponent {
    /// Another perfect player
    Minimax,
    /// Random legal moves
    Random,
}

/// A Tic-Tac-Toe game for the command line, with an unbeatable AI integrated!
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// How much diagnostics to print to stderr
    #[arg(long, default_value = "warn", value_parser = parse_level)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a full game. The maximizer (x) is always the perfect player.
    Play {
        /// Who moves first. Picked at random if not given
        #[arg(long)]
        first: Option<Role>,

        /// Who plays the minimizer (o)
        #[arg(long, default_value = "minimax")]
        opponent: Opponent,

        /// The seed for the random number generator (when used)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the game record as JSON instead of the boards
        #[arg(long)]
        json: bool,
    },
    /// Print the best move for one position
    BestMove {
        /// Nine cells in row-major order, using x, o and _ (or . or space) for empty,
        /// optionally with rows separated by '/', e.g. "xx_/oo_/___"
        #[arg(long)]
        board: String,

        /// Whose turn it is
        #[arg(long)]
        turn: Role,
    },
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(s).map_err(|_| format!("unknown log level `{s}`"))
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    SimpleLogger::new()
        .with_level(args.log_level)
        .init()
        .map_err(|e| anyhow!("could not set up logging: {e}"))?;
    match args.command {
        Commands::Play {
            first,
            opponent,
            seed,
            json,
        } => play(first, opponent, seed, json),
        Commands::BestMove { board, turn } => best_move(&board, turn),
    }
}

fn play(
    first: Option<Role>,
    opponent: Opponent,
    seed: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let seed = seed.unwrap_or(StdRng::from_entropy().gen());
    info!("seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let first = first.unwrap_or(if rng.gen_bool(0.5) {
        Role::Maximizer
    } else {
        Role::Minimizer
    });

    let mut hero = MinMaxAi::new(Role::Maximizer);
    let mut villain: Box<dyn Player> = match opponent {
        Opponent::Minimax => Box::new(MinMaxAi::new(Role::Minimizer)),
        Opponent::Random => Box::new(RandomAi::new(Role::Minimizer, Some(rng.gen()))),
    };
    let record = run_game(Board::new(), first, &mut hero, villain.as_mut())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_game(&record)?;
    }
    Ok(())
}

fn print_game(record: &GameRecord) -> anyhow::Result<()> {
    let mut board = record.initial_board;
    for &(role, mv) in record.moves.iter() {
        print!("{}", board);
        let who = match role {
            Role::Maximizer => "hero",
            Role::Minimizer => "villain",
        };
        println!("turn: {who} = {role}");
        board.place_mark(mv, role)?;
        println!("{who} moves to {mv}\n");
    }
    print!("{}", board);
    println!("game result: {} ({})", record.result.score(), record.result);
    Ok(())
}

fn best_move(board: &str, turn: Role) -> anyhow::Result<()> {
    let board = Board::from_str(board)?;
    if board.mark_balance().abs() > 1 {
        return Err(GameError::InvalidBoard(format!(
            "{} x marks and {} o marks cannot happen in a real game",
            board.count(Cell::Maximizer),
            board.count(Cell::Minimizer)
        ))
        .into());
    }
    if let Some(winner) = board.winner() {
        bail!("the game is already over, {winner} has won");
    }
    let mut scratch = board;
    let mv = min_max::find_best_move(&mut scratch, turn)?;
    scratch.place_mark(mv, turn)?;
    let value = min_max::minimax(&mut scratch, 0, turn.other());
    print!("{}", board);
    println!("best move for {turn}: {mv} (value {value})");
    Ok(())
}
