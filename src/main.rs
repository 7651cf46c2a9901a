//! Reversi-Turn: pick a move for one Reversi board.
//!
//! ## Usage
//!
//! - `reversi-turn` - Show a demo on the opening position
//! - `reversi-turn pick [--input FILE]` - Print the chosen move or `PASS`
//! - `reversi-turn moves [--input FILE] [--json]` - List legal moves
//! - `reversi-turn show [--input FILE]` - Print the decoded board
//! - `reversi-turn serve` - Answer one JSON request per stdin line
//!
//! Without `--input` the request body is read from stdin. Set `RUST_LOG` to
//! see diagnostics on stderr.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use reversi_turn::board::Board;
use reversi_turn::constants::DEFAULT_SEED;
use reversi_turn::engine::{
    apply_move, pick_move_with, render, score_board, valid_moves, Strategy,
};
use reversi_turn::protocol::Responder;
use reversi_turn::request::{parse_request, MoveDoc};

/// Reversi-Turn: pick a move for one Reversi board
#[derive(Parser)]
#[command(name = "reversi-turn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a move for the player to move and print its label, or PASS
    Pick {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// List every legal move in row-major order
    Moves {
        #[command(flatten)]
        input: InputArgs,
        /// Print moves as JSON documents instead of labels
        #[arg(long)]
        json: bool,
    },
    /// Pretty print the decoded board
    Show {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Answer one JSON request per line on stdin
    Serve {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Run a short demo on the opening position
    Demo,
}

#[derive(Args)]
struct InputArgs {
    /// Read the request from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(Args)]
struct SelectionArgs {
    /// How candidate moves are ranked
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Material)]
    strategy: StrategyArg,
    /// Seed for the random strategy
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

#[derive(Copy, Clone, ValueEnum)]
enum StrategyArg {
    /// Score every candidate by the current material (first legal move wins)
    Material,
    /// Score each candidate by the material after playing it
    Lookahead,
    /// Pick a random legal move
    Random,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Material => Strategy::Material,
            StrategyArg::Lookahead => Strategy::Lookahead,
            StrategyArg::Random => Strategy::Random,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Pick { input, selection }) => {
            let board = read_board(&input)?;
            let mut rng = fastrand::Rng::with_seed(selection.seed);
            let choice = pick_move_with(&board, selection.strategy.into(), &mut rng);
            println!("{}", render(choice.as_ref()));
        }
        Some(Commands::Moves { input, json }) => {
            let board = read_board(&input)?;
            for mv in valid_moves(&board) {
                if json {
                    println!("{}", serde_json::to_string(&MoveDoc::from(&mv))?);
                } else {
                    println!("{mv}");
                }
            }
        }
        Some(Commands::Show { input }) => {
            let board = read_board(&input)?;
            println!("{board}");
        }
        Some(Commands::Serve { selection }) => {
            let mut responder = Responder::with_strategy(selection.strategy.into(), selection.seed);
            responder.run()?;
        }
        Some(Commands::Demo) | None => run_demo(),
    }
    Ok(())
}

fn read_board(args: &InputArgs) -> Result<Board> {
    let body = match &args.input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("failed to read request from stdin")?;
            body
        }
    };
    debug!(bytes = body.len(), "read request");
    parse_request(&body).context("failed to decode request")
}

fn run_demo() {
    println!("Reversi-Turn: one-ply move picker\n");

    let board = Board::opening();
    println!("{board}\n");

    let moves = valid_moves(&board);
    let labels: Vec<String> = moves.iter().map(|m| m.label()).collect();
    println!("Legal moves: {}", labels.join(" "));

    for strategy in [Strategy::Material, Strategy::Lookahead] {
        let mut rng = fastrand::Rng::with_seed(DEFAULT_SEED);
        let choice = pick_move_with(&board, strategy, &mut rng);
        println!("{strategy:?} pick: {}", render(choice.as_ref()));
        if let Some(after) = choice.and_then(|mv| apply_move(&board, &mv)) {
            println!("Material after move: {:+}", score_board(&after));
        }
    }
}
