use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "chessmate")]
#[command(author)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Write debug logs, including per-search statistics, to a file.
    #[arg(short, long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play games between two engines and print a summary.
    Simulate(SimulateArgs),

    /// Time a fixed-depth search from a few reference positions.
    Bench {
        #[arg(long, default_value_t = 4)]
        depth: u8,
    },
}

#[derive(ClapArgs, Debug, Clone)]
pub struct SimulateArgs {
    #[arg(long, value_enum)]
    pub white: EngineKind,

    #[arg(long, value_enum)]
    pub black: EngineKind,

    #[arg(long, default_value_t = 1)]
    pub games: usize,

    /// Search depth for minimax engines.
    #[arg(long, default_value_t = 3)]
    pub depth: u8,

    /// Start position; defaults to the standard opening position.
    #[arg(long)]
    pub fen: Option<String>,

    #[arg(long, value_enum, default_value_t = EvaluationKind::Positional)]
    pub evaluation: EvaluationKind,

    #[arg(long, value_enum, default_value_t = OrderingKind::MvvLva)]
    pub ordering: OrderingKind,

    /// Search the full tree instead of pruning with alpha-beta.
    #[arg(long)]
    pub no_pruning: bool,

    #[arg(long)]
    pub no_tt: bool,

    /// Transposition table size in megabytes.
    #[arg(long, default_value_t = 16)]
    pub hash: usize,

    /// Full moves after which a game is declared drawn.
    #[arg(long, default_value_t = 300)]
    pub max_moves: u16,

    /// Seed for the random engines; each game derives its own from it.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[value(rename_all = "snake_case")]
pub enum EngineKind {
    Random,
    RandomCapture,
    AvoidCapture,
    CaptureHighestValue,
    PrioritizePawn,
    PrioritizeKnight,
    PrioritizeBishop,
    ScholarsMate,
    Minimax,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationKind {
    Standard,
    Positional,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingKind {
    MvvLva,
    Natural,
}
