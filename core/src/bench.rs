use std::error::Error;
use std::time::{Duration, Instant};

use chess::ChessMove;
use evaluation::PiecePositionEvaluation;
use search::{MvvLva, SearchConfig, SearchEngine, SearchResult};
use utils::ChessPosition;

/// Perft positions from https://github.com/AndyGrant/Ethereal/blob/master/src/perft/standard.epd
pub const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
];

pub fn run(depth: u8) -> Result<(), Box<dyn Error>> {
    let engine = SearchEngine::builder()
        .config(SearchConfig::with_depth(depth)?)
        .evaluator(PiecePositionEvaluation::default())
        .move_orderer(MvvLva::default())
        .build()?;

    Benchmark::new(engine, depth).run()
}

struct Benchmark {
    depth: u8,
    engine: SearchEngine<ChessPosition>,
}

impl Benchmark {
    fn new(engine: SearchEngine<ChessPosition>, depth: u8) -> Self {
        Self { depth, engine }
    }

    fn run(mut self) -> Result<(), Box<dyn Error>> {
        self.print_header();

        let mut total_nodes = 0;
        let mut total_time = Duration::ZERO;

        for fen in POSITIONS {
            let mut position = ChessPosition::from_fen(fen)?;
            self.engine.new_game();

            let start = Instant::now();
            let result = self.engine.search(&mut position)?;
            let elapsed = start.elapsed();

            self.print_position(fen, &result, elapsed);
            total_nodes += result.stats.nodes;
            total_time += elapsed;
        }

        self.print_summary(total_nodes, total_time);
        Ok(())
    }

    fn print_header(&self) {
        println!(
            "Running benchmark: depth {}, {}, {} ordering\n",
            self.depth,
            self.engine.evaluator_name(),
            self.engine.orderer_name()
        );
    }

    fn print_position(&self, fen: &str, result: &SearchResult<ChessMove>, elapsed: Duration) {
        println!("{}", fen);
        println!(
            "  bestmove {} score {} nodes {} nps {} time {} ms hashfull {}",
            result.best_move,
            result.score,
            result.stats.nodes,
            nodes_per_second(result.stats.nodes, elapsed),
            elapsed.as_millis(),
            self.engine.hashfull()
        );
    }

    fn print_summary(&self, nodes: u64, time: Duration) {
        println!("\n=== Benchmark Summary ===");
        println!("Nodes: {}", nodes);
        println!("NPS: {}", nodes_per_second(nodes, time));
        println!("Time: {} ms", time.as_millis());
    }
}

fn nodes_per_second(nodes: u64, elapsed: Duration) -> u64 {
    let micros = elapsed.as_micros().max(1);
    (u128::from(nodes) * 1_000_000 / micros) as u64
}
