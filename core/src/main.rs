mod args;
mod bench;
mod engine;
mod outcome;
mod playground;
mod summary;

use args::{Args, Command, SimulateArgs};
use clap::Parser;
use engine::EngineSetup;
use log::{info, LevelFilter};
use playground::Playground;
use simplelog::{Config, SimpleLogger, WriteLogger};
use std::error::Error;
use std::fs::File;
use summary::Summary;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    match args.command {
        Command::Simulate(simulate_args) => simulate(&simulate_args),
        Command::Bench { depth } => bench::run(depth),
    }
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    match &args.log_file {
        Some(log_file) => WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?,
        None => SimpleLogger::init(LevelFilter::Info, Config::default())?,
    }

    Ok(args)
}

fn simulate(args: &SimulateArgs) -> Result<(), Box<dyn Error>> {
    let white = EngineSetup::from_args(args.white, args);
    let black = EngineSetup::from_args(args.black, args);

    info!("Contestants:");
    info!("- White: {}", white.create(0)?.name());
    info!("- Black: {}", black.create(0)?.name());

    let mut playground = Playground::new(
        move |game| white.create(game),
        move |game| black.create(game),
    )
    .with_max_moves(args.max_moves);
    if let Some(fen) = &args.fen {
        playground = playground.with_fen(fen)?;
    }

    let outcomes = if args.games == 1 {
        vec![playground.play_game()?]
    } else {
        playground.play_multiple_games(args.games)?
    };

    if let [outcome] = outcomes.as_slice() {
        println!("Start: {}", outcome.starting_position);
        println!("Moves: {}", outcome.move_text());
        println!(
            "Winner: {} (material {:+})\n",
            outcome.winner_name().unwrap_or("none"),
            outcome.final_material()
        );
    }
    println!("{}", Summary::new(&outcomes));

    Ok(())
}
