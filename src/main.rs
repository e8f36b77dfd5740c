//! Terminal front end: reads lines from stdin and prints the game's output.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use roomwalk::engine::{Output, OutputBlock};
use roomwalk::{Game, GameConfig, load_world_from_file};

#[derive(Parser)]
#[command(name = "roomwalk")]
#[command(about = "A small text adventure with resumable sessions")]
#[command(version)]
struct Cli {
    /// World data file (.json or .toml)
    world: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "roomwalk.toml")]
    config: PathBuf,

    /// Session store file
    #[arg(long)]
    store: Option<PathBuf>,

    /// Name of the finish room
    #[arg(long)]
    finish: Option<String>,

    /// Start in this room instead of a random one
    #[arg(long)]
    start: Option<String>,

    /// Seed for the random start room
    #[arg(long)]
    seed: Option<u64>,

    /// Continue from the saved room if the username has one
    #[arg(long)]
    resume: bool,

    /// Verbose logging to stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let base_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(base_level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::load(&cli.config)
        .with_context(|| format!("failed to load config '{}'", cli.config.display()))?;

    if let Some(world) = &cli.world {
        config = config.with_world_path(world);
    }
    if let Some(store) = &cli.store {
        config = config.with_store_path(store);
    }
    if let Some(finish) = &cli.finish {
        config = config.with_finish_room(finish);
    }
    if let Some(start) = &cli.start {
        config = config.with_start_room(start);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.resume {
        config = config.with_resume(true);
    }
    Ok(config)
}

fn flush_output(out: Output) {
    let mut printed_anything = false;
    let mut started_events = false;

    for block in out.blocks {
        match block {
            OutputBlock::Text(text) => {
                println!("{}", text);
                printed_anything = true;
            }
            OutputBlock::Event(ev) => {
                if !started_events {
                    if printed_anything {
                        println!(); // visual separation before first event
                    }
                    started_events = true;
                }
                println!("{}", ev);
                printed_anything = true;
            }
            OutputBlock::Status(status) => {
                println!("[{}]", status);
                printed_anything = true;
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = build_config(&cli)?;
    let world = load_world_from_file(&config.world_path, &config.finish_room).with_context(
        || format!("failed to load world file '{}'", config.world_path.display()),
    )?;
    info!("using world file {}", config.world_path.display());

    let mut game = Game::new(world, &config)?;
    flush_output(game.start());
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(prompt) = game.prompt() {
        print!("{}", prompt);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!("\nGoodbye.");
            break;
        };
        let line = line?;
        println!();

        flush_output(game.step(&line)?);
    }

    Ok(())
}
