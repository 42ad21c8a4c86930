use anyhow::Result;

use game_recommender::cli::Command;
use game_recommender::{handle_category, handle_prepare, handle_serve, handle_similar, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Prepare => handle_prepare(),
        Command::Similar { name, k } => handle_similar(name, *k),
        Command::Category {
            platform,
            genre,
            rating,
            k,
        } => handle_category(platform, genre, rating, *k),
    }
}
