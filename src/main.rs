use anyhow::Result;

use jugger_ranking::cli::Command;
use jugger_ranking::{
    handle_clear_cache, handle_completions, handle_ingest, handle_process, handle_rank, interpret,
};

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
        Command::Ingest { cache } => handle_ingest(cache),
        Command::Process { cache, output } => handle_process(cache, output),
        Command::Rank { cache, output } => handle_rank(cache, output),
        Command::ClearCache { cache } => handle_clear_cache(cache),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
