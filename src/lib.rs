pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fetchers;
pub mod http;
pub mod output;
pub mod rate_limiter;
pub mod rating;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::{CacheArgs, Cli, OutputArgs};

use crate::cache::Cache;
use crate::cli::Command;
use crate::config::AppConfig;
use crate::rating::TeamRegistry;
use crate::services::ingestion::IngestionService;
use crate::services::processing::ProcessingService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_ingest(cache: &CacheArgs) -> Result<()> {
    let config = build_config(cache);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut service = IngestionService::new(&config)?;
        service.run().await
    })?;
    Ok(())
}

pub fn handle_process(cache: &CacheArgs, output: &OutputArgs) -> Result<()> {
    let config = build_config(cache);
    let service = ProcessingService::new(config);
    let registry = service.run()?;
    print_ranking(&registry, output)
}

pub fn handle_rank(cache: &CacheArgs, output: &OutputArgs) -> Result<()> {
    let config = build_config(cache);
    let runtime = tokio::runtime::Runtime::new()?;
    let tournaments = runtime.block_on(async {
        let mut service = IngestionService::new(&config)?;
        service.run().await
    })?;

    let registry = ProcessingService::new(config).process(tournaments);
    print_ranking(&registry, output)
}

pub fn handle_clear_cache(cache: &CacheArgs) -> Result<()> {
    let config = build_config(cache);
    Cache::new(&config.cache_dir)?.clear()
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn build_config(cache: &CacheArgs) -> AppConfig {
    AppConfig::new().with_cache_dir(cache.cache_dir.clone())
}

fn print_ranking(registry: &TeamRegistry, output: &OutputArgs) -> Result<()> {
    output::write_standings(
        &registry.standings(),
        output.format,
        output.output.as_deref(),
    )
}
