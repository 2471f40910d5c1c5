use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Elo ranking of jugger teams from tugeny.org results")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct CacheArgs {
    /// Cache directory (defaults to $JUGGER_CACHE_DIR or ./cache)
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write the ranking to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Fetch tournaments from tugeny.org and store them in the cache
    Ingest {
        #[command(flatten)]
        cache: CacheArgs,
    },
    /// Calculate ratings from cached tournaments
    Process {
        #[command(flatten)]
        cache: CacheArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Ingest, then process
    Rank {
        #[command(flatten)]
        cache: CacheArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Remove all cached pages and parsed data
    ClearCache {
        #[command(flatten)]
        cache: CacheArgs,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
