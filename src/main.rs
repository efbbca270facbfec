//! `outrank` command-line entry point.
//!
//! Loads configuration, reads alternatives from a JSON file, runs one ranking
//! and prints it as a table or JSON.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::error;

use outrank::adapters::{
    ConfiguredCriteriaReader, InMemoryRankingStore, JsonFileAlternativeReader,
    TracingEventPublisher,
};
use outrank::application::{ComputeRankingCommand, ComputeRankingHandler};
use outrank::config::AppConfig;
use outrank::domain::ranking::Ranking;
use outrank::logging;

#[derive(Debug, Parser)]
#[command(name = "outrank", version, about = "Rank alternatives by PROMETHEE net flow")]
struct Cli {
    /// Configuration file (TOML), layered over `outrank.toml`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file with alternative records; overrides `ranking.alternatives_path`
    #[arg(short, long)]
    alternatives: Option<PathBuf>,

    /// Print the ranking as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("error: invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("warning: logging not initialized: {}", e);
    }

    let Some(path) = cli.alternatives.or_else(|| config.ranking.alternatives_path.clone()) else {
        eprintln!("error: no alternatives file given (use --alternatives or ranking.alternatives_path)");
        return ExitCode::FAILURE;
    };

    let handler = ComputeRankingHandler::new(
        Arc::new(JsonFileAlternativeReader::new(path)),
        Arc::new(ConfiguredCriteriaReader::from_config(&config.ranking)),
        Arc::new(InMemoryRankingStore::new()),
        Arc::new(TracingEventPublisher::new()),
    );

    let result = match handler.handle(ComputeRankingCommand::default()).await {
        Ok(result) => result,
        Err(e) => {
            error!(code = %e.code(), error = %e, "Ranking failed");
            eprintln!("error [{}]: {}", e.code(), e);
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&result.ranking) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to encode ranking: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_table(&result.ranking);
    }

    ExitCode::SUCCESS
}

fn print_table(ranking: &Ranking) {
    println!(
        "{:>4}  {:<24} {:>8} {:>8} {:>8}  {}",
        "rank", "alternative", "leaving", "entering", "net", "note"
    );
    for entry in ranking.entries() {
        println!(
            "{:>4}  {:<24} {:>8.2} {:>8.2} {:>8.2}  {}",
            entry.rank,
            entry.label,
            entry.leaving_flow,
            entry.entering_flow,
            entry.net_flow,
            entry.note.as_deref().unwrap_or("")
        );
    }
}
