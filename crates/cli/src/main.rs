use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use quotevault_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "quotevault")]
#[command(about = "CSV-backed quotation database with an HTTP API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Parse the CSV source and replace the table contents
    Load {
        /// CSV file to load instead of the configured one
        #[arg(short, long)]
        csv: Option<PathBuf>,
    },
    /// Print stored quotes as JSON, optionally filtered by author
    Quotes { author: Option<String> },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(config, host, port).await,
        Commands::Load { csv } => commands::load::run(config, csv).await,
        Commands::Quotes { author } => commands::quotes::run(config, author).await,
    }
}
