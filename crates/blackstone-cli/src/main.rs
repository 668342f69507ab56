//! Blackstone - two-stage legislative document analysis pipeline.

use blackstone_cli::commands;
use blackstone_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // .env first so both the credential and RUST_LOG can live there
    dotenvy::dotenv().ok();

    if let Err(e) = run().await {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

async fn run() -> blackstone_cli::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let formatter = Formatter::new(!cli.no_color);

    match cli.command {
        Command::Extract(args) => commands::execute_extract(args, &config, &formatter),
        Command::Analyze(args) => commands::execute_analyze(args, &config, &formatter).await,
        Command::Run(args) => commands::execute_run(args, &config, &formatter).await,
    }
}

fn init_tracing(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
