//! linkhub CLI.
//!
//! Provides commands for:
//! - `serve`: Start the site server
//! - `check`: Load and validate the site document
//! - `feedback`: Submit feedback to a running relay

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, FeedbackArgs, ServeArgs};
use error::CliError;
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// linkhub - links and documentation hub.
#[derive(Parser)]
#[command(name = "lh", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the site server.
    Serve(ServeArgs),
    /// Load the site document and report reference problems.
    Check(CheckArgs),
    /// Send feedback to a running relay.
    Feedback(FeedbackArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG
    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(cli.command) {
        output.error(&format!("Error: {err}"));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(args.execute(VERSION))
        }
        Commands::Check(args) => args.execute(),
        Commands::Feedback(args) => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(args.execute())
        }
    }
}
