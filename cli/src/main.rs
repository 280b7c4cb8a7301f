//! # cmdconf Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `cmdconf` inspector.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Show the resolved configuration of a subcommand
//! cmdconf inspect --manifest tool.toml stats
//!
//! # Check the tree with debug logging
//! cmdconf -vv check
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Inspector subcommands (inspect, tree, check)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "cmdconf",
    about = "Inspect declarative command configurations",
    long_about = "Loads a command manifest (cmdconf.toml) and reports how a parsing and help\n\
                  engine interprets each command's configuration.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Show the resolved configuration of one command.
    #[command(alias = "i")]
    Inspect(commands::inspect::InspectArgs),
    /// Print the subcommand tree.
    #[command(alias = "t")]
    Tree(commands::tree::TreeArgs),
    /// Validate the subcommand tree.
    #[command(alias = "c")]
    Check(commands::check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Inspect(args) => commands::inspect::handle_inspect(args),
        Commands::Tree(args) => commands::tree::handle_tree(args),
        Commands::Check(args) => commands::check::handle_check(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
