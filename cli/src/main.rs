//! # Railshad Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the railshad CLI. It
//! handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! The application follows a modular command structure:
//! - Each command (`install`, `list`) is defined as a variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! The whole program is a single synchronous pass: every filesystem
//! operation is a blocking call executed in sequence, and the process exits
//! when the one command it was asked to run completes.
//!
//! ## Examples
//!
//! Basic railshad usage:
//!
//! ```bash
//! # Get help
//! railshad --help
//!
//! # Install a component with increased verbosity
//! railshad -vv install accordion ~/code/storefront
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Handles specific command logic (install, list)
mod common; // Contains shared utilities (fs, probe)
mod core; // Core infrastructure (errors, catalog)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "railshad",
    about = "Installs shadcn-style UI components into Rails projects",
    long_about = "Copies UI components and their dependencies from the template catalog\n\
                  into a target Rails project, wiring up the Tailwind plumbing they need.",
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
    #[command(alias = "i")]
    Install(commands::install::InstallArgs),
    #[command(alias = "l")]
    List(commands::list::ListArgs),
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
        Commands::Install(args) => commands::install::handle_install(args),
        Commands::List(args) => commands::list::handle_list(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    fn railshad_cmd() -> Command {
        Command::cargo_bin("railshad").expect("Failed to find railshad binary for testing")
    }
    #[test]
    fn test_main_help_flag() {
        railshad_cmd().arg("--help").assert().success();
    }
    #[test]
    fn test_main_version_flag() {
        railshad_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
