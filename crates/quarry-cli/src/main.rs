//! Quarry CLI
//!
//! Command-line interface for Quarry

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "quarry")]
#[command(about = "Quarry - Repository population and property paths", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resource document operations
    Resources(commands::resources::ResourcesArgs),
}

fn main() {
    let cli = Cli::parse();

    quarry_core::logging_facility::init(quarry_core::logging_facility::Profile::Production);

    let result = match cli.command {
        Commands::Resources(args) => commands::resources::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
