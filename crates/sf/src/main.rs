//! SF CLI - Storefront catalog core.
//!
//! Provides commands for:
//! - `resolve`: Print the product filter for a category selection
//! - `layout`: Compute how many category bar items fit inline
//! - `browse`: Drive the category sidebar and print the routes it emits
//! - `categories`: List the category taxonomy

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, CategoriesArgs, GlobalArgs, LayoutArgs, ResolveArgs};
use output::Output;

/// SF - Storefront catalog core.
#[derive(Parser)]
#[command(name = "sf", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the product filter for a category selection.
    Resolve(ResolveArgs),
    /// Compute how many category bar items fit beside the "View All" control.
    Layout(LayoutArgs),
    /// Drive the category sidebar through a sequence of steps.
    Browse(BrowseArgs),
    /// List top-level categories with their subcategories.
    Categories(CategoriesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Resolve(args) => args.execute(&cli.global),
        Commands::Layout(args) => args.execute(&cli.global),
        Commands::Browse(args) => args.execute(&cli.global),
        Commands::Categories(args) => args.execute(&cli.global),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
