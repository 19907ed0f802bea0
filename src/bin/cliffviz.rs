//! cliffviz CLI - interactive reports over CliffWalking experiment artifacts
//!
//! This CLI provides a unified interface for:
//! - Validating the artifacts a training run left behind
//! - Rendering the five-tab interactive HTML report
//! - Exporting aggregated series for further analysis

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cliffviz")]
#[command(version, about = "Reporting toolkit for CliffWalking reinforcement-learning experiments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate experiment artifacts and print summary statistics
    Check(cliffviz::cli::commands::check::CheckArgs),

    /// Render the interactive HTML report
    Render(cliffviz::cli::commands::render::RenderArgs),

    /// Export aggregated series in various formats
    Export(cliffviz::cli::commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => cliffviz::cli::commands::check::execute(args),
        Commands::Render(args) => cliffviz::cli::commands::render::execute(args),
        Commands::Export(args) => cliffviz::cli::commands::export::execute(args),
    }
}
