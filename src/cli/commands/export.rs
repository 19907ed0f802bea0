//! Export command - write aggregated series for downstream analysis
//!
//! Exports consume exactly the aggregates that power the chart tabs, so
//! an exported table always matches what the report displays.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::aggregate::{self, SMOOTHING_WINDOW};
use crate::algorithms::Algorithm;
use crate::artifacts;
use crate::cli::output;
use crate::export;

#[derive(Parser, Debug)]
#[command(about = "Export aggregated series in various formats")]
pub struct ExportArgs {
    /// Type of series to export
    #[arg(value_enum)]
    pub data_type: DataType,

    /// Directory containing the experiment artifacts
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Output file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Export format
    #[arg(long, short = 'f', default_value = "csv")]
    pub format: ExportFormat,

    /// Restrict the export to one algorithm (display label, e.g. "SARSA")
    #[arg(long)]
    pub algorithm: Option<String>,

    /// Moving-average window for smoothed rewards
    #[arg(long, default_value_t = SMOOTHING_WINDOW)]
    pub window: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DataType {
    /// Smoothed per-episode mean rewards
    SmoothedRewards,
    /// Long-form estimation-error samples
    Errors,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format
    Csv,
    /// JSON format
    Json,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let filter = args
        .algorithm
        .as_deref()
        .map(Algorithm::from_str)
        .transpose()?;
    let bundle = artifacts::load(&args.data_dir).with_context(|| {
        format!(
            "artifact validation failed for {}",
            args.data_dir.display()
        )
    })?;

    let rows = match args.data_type {
        DataType::SmoothedRewards => {
            let mut series = aggregate::smoothed_rewards(&bundle.rewards, args.window);
            if let Some(algorithm) = filter {
                series.retain(|s| s.algorithm == algorithm);
            }
            let rows: usize = series.iter().map(|s| s.episodes.len()).sum();
            match args.format {
                ExportFormat::Csv => export::write_smoothed_csv(&series, &args.output)?,
                ExportFormat::Json => export::write_json(&series, &args.output)?,
            }
            rows
        }
        DataType::Errors => {
            let mut samples = aggregate::melt_errors(&bundle.errors);
            if let Some(algorithm) = filter {
                samples.retain(|s| s.algorithm == algorithm);
            }
            match args.format {
                ExportFormat::Csv => export::write_errors_csv(&samples, &args.output)?,
                ExportFormat::Json => export::write_json(&samples, &args.output)?,
            }
            samples.len()
        }
    };

    output::print_kv("Exported", &args.output.display().to_string());
    output::print_kv("Rows", &output::format_number(rows));
    Ok(())
}
