//! Check command - validate artifacts and print summary statistics

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::aggregate;
use crate::artifacts;
use crate::cli::output;
use crate::media;

#[derive(Parser, Debug)]
#[command(about = "Validate experiment artifacts and print summary statistics")]
pub struct CheckArgs {
    /// Directory containing the experiment artifacts
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}

pub fn execute(args: CheckArgs) -> Result<()> {
    let bundle = artifacts::load(&args.data_dir).with_context(|| {
        format!(
            "artifact validation failed for {}",
            args.data_dir.display()
        )
    })?;

    output::print_section("Artifact check");
    output::print_kv("Data directory", &args.data_dir.display().to_string());
    output::print_kv(
        "Reward observations",
        &output::format_number(bundle.rewards.len()),
    );
    if bundle.skipped_reward_rows > 0 {
        output::print_kv(
            "Skipped rows",
            &format!(
                "{} (unknown algorithm labels)",
                output::format_number(bundle.skipped_reward_rows)
            ),
        );
    }

    output::print_subsection("Rewards per algorithm");
    for stats in aggregate::reward_stats(&bundle.rewards) {
        println!(
            "  {:26} {:>7} obs  {:>6} episodes  mean {:>10.2}  min {:>10.2}  max {:>10.2}",
            stats.algorithm.label(),
            stats.observations,
            stats.episodes,
            stats.mean,
            stats.min,
            stats.max,
        );
    }

    output::print_subsection("Error series");
    for (algorithm, values) in &bundle.errors {
        println!(
            "  {:26} {:>7} samples",
            algorithm.label(),
            output::format_number(values.len())
        );
    }

    output::print_subsection("Media");
    for asset in media::resolve_gallery(&args.data_dir) {
        let status = if asset.exists { "found" } else { "missing" };
        println!(
            "  {:26} {:>7}  ({})",
            asset.algorithm.label(),
            status,
            asset.filename
        );
    }

    Ok(())
}
