//! Render command - produce the interactive HTML report

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::aggregate::SMOOTHING_WINDOW;
use crate::cli::output;
use crate::report::{self, ReportConfig};

#[derive(Parser, Debug)]
#[command(about = "Render the interactive HTML report")]
pub struct RenderArgs {
    /// Directory containing the experiment artifacts
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Output file path (directories get report.html, missing extensions .html)
    #[arg(long, short = 'o', default_value = "report.html")]
    pub output: PathBuf,

    /// Moving-average window for the smoothed reward tab
    #[arg(long, default_value_t = SMOOTHING_WINDOW)]
    pub window: usize,

    /// Override the page header
    #[arg(long)]
    pub title: Option<String>,

    /// Subtitle shown under the page header
    #[arg(long)]
    pub subtitle: Option<String>,

    /// Disable the progress spinner
    #[arg(long)]
    pub quiet: bool,
}

pub fn execute(args: RenderArgs) -> Result<()> {
    let output = normalize_output(args.output);
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory {}", parent.display()))?;
    }

    let mut config = ReportConfig::new(args.data_dir, output).with_window(args.window);
    if let Some(title) = args.title {
        config = config.with_title(title);
    }
    if let Some(subtitle) = args.subtitle {
        config = config.with_subtitle(subtitle);
    }

    let spinner = (!args.quiet).then(|| output::create_spinner("Rendering report"));
    let result = report::render(&config).context("failed to render report");
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let summary = result?;

    output::print_kv("Report", &summary.output.display().to_string());
    output::print_kv("Reward traces", &summary.reward_traces.to_string());
    output::print_kv("Smoothed traces", &summary.smoothed_traces.to_string());
    output::print_kv("Error traces", &summary.error_traces.to_string());
    output::print_kv(
        "Media",
        &format!(
            "{} found, {} missing",
            summary.media_found, summary.media_missing
        ),
    );
    if summary.skipped_reward_rows > 0 {
        output::print_kv(
            "Skipped rows",
            &output::format_number(summary.skipped_reward_rows),
        );
    }
    Ok(())
}

/// Directory arguments get the default report name; extensionless paths
/// get the `.html` extension appended.
fn normalize_output(output: PathBuf) -> PathBuf {
    let dir_like = output.as_os_str().to_string_lossy().ends_with('/') || output.is_dir();
    if dir_like {
        return output.join("report.html");
    }
    if output.extension().is_none() {
        return output.with_extension("html");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_appends_extension() {
        assert_eq!(
            normalize_output(PathBuf::from("out/overview")),
            PathBuf::from("out/overview.html")
        );
    }

    #[test]
    fn normalize_keeps_explicit_extension() {
        assert_eq!(
            normalize_output(PathBuf::from("out/overview.htm")),
            PathBuf::from("out/overview.htm")
        );
    }

    #[test]
    fn normalize_fills_in_directory_default() {
        assert_eq!(
            normalize_output(PathBuf::from("reports/")),
            PathBuf::from("reports/report.html")
        );
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(
            normalize_output(tmp.path().to_path_buf()),
            tmp.path().join("report.html")
        );
    }
}
