//! Assembly of the five-tab HTML report.
//!
//! The report is a single self-contained HTML file: figures are embedded
//! as plotly JSON and rendered client-side, animations are inlined as
//! base64 data URIs, and tab switching is plain class toggling. All data
//! work happens here at render time; nothing is re-loaded or
//! re-aggregated when the user switches tabs or toggles traces.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::json;

use crate::aggregate::SMOOTHING_WINDOW;
use crate::artifacts;
use crate::charts::{self, ChartSet};
use crate::error::{Error, Result};
use crate::media::{self, MediaAsset};

/// Page header used when no title override is given.
pub const DEFAULT_TITLE: &str = "Aprendizado por Reforço - CliffWalking";

/// Tab labels, in presentation order.
pub const TAB_LABELS: [&str; 5] = [
    "Boxplot da Recompensa por Algoritmo",
    "Recompensa Média Suavizada por Episódio",
    "Boxplot do Erro Médio por Algoritmo",
    "Erro Médio Estimado por Episódio",
    "Episódio Greedy - Vídeos",
];

/// Configuration for one report render.
///
/// # Examples
///
/// ```
/// use cliffviz::ReportConfig;
///
/// let config = ReportConfig::new("data", "report.html")
///     .with_window(100)
///     .with_subtitle("Execução de validação");
/// assert_eq!(config.window, 100);
/// ```
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory holding the experiment artifacts.
    pub data_dir: PathBuf,
    /// Path the HTML report is written to.
    pub output: PathBuf,
    /// Trailing moving-average window for the smoothed reward tab.
    pub window: usize,
    /// Page header.
    pub title: String,
    /// Optional line under the page header.
    pub subtitle: Option<String>,
}

impl ReportConfig {
    /// Create a configuration with the default window and title.
    pub fn new(data_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output: output.into(),
            window: SMOOTHING_WINDOW,
            title: DEFAULT_TITLE.to_string(),
            subtitle: None,
        }
    }

    /// Set the smoothing window.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Override the page header.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Add a subtitle under the page header.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

/// What a render produced, for CLI reporting and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub output: PathBuf,
    pub reward_traces: usize,
    pub smoothed_traces: usize,
    pub error_traces: usize,
    pub media_found: usize,
    pub media_missing: usize,
    pub skipped_reward_rows: usize,
}

/// Run the full pipeline: load, aggregate, compose, write the report.
///
/// # Errors
///
/// Fails with [`Error::MissingArtifact`] or [`Error::MalformedArtifact`]
/// before anything is written if a required artifact cannot be loaded;
/// missing animations are reported inside the gallery instead. I/O and
/// serialization failures while writing surface as [`Error::Io`] and
/// [`Error::Serialization`].
pub fn render(config: &ReportConfig) -> Result<RenderSummary> {
    let bundle = artifacts::load(&config.data_dir)?;
    let charts = charts::compose_all(&bundle, config.window);
    let gallery = media::resolve_gallery(&config.data_dir);

    let html = render_html(config, &charts, &gallery)?;
    fs::write(&config.output, html)
        .map_err(|e| Error::io(format!("write {}", config.output.display()), e))?;

    Ok(RenderSummary {
        output: config.output.clone(),
        reward_traces: charts.reward_box.data.len(),
        smoothed_traces: charts.reward_smoothed.data.len(),
        error_traces: charts.error_box.data.len(),
        media_found: gallery.iter().filter(|a| a.exists).count(),
        media_missing: gallery.iter().filter(|a| !a.exists).count(),
        skipped_reward_rows: bundle.skipped_reward_rows,
    })
}

fn render_html(config: &ReportConfig, charts: &ChartSet, gallery: &[MediaAsset]) -> Result<String> {
    let figures = json!({
        "chart-reward-box": charts.reward_box,
        "chart-reward-smoothed": charts.reward_smoothed,
        "chart-error-box": charts.error_box,
        "chart-error-lines": charts.error_lines,
    });

    let subtitle_block = match &config.subtitle {
        Some(subtitle) => format!("<p>{}</p>", escape_html(subtitle)),
        None => String::new(),
    };

    let mut tab_buttons = String::new();
    for (index, label) in TAB_LABELS.iter().enumerate() {
        let active = if index == 0 { " active" } else { "" };
        tab_buttons.push_str(&format!(
            "<button class=\"tab-button{active}\" data-tab=\"tab-{index}\">{label}</button>\n"
        ));
    }

    let html = TEMPLATE
        .replace("%%TITLE%%", &escape_html(&config.title))
        .replace("%%SUBTITLE%%", &subtitle_block)
        .replace("%%TAB_BUTTONS%%", &tab_buttons)
        .replace("%%GALLERY%%", &gallery_html(gallery))
        .replace("%%FIGURES%%", &serde_json::to_string(&figures)?);
    Ok(html)
}

/// Per-algorithm gallery entries: an inlined image, or a warning naming
/// the missing file. Each entry is resolved independently.
fn gallery_html(gallery: &[MediaAsset]) -> String {
    let mut html = String::new();
    for asset in gallery {
        html.push_str(&format!("<h3>{}</h3>\n", asset.algorithm.label()));
        let embedded = if asset.exists {
            fs::read(&asset.path).ok()
        } else {
            None
        };
        match embedded {
            Some(bytes) => html.push_str(&format!(
                "<img src=\"data:image/gif;base64,{}\" alt=\"{}\">\n",
                BASE64.encode(bytes),
                asset.algorithm.label()
            )),
            None => html.push_str(&format!(
                "<div class=\"warning\">GIF não encontrado: {}</div>\n",
                escape_html(asset.filename)
            )),
        }
    }
    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>%%TITLE%%</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
<style>
body { margin: 0; background: #111111; color: #f2f5fa; font-family: "Segoe UI", Helvetica, Arial, sans-serif; }
header { text-align: center; padding: 18px 0 6px; }
header h1 { margin: 0; font-size: 32px; }
header p { margin: 4px 0 0; font-size: 14px; color: #c0c6d0; }
.tab-bar { display: flex; flex-wrap: wrap; gap: 4px; padding: 12px 24px 0; border-bottom: 1px solid #283442; }
.tab-button { background: none; border: none; border-bottom: 2px solid transparent; color: #c0c6d0; padding: 8px 12px; font-size: 14px; cursor: pointer; }
.tab-button.active { color: #f2f5fa; border-bottom-color: #636efa; }
.tab { display: none; padding: 12px 24px 24px; }
.tab.active { display: block; }
.chart { width: 100%; height: 640px; }
.gallery img { display: block; max-width: 100%; margin-bottom: 12px; }
.gallery h3 { margin: 18px 0 8px; }
.warning { background: #5c3c00; color: #ffd37a; padding: 10px 14px; border-radius: 4px; margin-bottom: 12px; }
</style>
</head>
<body>
<header>
<h1>%%TITLE%%</h1>
%%SUBTITLE%%
</header>
<nav class="tab-bar">
%%TAB_BUTTONS%%</nav>
<section id="tab-0" class="tab active"><div id="chart-reward-box" class="chart"></div></section>
<section id="tab-1" class="tab"><div id="chart-reward-smoothed" class="chart"></div></section>
<section id="tab-2" class="tab"><div id="chart-error-box" class="chart"></div></section>
<section id="tab-3" class="tab"><div id="chart-error-lines" class="chart"></div></section>
<section id="tab-4" class="tab gallery">
%%GALLERY%%</section>
<script>
const figures = %%FIGURES%%;
for (const [id, figure] of Object.entries(figures)) {
  Plotly.newPlot(id, figure.data, figure.layout, {responsive: true});
}
document.querySelectorAll(".tab-button").forEach((button) => {
  button.addEventListener("click", () => {
    document.querySelectorAll(".tab, .tab-button").forEach((el) => el.classList.remove("active"));
    button.classList.add("active");
    document.getElementById(button.dataset.tab).classList.add("active");
    window.dispatchEvent(new Event("resize"));
  });
});
</script>
</body>
</html>
"#;
