//! Declarative figure structures that serialize to plotly JSON.
//!
//! The report embeds these structures verbatim; plotly.js consumes them
//! client-side. Interactivity is encoded up front: each figure carries a
//! dropdown whose buttons hold precomputed visibility arrays, so toggling
//! never touches the underlying data.

use serde::Serialize;

use crate::algorithms::Algorithm;

/// Dark theme colors matching the original dashboard's template.
pub const PAPER_BG: &str = "#111111";
pub const PLOT_BG: &str = "#111111";
pub const FONT_COLOR: &str = "#f2f5fa";
pub const GRID_COLOR: &str = "#283442";

/// A complete chart specification: traces plus layout.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// The algorithms behind this figure's traces, in trace order.
    pub fn trace_algorithms(&self) -> Vec<Algorithm> {
        self.data.iter().map(Trace::algorithm).collect()
    }
}

/// One named, colored series.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Trace {
    Box(BoxTrace),
    Line(LineTrace),
}

impl Trace {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Trace::Box(t) => t.algorithm,
            Trace::Line(t) => t.algorithm,
        }
    }
}

/// A box-plot trace over one algorithm's scalar samples.
#[derive(Debug, Clone, Serialize)]
pub struct BoxTrace {
    #[serde(skip)]
    pub algorithm: Algorithm,
    #[serde(rename = "type")]
    kind: &'static str,
    pub y: Vec<f64>,
    pub name: &'static str,
    pub marker: Marker,
    pub boxpoints: &'static str,
}

impl BoxTrace {
    pub fn new(algorithm: Algorithm, y: Vec<f64>) -> Self {
        Self {
            algorithm,
            kind: "box",
            y,
            name: algorithm.label(),
            marker: Marker {
                color: algorithm.color(),
            },
            boxpoints: "outliers",
        }
    }
}

/// A line trace; `x` is omitted when the sample index is the x value.
#[derive(Debug, Clone, Serialize)]
pub struct LineTrace {
    #[serde(skip)]
    pub algorithm: Algorithm,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<u64>>,
    pub y: Vec<f64>,
    mode: &'static str,
    pub name: &'static str,
    pub line: LineStyle,
}

impl LineTrace {
    pub fn new(algorithm: Algorithm, x: Option<Vec<u64>>, y: Vec<f64>) -> Self {
        Self {
            algorithm,
            kind: "scatter",
            x,
            y,
            mode: "lines",
            name: algorithm.label(),
            line: LineStyle {
                color: algorithm.color(),
                width: 2.0,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
    pub width: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub font: Font,
    pub updatemenus: Vec<UpdateMenu>,
}

impl Layout {
    pub fn dark(title: &str, xaxis_title: &str, yaxis_title: &str) -> Self {
        Self {
            title: Title::new(title),
            xaxis: Some(Axis::new(xaxis_title)),
            yaxis: Some(Axis::new(yaxis_title)),
            paper_bgcolor: PAPER_BG,
            plot_bgcolor: PLOT_BG,
            font: Font { color: FONT_COLOR },
            updatemenus: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Font {
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: Title,
    pub gridcolor: &'static str,
    pub zerolinecolor: &'static str,
}

impl Axis {
    pub fn new(title: &str) -> Self {
        Self {
            title: Title::new(title),
            gridcolor: GRID_COLOR,
            zerolinecolor: GRID_COLOR,
        }
    }
}

/// The per-algorithm visibility dropdown.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateMenu {
    pub buttons: Vec<Button>,
    pub direction: &'static str,
    pub showactive: bool,
    pub x: f64,
    pub y: f64,
}

/// One dropdown entry: a visibility mask plus a title update.
#[derive(Debug, Clone, Serialize)]
pub struct Button {
    pub label: String,
    pub method: &'static str,
    pub args: (TraceUpdate, LayoutUpdate),
}

#[derive(Debug, Clone, Serialize)]
pub struct TraceUpdate {
    pub visible: Vec<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutUpdate {
    pub title: Title,
}
