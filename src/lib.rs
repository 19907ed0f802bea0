//! Interactive reporting over precomputed CliffWalking experiment artifacts
//!
//! This crate provides:
//! - Loading and validation of the artifacts a training pipeline leaves
//!   behind: a rewards spreadsheet plus one estimation-error array per
//!   algorithm
//! - Aggregation into chart-ready series (per-episode means, trailing
//!   moving averages, long-form error tables)
//! - Declarative plotly figure composition with per-algorithm visibility
//!   dropdowns
//! - A five-tab, self-contained HTML report with a greedy-episode
//!   media gallery

pub mod aggregate;
pub mod algorithms;
pub mod artifacts;
pub mod charts;
pub mod cli;
pub mod error;
pub mod export;
pub mod media;
pub mod report;

pub use algorithms::Algorithm;
pub use artifacts::{ArtifactBundle, RewardRecord};
pub use error::{Error, Result};
pub use report::{render, RenderSummary, ReportConfig};
