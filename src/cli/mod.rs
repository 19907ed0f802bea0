//! CLI infrastructure for the cliffviz reporting toolkit
//!
//! This module provides the command-line interface for validating
//! experiment artifacts, rendering the interactive report, and exporting
//! aggregated series.

pub mod commands;
pub mod output;
