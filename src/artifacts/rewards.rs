//! Loading of the per-episode reward spreadsheet.
//!
//! The training pipeline records one row per episode-run observation in
//! `Recompensas_Total.xlsx`, with columns `algoritmo`, `episodio`, and
//! `recompensa`. Column positions are discovered from the header row, so
//! extra columns and reordered sheets are tolerated; missing columns and
//! non-numeric cells are not.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use serde::Serialize;

use crate::algorithms::Algorithm;
use crate::error::{Error, Result};

/// File name of the rewards spreadsheet inside the data directory.
pub const REWARDS_FILENAME: &str = "Recompensas_Total.xlsx";

/// One episode-run reward observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RewardRecord {
    pub algorithm: Algorithm,
    pub episode: u64,
    pub reward: f64,
}

/// Parsed rewards spreadsheet.
#[derive(Debug, Clone)]
pub struct RewardTable {
    /// Observations in sheet order.
    pub records: Vec<RewardRecord>,
    /// Rows whose `algoritmo` value matched none of the six known labels.
    pub skipped_rows: usize,
}

/// Read the rewards spreadsheet at `path`.
///
/// # Errors
///
/// Returns [`Error::MalformedArtifact`] if the workbook cannot be parsed,
/// a required column is missing, or a cell has the wrong type.
pub fn read_rewards(path: &Path) -> Result<RewardTable> {
    let malformed = |reason: String| Error::malformed(REWARDS_FILENAME, reason);

    let mut workbook: Xlsx<std::io::BufReader<std::fs::File>> =
        open_workbook(path).map_err(|e: calamine::XlsxError| malformed(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| malformed("workbook has no worksheets".to_string()))?
        .map_err(|e| malformed(e.to_string()))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| malformed("spreadsheet is empty".to_string()))?;
    let algorithm_col = find_column(header, "algoritmo")?;
    let episode_col = find_column(header, "episodio")?;
    let reward_col = find_column(header, "recompensa")?;

    let mut records = Vec::new();
    let mut skipped_rows = 0;
    for (index, row) in rows.enumerate() {
        let row_number = index + 2;
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }

        let label = text_cell(row, algorithm_col).ok_or_else(|| {
            malformed(format!("row {row_number}: 'algoritmo' is not a text cell"))
        })?;
        let Some(algorithm) = Algorithm::from_label(label.trim()) else {
            // Rows for algorithms outside the fixed set are never charted;
            // keep a count for diagnostics instead of failing the load.
            skipped_rows += 1;
            continue;
        };

        let episode = numeric_cell(row, episode_col).ok_or_else(|| {
            malformed(format!("row {row_number}: 'episodio' is not a numeric cell"))
        })?;
        if !episode.is_finite() || episode < 0.0 || episode.fract() != 0.0 {
            return Err(malformed(format!(
                "row {row_number}: 'episodio' must be a non-negative integer, got {episode}"
            )));
        }

        let reward = numeric_cell(row, reward_col).ok_or_else(|| {
            malformed(format!("row {row_number}: 'recompensa' is not a numeric cell"))
        })?;
        if !reward.is_finite() {
            return Err(malformed(format!(
                "row {row_number}: 'recompensa' is not a finite number"
            )));
        }

        records.push(RewardRecord {
            algorithm,
            episode: episode as u64,
            reward,
        });
    }

    Ok(RewardTable {
        records,
        skipped_rows,
    })
}

fn find_column(header: &[Data], name: &str) -> Result<usize> {
    header
        .iter()
        .position(|cell| matches!(cell, Data::String(s) if s.trim() == name))
        .ok_or_else(|| Error::malformed(REWARDS_FILENAME, format!("missing column '{name}'")))
}

fn text_cell(row: &[Data], col: usize) -> Option<&str> {
    match row.get(col)? {
        Data::String(s) => Some(s.as_str()),
        _ => None,
    }
}

fn numeric_cell(row: &[Data], col: usize) -> Option<f64> {
    match row.get(col)? {
        Data::Float(v) => Some(*v),
        Data::Int(v) => Some(*v as f64),
        _ => None,
    }
}
