//! Export of aggregated series for downstream analysis.
//!
//! The same aggregates that power the charts can be written to CSV or
//! JSON. CSV columns reuse the artifact vocabulary (`algoritmo`,
//! `episodio`, ...) so exported tables line up with the source
//! spreadsheet.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::aggregate::{ErrorSample, SmoothedSeries};
use crate::error::{Error, Result};

/// Write smoothed reward series as CSV, one row per episode.
///
/// # Errors
///
/// Returns [`Error::Io`] or [`Error::Csv`] on write failures.
pub fn write_smoothed_csv(series: &[SmoothedSeries], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["algoritmo", "episodio", "recompensa_suavizada"])?;
    for s in series {
        for (episode, value) in s.episodes.iter().zip(&s.values) {
            writer.write_record([
                s.algorithm.label().to_string(),
                episode.to_string(),
                value.to_string(),
            ])?;
        }
    }
    writer
        .flush()
        .map_err(|e| Error::io(format!("flush {}", path.display()), e))?;
    Ok(())
}

/// Write melted error samples as CSV, one row per sample.
///
/// # Errors
///
/// Returns [`Error::Io`] or [`Error::Csv`] on write failures.
pub fn write_errors_csv(samples: &[ErrorSample], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["algoritmo", "erro_medio"])?;
    for sample in samples {
        writer.write_record([sample.algorithm.label().to_string(), sample.value.to_string()])?;
    }
    writer
        .flush()
        .map_err(|e| Error::io(format!("flush {}", path.display()), e))?;
    Ok(())
}

/// Write any serializable aggregate as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`Error::Io`] on file creation failures and
/// [`Error::Serialization`] if encoding fails.
pub fn write_json<T: serde::Serialize>(value: &T, path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::io(format!("create {}", path.display()), e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|e| Error::io(format!("flush {}", path.display()), e))?;
    Ok(())
}
