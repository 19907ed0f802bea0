//! Artifact loading and validation.
//!
//! The training pipeline leaves its outputs in a flat data directory: the
//! rewards spreadsheet, one estimation-error array per algorithm, and
//! (optionally) one greedy-episode animation per algorithm. This module
//! loads the required artifacts into an [`ArtifactBundle`]. Loading is
//! all-or-nothing: a missing or malformed required file fails the whole
//! load before any downstream aggregation runs. The optional animations
//! are resolved separately by [`crate::media`].

mod npy;
mod rewards;

use std::path::Path;

use crate::algorithms::Algorithm;
use crate::error::{Error, Result};

pub use npy::read_1d;
pub use rewards::{read_rewards, RewardRecord, RewardTable, REWARDS_FILENAME};

/// Everything the charts are derived from, loaded once per render.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    /// Reward observations in sheet order.
    pub rewards: Vec<RewardRecord>,
    /// Estimation-error series, one per algorithm in canonical order.
    /// Lengths are independent; the index within a series is the episode.
    pub errors: Vec<(Algorithm, Vec<f64>)>,
    /// Spreadsheet rows skipped because their algorithm label was unknown.
    pub skipped_reward_rows: usize,
}

impl ArtifactBundle {
    /// The estimation-error series for one algorithm.
    pub fn errors_for(&self, algorithm: Algorithm) -> &[f64] {
        self.errors
            .iter()
            .find(|(a, _)| *a == algorithm)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }
}

/// Load all required artifacts from `data_dir`.
///
/// # Errors
///
/// Returns [`Error::MissingArtifact`] if the rewards spreadsheet or any
/// of the six error arrays is absent, and [`Error::MalformedArtifact`]
/// if a present file fails to parse into the expected shape.
pub fn load(data_dir: &Path) -> Result<ArtifactBundle> {
    let rewards_path = data_dir.join(REWARDS_FILENAME);
    if !rewards_path.is_file() {
        return Err(Error::MissingArtifact {
            filename: REWARDS_FILENAME.to_string(),
        });
    }
    let table = rewards::read_rewards(&rewards_path)?;

    let mut errors = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let filename = algorithm.error_artifact();
        let path = data_dir.join(filename);
        if !path.is_file() {
            return Err(Error::MissingArtifact {
                filename: filename.to_string(),
            });
        }
        errors.push((algorithm, npy::read_1d(&path)?));
    }

    Ok(ArtifactBundle {
        rewards: table.records,
        errors,
        skipped_reward_rows: table.skipped_rows,
    })
}
