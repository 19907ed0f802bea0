//! Aggregation of raw artifacts into chart-ready series.
//!
//! Two independent derivations feed the charts: per-episode mean rewards
//! smoothed with a trailing moving average, and the six estimation-error
//! arrays melted into one long-form table. Both preserve the canonical
//! algorithm order and skip algorithms with no data, so an absent
//! algorithm simply contributes no trace.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::algorithms::Algorithm;
use crate::artifacts::RewardRecord;

/// Default trailing moving-average window for the smoothed reward tab.
pub const SMOOTHING_WINDOW: usize = 50;

/// Smoothed per-episode mean reward for one algorithm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmoothedSeries {
    pub algorithm: Algorithm,
    /// Distinct episodes, ascending.
    pub episodes: Vec<u64>,
    /// Trailing moving average of the per-episode mean reward.
    pub values: Vec<f64>,
}

/// One melted estimation-error observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorSample {
    pub algorithm: Algorithm,
    pub value: f64,
}

/// Per-algorithm summary statistics over the raw reward observations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewardStats {
    pub algorithm: Algorithm,
    pub observations: usize,
    pub episodes: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Group rewards by algorithm and episode, average, then smooth.
///
/// For each algorithm the per-episode arithmetic mean is computed first;
/// the smoothed value at index `i` is the mean of the last up-to-`window`
/// episode means (fewer at the start, never an undefined value).
/// Algorithms without any observation are omitted.
pub fn smoothed_rewards(records: &[RewardRecord], window: usize) -> Vec<SmoothedSeries> {
    Algorithm::ALL
        .into_iter()
        .filter_map(|algorithm| {
            let mut by_episode: BTreeMap<u64, (f64, usize)> = BTreeMap::new();
            for record in records.iter().filter(|r| r.algorithm == algorithm) {
                let entry = by_episode.entry(record.episode).or_insert((0.0, 0));
                entry.0 += record.reward;
                entry.1 += 1;
            }
            if by_episode.is_empty() {
                return None;
            }

            let episodes: Vec<u64> = by_episode.keys().copied().collect();
            let means: Vec<f64> = by_episode
                .values()
                .map(|(sum, count)| sum / *count as f64)
                .collect();
            Some(SmoothedSeries {
                algorithm,
                episodes,
                values: rolling_mean(&means, window),
            })
        })
        .collect()
}

/// Trailing moving average over up to `window` samples.
///
/// The value at index `i` is the arithmetic mean of
/// `values[max(0, i + 1 - window)..=i]`, so the first `window - 1`
/// entries average over the shorter available prefix. A window of zero
/// is treated as one.
///
/// # Examples
///
/// ```
/// use cliffviz::aggregate::rolling_mean;
///
/// assert_eq!(rolling_mean(&[1.0, 2.0, 3.0], 2), vec![1.0, 1.5, 2.5]);
/// ```
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    values
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let count = (i + 1).min(window);
            let lo = i + 1 - count;
            values[lo..=i].iter().sum::<f64>() / count as f64
        })
        .collect()
}

/// Melt the per-algorithm error arrays into one long-form table.
///
/// Rows follow the canonical algorithm order; within an algorithm the
/// original sequence order is preserved. Empty series contribute nothing.
pub fn melt_errors(errors: &[(Algorithm, Vec<f64>)]) -> Vec<ErrorSample> {
    let mut samples = Vec::with_capacity(errors.iter().map(|(_, v)| v.len()).sum());
    for algorithm in Algorithm::ALL {
        if let Some((_, values)) = errors.iter().find(|(a, _)| *a == algorithm) {
            samples.extend(values.iter().map(|&value| ErrorSample { algorithm, value }));
        }
    }
    samples
}

/// Per-algorithm reward statistics, in canonical order.
///
/// Algorithms with no observations are omitted.
pub fn reward_stats(records: &[RewardRecord]) -> Vec<RewardStats> {
    Algorithm::ALL
        .into_iter()
        .filter_map(|algorithm| {
            let rewards: Vec<f64> = records
                .iter()
                .filter(|r| r.algorithm == algorithm)
                .map(|r| r.reward)
                .collect();
            if rewards.is_empty() {
                return None;
            }
            let episodes = records
                .iter()
                .filter(|r| r.algorithm == algorithm)
                .map(|r| r.episode)
                .collect::<std::collections::BTreeSet<_>>()
                .len();
            let sum: f64 = rewards.iter().sum();
            Some(RewardStats {
                algorithm,
                observations: rewards.len(),
                episodes,
                mean: sum / rewards.len() as f64,
                min: rewards.iter().copied().fold(f64::INFINITY, f64::min),
                max: rewards.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            })
        })
        .collect()
}
