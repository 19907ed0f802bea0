//! Common test utilities for the cliffviz test suite.
//!
//! Fixture builders that materialize a complete artifact directory the
//! way the training pipeline would: a rewards spreadsheet, six NPY error
//! arrays, and optional GIF animations.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use cliffviz::Algorithm;
use rust_xlsxwriter::Workbook;

/// The three algorithms the standard fixture has reward data for.
pub const REWARD_ALGORITHMS: [Algorithm; 3] =
    [Algorithm::Td0, Algorithm::Sarsa, Algorithm::QLearning];

/// Serialize a 1-D f64 array in `.npy` format, as `numpy.save` would.
pub fn write_npy(path: &Path, values: &[f64]) {
    let mut header = format!(
        "{{'descr': '<f8', 'fortran_order': False, 'shape': ({},), }}",
        values.len()
    );
    while (10 + header.len() + 1) % 64 != 0 {
        header.push(' ');
    }
    header.push('\n');

    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"\x93NUMPY\x01\x00");
    bytes.extend_from_slice(&(header.len() as u16).to_le_bytes());
    bytes.extend_from_slice(header.as_bytes());
    for value in values {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    fs::write(path, bytes).unwrap();
}

/// Write a rewards spreadsheet with the standard three columns.
pub fn write_rewards_xlsx(path: &Path, rows: &[(&str, u64, f64)]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "algoritmo").unwrap();
    sheet.write_string(0, 1, "episodio").unwrap();
    sheet.write_string(0, 2, "recompensa").unwrap();
    for (index, (label, episode, reward)) in rows.iter().enumerate() {
        let row = (index + 1) as u32;
        sheet.write_string(row, 0, *label).unwrap();
        sheet.write_number(row, 1, *episode as f64).unwrap();
        sheet.write_number(row, 2, *reward).unwrap();
    }
    workbook.save(path).unwrap();
}

/// A few bytes that pass for an animation; only existence matters.
pub fn write_gif(path: &Path) {
    fs::write(path, b"GIF89a cliffviz fixture").unwrap();
}

/// The deterministic error value at `index` for `algorithm`.
pub fn error_value(algorithm_index: usize, index: usize) -> f64 {
    algorithm_index as f64 + index as f64 * 0.01
}

/// Populate `dir` with a complete required-artifact set: rewards for
/// three algorithms over `episodes` episodes (one observation each) and
/// six error arrays of `samples` values.
pub fn write_fixture(dir: &Path, episodes: u64, samples: usize) {
    fs::create_dir_all(dir).unwrap();

    let mut rows = Vec::new();
    for algorithm in REWARD_ALGORITHMS {
        for episode in 0..episodes {
            rows.push((algorithm.label(), episode, -(episode as f64)));
        }
    }
    write_rewards_xlsx(&dir.join("Recompensas_Total.xlsx"), &rows);

    for (algorithm_index, algorithm) in Algorithm::ALL.into_iter().enumerate() {
        let values: Vec<f64> = (0..samples)
            .map(|i| error_value(algorithm_index, i))
            .collect();
        write_npy(&dir.join(algorithm.error_artifact()), &values);
    }
}
