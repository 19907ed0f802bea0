//! Greedy-episode media gallery resolution.
//!
//! Animations are optional artifacts: each algorithm has a fixed expected
//! file name, and the gallery checks for each file independently at
//! render time. A missing animation becomes an inline warning in the
//! gallery; it never fails the render or hides the other entries.

use std::path::{Path, PathBuf};

use crate::algorithms::Algorithm;

/// One gallery entry, resolved at render time and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAsset {
    pub algorithm: Algorithm,
    pub filename: &'static str,
    pub path: PathBuf,
    pub exists: bool,
}

/// Resolve the gallery entries for `data_dir`, in canonical order.
///
/// Existence is re-checked on every call; one missing file does not
/// affect the other entries.
pub fn resolve_gallery(data_dir: &Path) -> Vec<MediaAsset> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let filename = algorithm.media_filename();
            let path = data_dir.join(filename);
            let exists = path.is_file();
            MediaAsset {
                algorithm,
                filename,
                path,
                exists,
            }
        })
        .collect()
}
