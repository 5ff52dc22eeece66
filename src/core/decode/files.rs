//! Expansion of CLI path arguments into scannable image files.

use crate::error::DecodeError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "bmp", "tiff", "tif"];

/// Check whether a path looks like a supported image file
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Result of expanding path arguments
#[derive(Debug, Default)]
pub struct PathExpansion {
    /// Image files to scan, in discovery order
    pub images: Vec<PathBuf>,
    /// Non-fatal problems encountered along the way
    pub errors: Vec<DecodeError>,
}

/// Expand files and directories into a flat list of image paths.
///
/// Files are taken as-is when their extension is supported; directories
/// are walked recursively, skipping hidden entries. Missing paths are
/// recorded as errors but do not abort the expansion.
pub fn expand_paths(paths: &[PathBuf]) -> PathExpansion {
    let mut expansion = PathExpansion::default();

    for path in paths {
        if !path.exists() {
            expansion.errors.push(DecodeError::ImageNotFound {
                path: path.clone(),
            });
            continue;
        }

        if path.is_file() {
            // Explicit files are scanned even with an odd extension;
            // the decoder will report unreadable formats itself
            expansion.images.push(path.clone());
            continue;
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
            let entry_path = entry.path();

            if is_hidden(entry_path) && entry_path != path.as_path() {
                continue;
            }

            if entry_path.is_file() && is_supported_image(entry_path) {
                found.push(entry_path.to_path_buf());
            }
        }

        // Stable order so repeated runs scan in the same sequence
        found.sort();
        expansion.images.extend(found);
    }

    expansion
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}
