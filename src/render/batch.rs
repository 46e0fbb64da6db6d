use std::path::{Path, PathBuf};
use log::debug;
use rayon::prelude::*;
use crate::error::{Error, Result};
use crate::font::suggest_font_name_from_path;
use crate::utils::find_font_files;

/// Expand directories into the font files below them; files pass through
pub fn collect_font_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let found = find_font_files(input)?;
            debug!("Found {} fonts in {}", found.len(), input.display());
            paths.extend(found);
        } else if input.is_file() {
            paths.push(input.clone());
        } else {
            return Err(Error::InvalidPath(input.clone()));
        }
    }

    Ok(paths)
}

/// Suggest font identifiers for many files in parallel, keeping input order
pub fn suggest_many(paths: &[PathBuf]) -> Vec<(PathBuf, Result<String>)> {
    paths
        .par_iter()
        .map(|path| (path.clone(), suggest_font_name_from_path(path)))
        .collect()
}

/// Format one result line as printed by the `name` command
pub fn format_suggestion(path: &Path, result: &Result<String>) -> String {
    match result {
        Ok(name) => format!("{}\t{}", path.display(), name),
        Err(e) => format!("{}\terror: {}", path.display(), e),
    }
}
