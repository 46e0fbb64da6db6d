use std::fs;
use std::path::{Path, PathBuf};
use log::debug;
use crate::error::Result;
use crate::font::is_valid_font_file;

/// Create a directory if it doesn't exist
pub fn ensure_directory_exists(dir: &Path) -> Result<()> {
    if !dir.exists() {
        debug!("Directory {} does not exist. Creating it now.", dir.display());
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Copy a file into `dest_dir`, keeping its name.
///
/// Nothing is copied when the destination already is the source file.
pub fn copy_into_directory(src: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let file_name = src.file_name().unwrap_or_default();
    let dest = dest_dir.join(file_name);

    if is_same_file(src, &dest) {
        debug!("{} is already in {}", src.display(), dest_dir.display());
        return Ok(dest);
    }

    debug!("Copying {} to {}", src.display(), dest.display());
    fs::copy(src, &dest)?;
    Ok(dest)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Recursively collect valid font files below a directory
pub fn find_font_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut font_files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                debug!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        if path.is_file() && is_valid_font_file(&path) {
            font_files.push(path);
        } else if path.is_dir() {
            font_files.append(&mut find_font_files(&path)?);
        }
    }

    font_files.sort();
    Ok(font_files)
}
