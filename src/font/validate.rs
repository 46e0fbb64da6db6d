use std::fs;
use std::path::Path;
use log::debug;
use ttf_parser::Face;
use super::sfnt::has_font_signature;

/// Extensions accepted as font files
pub const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

pub fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| FONT_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

/// Check if a file is a font file the keychain maker can use
pub fn is_valid_font_file(path: &Path) -> bool {
    if !has_font_extension(path) {
        return false;
    }

    let valid = match fs::read(path) {
        Ok(data) => is_valid_font_data(&data),
        Err(e) => {
            debug!("Could not read {}: {}", path.display(), e);
            false
        }
    };

    if valid {
        debug!("Valid font file: {}", path.display());
    } else {
        debug!("Invalid font file: {}", path.display());
    }
    valid
}

/// Check an in-memory font: known sfnt magic and a successful `ttf-parser` parse
pub fn is_valid_font_data(data: &[u8]) -> bool {
    if !has_font_signature(data) {
        return false;
    }

    match Face::parse(data, 0) {
        Ok(_) => true,
        Err(e) => {
            debug!("Font failed to parse: {}", e);
            false
        }
    }
}
