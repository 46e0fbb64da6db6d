use std::fmt;
use std::fs;
use std::path::Path;
use log::debug;
use regex::Regex;
use lazy_static::lazy_static;
use crate::error::Result;
use super::name::extract_family_name;

/// Separator OpenSCAD uses between a family and its style
pub const STYLE_SEPARATOR: &str = ":style=";
pub const DEFAULT_STYLE: &str = "Regular";

lazy_static! {
    static ref STYLE_SUFFIX: Regex =
        Regex::new(r"^(?s)(?P<base>.*) (?P<style>Regular|Bold|Italic|Light|Medium)$").unwrap();
}

/// An OpenSCAD font identifier, `Family:style=Style`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontIdentifier {
    pub family: String,
    pub style: String,
}

impl FontIdentifier {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }

    /// Split `Family:style=Style`; a name without a style gets `Regular`
    pub fn parse(name: &str) -> Self {
        match name.split_once(STYLE_SEPARATOR) {
            Some((family, style)) => Self::new(family, style),
            None => Self::new(name, DEFAULT_STYLE),
        }
    }
}

impl fmt::Display for FontIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.family, STYLE_SEPARATOR, self.style)
    }
}

/// Suggest an OpenSCAD font identifier for a font file.
///
/// Uses the family name stored in the font when there is one, otherwise a
/// guess derived from `filename`.
pub fn suggest_font_name(data: &[u8], filename: &str) -> String {
    match extract_family_name(data) {
        Some(name) if name.contains(STYLE_SEPARATOR) => name,
        Some(name) => FontIdentifier::new(name, DEFAULT_STYLE).to_string(),
        None => {
            debug!("Falling back to file name for {}", filename);
            name_from_filename(filename).to_string()
        }
    }
}

/// Read a font from disk and suggest an identifier for it
pub fn suggest_font_name_from_path(path: &Path) -> Result<String> {
    let data = fs::read(path)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(suggest_font_name(&data, &filename))
}

/// Guess an identifier from a file name like `My-Font_Bold.ttf`
pub fn name_from_filename(filename: &str) -> FontIdentifier {
    let stem = Path::new(filename)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let cleaned = stem.replace(['-', '_'], " ");

    match STYLE_SUFFIX.captures(&cleaned) {
        Some(captures) => FontIdentifier::new(&captures["base"], &captures["style"]),
        None => FontIdentifier::new(cleaned, DEFAULT_STYLE),
    }
}
