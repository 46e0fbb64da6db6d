use std::path::{Path, PathBuf};
use crate::error::{Error, Result};

/// Longest keychain text accepted
pub const MAX_TEXT_CHARS: usize = 50;

/// Everything needed to generate one keychain
#[derive(Debug, Clone, PartialEq)]
pub struct KeychainRequest {
    /// OpenSCAD template containing placeholders
    pub template_scad: PathBuf,
    /// Font file referenced by the template
    pub font_file: PathBuf,
    /// Text printed on the keychain
    pub text: String,
    /// OpenSCAD font identifier, e.g. "GG:style=Bartex-Regular"
    pub font_name: String,
    /// Name of the output files, without extension
    pub output_basename: String,
    /// Directory the output files are written to
    pub output_dir: PathBuf,
}

impl KeychainRequest {
    /// Path to the generated SCAD file
    pub fn output_scad(&self) -> PathBuf {
        self.output_dir.join(format!("{}.scad", self.output_basename))
    }

    /// Path to the generated STL file
    pub fn output_stl(&self) -> PathBuf {
        self.output_dir.join(format!("{}.stl", self.output_basename))
    }

    /// File name of the font as OpenSCAD sees it beside the SCAD file
    pub fn font_file_name(&self) -> String {
        self.font_file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Reject requests the generator cannot act on
    pub fn validate(&self) -> Result<()> {
        if self.text.is_empty() {
            return Err(Error::Config("Please enter text for the keychain".to_string()));
        }
        if self.text.chars().count() > MAX_TEXT_CHARS {
            return Err(Error::Config(format!(
                "Keychain text is limited to {} characters",
                MAX_TEXT_CHARS
            )));
        }
        if self.output_basename.trim().is_empty() {
            return Err(Error::Config("Please enter an output file name".to_string()));
        }
        if is_path_like(&self.output_basename) {
            return Err(Error::Config(format!(
                "Output file name must not contain a path: {}",
                self.output_basename
            )));
        }
        require_file(&self.template_scad)?;
        require_file(&self.font_file)?;
        Ok(())
    }
}

/// The basename is joined onto the output directory, so it must stay a single component
fn is_path_like(basename: &str) -> bool {
    basename.contains(['/', '\\']) || basename == "." || basename == ".."
}

fn require_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::InvalidPath(path.to_path_buf()))
    }
}
