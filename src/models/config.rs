use std::path::PathBuf;

/// Default directory generated files are written to
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Runtime configuration shared by all commands
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// Directory generated files are written to
    pub output_dir: PathBuf,
    /// Whether to run OpenSCAD to produce an STL
    pub render_stl: bool,
    /// Explicit OpenSCAD binary, overriding discovery
    pub openscad: Option<PathBuf>,
}

impl Config {
    /// Create a new configuration with default settings
    pub fn new(debug_mode: bool) -> Self {
        Self {
            debug_mode,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            render_stl: false,
            openscad: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(false)
    }
}
