use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the keychain maker
#[derive(Debug)]
pub enum Error {
    /// IO operations errors
    Io(io::Error),
    /// Invalid file or directory path
    InvalidPath(PathBuf),
    /// Configuration or request errors
    Config(String),
    /// STL output was requested but no OpenSCAD binary was found
    OpenScadNotFound,
    /// OpenSCAD ran but reported a failure
    Render(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::InvalidPath(path) => write!(f, "Invalid path: {}", path.display()),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::OpenScadNotFound => write!(
                f,
                "OpenSCAD CLI not found. Install OpenSCAD and ensure it is on your PATH, or set OPENSCAD"
            ),
            Error::Render(stderr) => write!(f, "STL rendering failed: {}", stderr.trim()),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Result type alias for keychain maker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why no name could be read from a font buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    /// The first four bytes are not a known sfnt signature
    UnrecognizedFormat,
    /// The table directory has no `name` entry
    MissingTable,
    /// A structure extends past the end of the buffer
    Truncated(NameErrorSource),
    /// The `name` table holds no usable family or full name
    NoCandidate,
}

/// Where a truncated read happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameErrorSource {
    SfntHeader,
    TableDirectory,
    NameTable,
    NameRecord,
}

impl std::error::Error for NameError {}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::UnrecognizedFormat => write!(f, "not a TrueType/OpenType font"),
            NameError::MissingTable => write!(f, "font has no name table"),
            NameError::Truncated(source) => write!(f, "font data truncated in {:?}", source),
            NameError::NoCandidate => write!(f, "no English family or full name record"),
        }
    }
}
