//! Generate customized OpenSCAD keychains from a template and a font file.
//!
//! The interesting part lives in [`font`]: a dependency-free reader for the
//! sfnt `name` table that recovers a font's family name so it can be handed to
//! OpenSCAD as `Family:style=Style`.

pub mod cli;
pub mod error;
pub mod font;
pub mod models;
pub mod render;
pub mod utils;

pub use error::{Error, NameError, Result};
pub use font::{extract_family_name, suggest_font_name};
