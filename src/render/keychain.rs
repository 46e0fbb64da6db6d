use std::path::PathBuf;
use log::info;
use crate::error::Result;
use crate::models::{Config, KeychainRequest};
use super::openscad::render_stl_with_config;
use super::template::{load_and_render, write_scad_and_font};

/// Files produced for one keychain
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedKeychain {
    pub scad: PathBuf,
    pub stl: Option<PathBuf>,
    /// Rendered SCAD source
    pub source: String,
}

/// Render the template, write it with its font and, if configured, an STL.
///
/// The SCAD file is already on disk when STL rendering fails.
pub fn generate_keychain(req: &KeychainRequest, config: &Config) -> Result<GeneratedKeychain> {
    req.validate()?;

    let source = load_and_render(req)?;
    write_scad_and_font(req, &source)?;
    info!("SCAD file written to {}", req.output_scad().display());

    let stl = if config.render_stl {
        render_stl_with_config(req, config)?;
        Some(req.output_stl())
    } else {
        None
    };

    Ok(GeneratedKeychain {
        scad: req.output_scad(),
        stl,
        source,
    })
}
