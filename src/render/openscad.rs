use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;
use log::{debug, info};
use crate::error::{Error, Result};
use crate::models::{Config, KeychainRequest};

/// Environment variable naming an OpenSCAD binary
pub const OPENSCAD_ENV: &str = "OPENSCAD";

#[cfg(windows)]
const OPENSCAD_BINARY: &str = "openscad.exe";
#[cfg(not(windows))]
const OPENSCAD_BINARY: &str = "openscad";

/// Locate the OpenSCAD CLI: explicit config, then `$OPENSCAD`, then `PATH`
pub fn find_openscad(config: &Config) -> Option<PathBuf> {
    if let Some(path) = &config.openscad {
        return Some(path.clone());
    }

    if let Some(path) = env::var_os(OPENSCAD_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(path));
    }

    search_path(env::var_os("PATH")?.as_os_str(), OPENSCAD_BINARY)
}

/// Find `binary` in a `PATH`-style list of directories
pub fn search_path(path_var: &OsStr, binary: &str) -> Option<PathBuf> {
    env::split_paths(path_var)
        .map(|dir| dir.join(binary))
        .find(|candidate| candidate.is_file())
}

/// Build the command that renders the request's SCAD file into an STL
pub fn render_command(openscad: &Path, req: &KeychainRequest) -> Command {
    let mut cmd = Command::new(openscad);
    cmd.arg("-o").arg(req.output_stl()).arg(req.output_scad());
    cmd
}

/// Run OpenSCAD on the generated SCAD file
pub fn render_stl(req: &KeychainRequest, openscad: &Path) -> Result<()> {
    let mut cmd = render_command(openscad, req);
    debug!("Running {:?}", cmd);

    let output = cmd.output()?;
    if !output.status.success() {
        return Err(Error::Render(String::from_utf8_lossy(&output.stderr).into_owned()));
    }

    info!("STL written to {}", req.output_stl().display());
    Ok(())
}

/// Render an STL with whichever OpenSCAD `config` resolves to
pub fn render_stl_with_config(req: &KeychainRequest, config: &Config) -> Result<()> {
    let openscad = find_openscad(config).ok_or(Error::OpenScadNotFound)?;
    render_stl(req, &openscad)
}
