use std::fs;
use log::{debug, warn};
use regex::Regex;
use lazy_static::lazy_static;
use crate::error::Result;
use crate::models::KeychainRequest;
use crate::utils::{copy_into_directory, ensure_directory_exists};

pub const PLACE_TEXT: &str = "{{TEXT}}";
pub const PLACE_FONT_NAME: &str = "{{FONT_NAME}}";
pub const PLACE_TTF: &str = "{{TTF_FILE}}";

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{[A-Z][A-Z0-9_]*\}\}").unwrap();
}

/// Substitute the request values into a SCAD template
pub fn render_template(template: &str, req: &KeychainRequest) -> String {
    template
        .replace(PLACE_TEXT, &req.text)
        .replace(PLACE_FONT_NAME, &req.font_name)
        .replace(PLACE_TTF, &req.font_file_name())
}

/// Placeholder-looking tokens still present after rendering, in order of appearance
pub fn unknown_placeholders(rendered: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for token in PLACEHOLDER.find_iter(rendered) {
        if !found.iter().any(|seen| seen == token.as_str()) {
            found.push(token.as_str().to_string());
        }
    }
    found
}

/// Read the request's template from disk and render it
pub fn load_and_render(req: &KeychainRequest) -> Result<String> {
    let template = fs::read_to_string(&req.template_scad)?;
    let rendered = render_template(&template, req);

    for token in unknown_placeholders(&rendered) {
        warn!("Template {} contains unknown placeholder {}", req.template_scad.display(), token);
    }

    Ok(rendered)
}

/// Write the rendered SCAD file and place the font beside it
pub fn write_scad_and_font(req: &KeychainRequest, rendered_scad: &str) -> Result<()> {
    let out_scad = req.output_scad();
    let out_dir = out_scad.parent().unwrap_or(req.output_dir.as_path());
    ensure_directory_exists(out_dir)?;

    debug!("Writing {}", out_scad.display());
    fs::write(&out_scad, rendered_scad)?;

    copy_into_directory(&req.font_file, out_dir)?;
    Ok(())
}
