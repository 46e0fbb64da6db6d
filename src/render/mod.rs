//! Keychain generation: template substitution, OpenSCAD invocation and batch naming

pub mod batch;
pub mod keychain;
pub mod openscad;
pub mod template;

pub use batch::{collect_font_paths, format_suggestion, suggest_many};
pub use keychain::{generate_keychain, GeneratedKeychain};
pub use openscad::{find_openscad, render_stl, render_stl_with_config};
pub use template::{load_and_render, render_template, unknown_placeholders, write_scad_and_font};
