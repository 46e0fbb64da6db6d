//! Font file reading: sfnt structures, family name extraction and suggestions

pub mod encoding;
pub mod name;
pub mod reader;
pub mod sfnt;
pub mod suggest;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use name::{extract_family_name, try_extract_family_name, NameRecord, NameTable};
pub use sfnt::{SfntHeader, Signature, TableRecord};
pub use suggest::{name_from_filename, suggest_font_name, suggest_font_name_from_path, FontIdentifier};
pub use validate::{is_valid_font_file, is_valid_font_data, has_font_extension};
