pub mod file;
pub mod naming;
pub mod logging;

pub use file::{ensure_directory_exists, copy_into_directory, find_font_files};
pub use naming::clean_name;
pub use logging::init_logging;
