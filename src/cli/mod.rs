//! Command-line interface handling

mod args;

pub use args::{parse_args, get_help_message, Command, GenerateArgs, DEFAULT_BASENAME};
