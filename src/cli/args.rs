use std::path::PathBuf;
use crate::error::{Error, Result};
use crate::models::Config;

/// Output basename used when `--output` is not given
pub const DEFAULT_BASENAME: &str = "keychain";

/// What the user asked the tool to do
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print suggested OpenSCAD identifiers for fonts or font directories
    Name { inputs: Vec<PathBuf> },
    /// Render a template into a SCAD file, optionally an STL
    Generate(GenerateArgs),
    /// Report whether OpenSCAD can be found
    Check,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateArgs {
    pub template: PathBuf,
    pub font: PathBuf,
    pub text: String,
    /// Explicit identifier; suggested from the font when absent
    pub font_name: Option<String>,
    pub output_basename: String,
}

/// Parse command line arguments (without the program name)
pub fn parse_args<I>(args: I) -> Result<(Config, Command)>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::new(false);
    let mut positional = Vec::new();
    let mut template = None;
    let mut font = None;
    let mut text = None;
    let mut font_name = None;
    let mut output_basename = None;
    let mut help = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => help = true,
            "--debug" => config.debug_mode = true,
            "--stl" => config.render_stl = true,
            "--template" => template = Some(PathBuf::from(value(&mut args, &arg)?)),
            "--font" => font = Some(PathBuf::from(value(&mut args, &arg)?)),
            "--text" => text = Some(value(&mut args, &arg)?),
            "--font-name" => font_name = Some(value(&mut args, &arg)?),
            "--output" => output_basename = Some(value(&mut args, &arg)?),
            "--out-dir" => config.output_dir = PathBuf::from(value(&mut args, &arg)?),
            "--openscad" => config.openscad = Some(PathBuf::from(value(&mut args, &arg)?)),
            flag if flag.starts_with("--") => {
                return Err(Error::Config(format!("Unknown option '{}'", flag)));
            }
            _ => positional.push(arg),
        }
    }

    if help {
        return Ok((config, Command::Help));
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        None => Command::Help,
        Some("name") => {
            let inputs: Vec<PathBuf> = positional.by_ref().map(PathBuf::from).collect();
            if inputs.is_empty() {
                return Err(Error::Config("'name' requires at least one font file or directory".to_string()));
            }
            Command::Name { inputs }
        }
        Some("generate") => Command::Generate(GenerateArgs {
            template: template.ok_or_else(|| missing("--template"))?,
            font: font.ok_or_else(|| missing("--font"))?,
            text: text.ok_or_else(|| missing("--text"))?,
            font_name,
            output_basename: output_basename.unwrap_or_else(|| DEFAULT_BASENAME.to_string()),
        }),
        Some("check") => Command::Check,
        Some(other) => return Err(Error::Config(format!("Unknown command '{}'", other))),
    };

    if let Some(extra) = positional.next() {
        return Err(Error::Config(format!("Unexpected argument '{}'", extra)));
    }

    Ok((config, command))
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| Error::Config(format!("{} option requires a value", flag)))
}

fn missing(flag: &str) -> Error {
    Error::Config(format!("'generate' requires {}", flag))
}

/// Get the help message for command-line usage
pub fn get_help_message() -> String {
    r#"Keychain Maker - Generate customized OpenSCAD keychains

USAGE:
    keychain-maker [OPTIONS] <COMMAND>

COMMANDS:
    name <FONT|DIR>...      Print the OpenSCAD font name suggested for each font
    generate                Render a template into a SCAD file (and optionally an STL)
    check                   Report whether the OpenSCAD CLI can be found

GENERATE OPTIONS:
    --template <FILE>       OpenSCAD template with {{TEXT}}, {{FONT_NAME}} and {{TTF_FILE}}
    --font <FILE>           Font file (.ttf or .otf) used for the text
    --text <TEXT>           Text to appear on the keychain (at most 50 characters)
    --font-name <NAME>      OpenSCAD font identifier, e.g. "GG:style=Bartex-Regular"
                            (suggested from the font file when omitted)
    --output <NAME>         Base name for generated files (default: keychain)
    --out-dir <DIR>         Directory for generated files (default: dist)
    --stl                   Also render an STL with the OpenSCAD CLI
    --openscad <PATH>       OpenSCAD binary to use (default: $OPENSCAD, then PATH)

OPTIONS:
    -h, --help              Show this help message
    --debug                 Enable debug output
"#
    .to_string()
}
