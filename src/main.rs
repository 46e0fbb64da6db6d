use std::env;
use std::error::Error;
use log::{debug, info, warn};
use keychain_maker::cli::{get_help_message, parse_args, Command, GenerateArgs};
use keychain_maker::font::{is_valid_font_file, suggest_font_name_from_path};
use keychain_maker::models::{Config, KeychainRequest};
use keychain_maker::render::{collect_font_paths, find_openscad, format_suggestion, generate_keychain, suggest_many};
use keychain_maker::utils::{clean_name, init_logging};

fn main() -> Result<(), Box<dyn Error>> {
    let (config, command) = match parse_args(env::args().skip(1)) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run with --help for usage.");
            return Err(Box::new(e));
        }
    };

    init_logging(&config);
    debug!("Configuration: {:?}", config);

    match command {
        Command::Help => println!("{}", get_help_message()),
        Command::Check => check(&config),
        Command::Name { inputs } => name(&inputs)?,
        Command::Generate(args) => generate(&config, args)?,
    }

    Ok(())
}

fn check(config: &Config) {
    match find_openscad(config) {
        Some(path) => println!("OpenSCAD CLI detected: {}", path.display()),
        None => {
            println!("OpenSCAD CLI not found. STL rendering will be disabled.");
            println!("Install OpenSCAD from https://openscad.org/downloads.html");
        }
    }
}

fn name(inputs: &[std::path::PathBuf]) -> Result<(), Box<dyn Error>> {
    let paths = collect_font_paths(inputs)?;
    if paths.is_empty() {
        warn!("No font files found");
        return Ok(());
    }

    for (path, result) in suggest_many(&paths) {
        println!("{}", format_suggestion(&path, &result));
    }
    Ok(())
}

fn generate(config: &Config, args: GenerateArgs) -> Result<(), Box<dyn Error>> {
    let mut req = KeychainRequest {
        template_scad: args.template,
        font_file: args.font,
        text: args.text,
        font_name: args.font_name.unwrap_or_default(),
        output_basename: args.output_basename,
        output_dir: config.output_dir.clone(),
    };
    if !req.output_basename.trim().is_empty() {
        req.output_basename = clean_name(&req.output_basename);
    }
    req.validate()?;

    if !is_valid_font_file(&req.font_file) {
        warn!("{} does not look like a usable TTF/OTF font", req.font_file.display());
    }

    if req.font_name.is_empty() {
        req.font_name = suggest_font_name_from_path(&req.font_file)?;
        info!("Using suggested font name {}", req.font_name);
    }

    let generated = generate_keychain(&req, config)?;

    println!("SCAD: {}", generated.scad.display());
    if let Some(stl) = generated.stl {
        println!("STL:  {}", stl.display());
    }
    Ok(())
}
