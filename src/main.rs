use keyprops::{KeyOptions, DEFAULT_CLEF};
use std::env;
use std::process;

const USAGE: &str = "Usage: keyprops [--clef NAME] [--octave-shift N] [--duration D] [--options YAML] <note/octave[/glyph]>...";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    let mut clef = DEFAULT_CLEF.to_string();
    let mut options_yaml: Option<String> = None;
    let mut octave_shift: Option<i16> = None;
    let mut duration: Option<String> = None;
    let mut descriptors: Vec<&str> = Vec::new();

    // Parse flags
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--clef" | "--octave-shift" | "--duration" | "--options" => {
                let value = match iter.next() {
                    Some(value) => value,
                    None => {
                        eprintln!("Missing value for {}", arg);
                        eprintln!("{}", USAGE);
                        process::exit(1);
                    }
                };
                match arg.as_str() {
                    "--clef" => clef = value.clone(),
                    "--duration" => duration = Some(value.clone()),
                    "--options" => options_yaml = Some(value.clone()),
                    _ => match value.parse::<i16>() {
                        Ok(shift) => octave_shift = Some(shift),
                        Err(_) => {
                            eprintln!("Octave shift must be an integer: {}", value);
                            process::exit(1);
                        }
                    },
                }
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            }
            _ => descriptors.push(arg.as_str()),
        }
    }

    if descriptors.is_empty() {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    // Flags override values from --options
    let mut options = match options_yaml.as_deref().map(KeyOptions::from_yaml).transpose() {
        Ok(options) => options.unwrap_or_default(),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    if let Some(shift) = octave_shift {
        options.octave_shift = shift;
    }
    if let Some(duration) = duration {
        options.duration = duration;
    }

    let resolved = match keyprops::key_properties_all(descriptors, &clef, &options) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Resolution error: {}", e);
            process::exit(1);
        }
    };

    match serde_yaml::to_string(&resolved) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => {
            eprintln!("Error writing output: {}", e);
            process::exit(1);
        }
    }
}
