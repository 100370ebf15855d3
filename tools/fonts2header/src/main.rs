use fontheader::{run, ConverterConfig};
use std::error::Error;
use std::path::PathBuf;

const USAGE: &str = "[--input <DIR>] [--output <FILE>] [--include <HEADER>] \
                     [--no-filter] [--no-duplicate-last-row] [--collisions allow|warn|error]";

fn take_value(args: &[String], i: usize, flag: &str) -> Result<String, String> {
    args.get(i + 1)
        .cloned()
        .ok_or_else(|| format!("Expected argument after {flag}"))
}

/// Map command line flags onto a config; unset flags keep the defaults
/// (`fonts/` to `src/assets.h`).
fn parse_args(args: &[String]) -> Result<ConverterConfig, String> {
    let mut config = ConverterConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                config.input_dir = PathBuf::from(take_value(args, i, "--input")?);
                i += 2;
            }
            "--output" => {
                config.output_path = PathBuf::from(take_value(args, i, "--output")?);
                i += 2;
            }
            "--include" => {
                config.emit.include_header = take_value(args, i, "--include")?;
                i += 2;
            }
            "--collisions" => {
                config.collisions = take_value(args, i, "--collisions")?.parse()?;
                i += 2;
            }
            "--no-filter" => {
                config.filter_extensions = false;
                i += 1;
            }
            "--no-duplicate-last-row" => {
                config.emit.duplicate_last_row = false;
                i += 1;
            }
            other => return Err(format!("Unknown argument: {other}")),
        }
    }

    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("fonts2header");

    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}\nUsage: {program} {USAGE}");
            std::process::exit(1);
        }
    };

    match run(&config) {
        Ok(report) => {
            for font in &report.fonts {
                println!(
                    "{} -> FONT_{} ({}x{})",
                    font.file_name, font.name, font.width, font.height
                );
            }
            for name in &report.collisions {
                eprintln!("Warning: identifier '{name}' is declared more than once");
            }
            println!(
                "Header '{}' created with {} font(s).",
                config.output_path.display(),
                report.fonts.len()
            );
        }
        Err(e) => {
            eprintln!("Error converting fonts: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}
