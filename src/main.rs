//! Command-line interface for hexscan
//!
//! Prints the hex colors found in a file as CSS custom properties (or JSON),
//! grouped into shades and hue categories.

use hexscan::{render, scan_file, OutputFormat, ScanConfig};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};
use tracing::{debug, Level};

struct Args {
    file: PathBuf,
    config: Option<PathBuf>,
    json: bool,
    verbose: bool,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("hexscan", String::as_str);

    let parsed = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Use --help for usage information");
            process::exit(1);
        }
    };
    let Some(parsed) = parsed else {
        print_help(program);
        process::exit(0);
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if parsed.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let mut config = match &parsed.config {
        Some(path) => ScanConfig::from_json_file(path).unwrap_or_else(|error| fail(&error)),
        None => ScanConfig::default(),
    };
    if parsed.json {
        config.output = OutputFormat::Json;
    }
    debug!(?config, file = %parsed.file.display(), "starting scan");

    run(&parsed.file, &config);
}

fn run(file: &Path, config: &ScanConfig) {
    let partition = scan_file(file, config).unwrap_or_else(|error| fail(&error));

    if partition.is_empty() {
        println!("No hex color codes found in the file.");
        return;
    }

    match config.output {
        OutputFormat::Css => print!("{}", render::css(&partition)),
        OutputFormat::Json => match render::json(&partition) {
            Ok(json) => println!("{}", json),
            Err(error) => fail(&error),
        },
    }
}

/// Parse arguments; `Ok(None)` means help was requested
fn parse_args(args: &[String]) -> Result<Option<Args>, String> {
    let mut file = None;
    let mut config = None;
    let mut json = false;
    let mut verbose = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(None),
            "--json" => json = true,
            "--verbose" | "-v" => verbose = true,
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| "--config requires a file path".to_string())?;
                config = Some(PathBuf::from(path));
            }
            arg if arg.starts_with('-') && arg != "-" => {
                return Err(format!("Unknown option: {}", arg));
            }
            arg => {
                if file.is_some() {
                    return Err("Multiple file paths provided".to_string());
                }
                file = Some(PathBuf::from(arg));
            }
        }
    }

    let file = file.ok_or_else(|| "No file path provided".to_string())?;
    Ok(Some(Args {
        file,
        config,
        json,
        verbose,
    }))
}

fn fail(error: &hexscan::ScanError) -> ! {
    eprintln!("Error: {}", error);
    debug!(suggestion = %error.user_message(), "scan failed");
    process::exit(1);
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <file>", program_name);
    eprintln!();
    eprintln!("Extract, sort, and categorize hex colors from a file.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json           Print a JSON report instead of CSS custom properties");
    eprintln!("  --config FILE    Load settings from a JSON configuration file");
    eprintln!("  --verbose, -v    Log classification details to stderr");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Configuration keys (all optional):");
    eprintln!("  short_alpha      \"expand\" (default) or \"passthrough\" for #rgba tokens");
    eprintln!("  rebalance        true (default) or false");
    eprintln!("  output           \"css\" (default) or \"json\"");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} styles.css", program_name);
    eprintln!("  {} --json theme.html", program_name);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_file_and_flags() {
        let parsed = parse_args(&args(&["--json", "-v", "styles.css"]))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.file, PathBuf::from("styles.css"));
        assert!(parsed.json);
        assert!(parsed.verbose);
        assert!(parsed.config.is_none());
    }

    #[test]
    fn test_parse_config() {
        let parsed = parse_args(&args(&["--config", "hexscan.json", "a.css"]))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("hexscan.json")));
        assert!(parse_args(&args(&["a.css", "--config"])).is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["a.css", "b.css"])).is_err());
        assert!(parse_args(&args(&["--bogus", "a.css"])).is_err());
    }

    #[test]
    fn test_help() {
        assert!(parse_args(&args(&["a.css", "--help"])).unwrap().is_none());
    }
}
