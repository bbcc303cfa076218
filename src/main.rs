use anyhow::{bail, Result};
use log::info;
use std::path::PathBuf;

use line_utils::{config, count_file_lines, LineReport};

const USAGE: &str = "Usage: line-utils <FILE>... [--header | --no-header] [--json]";

struct Options {
    files: Vec<PathBuf>,
    has_header: bool,
    json: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Options> {
    let mut options = Options {
        files: Vec::new(),
        has_header: config::has_header_from_env(),
        json: false,
    };

    let mut only_files = false;
    for arg in args {
        if only_files {
            options.files.push(PathBuf::from(arg));
            continue;
        }
        match arg.as_str() {
            "--" => only_files = true,
            "--header" => options.has_header = true,
            "--no-header" => options.has_header = false,
            "--json" => options.json = true,
            // A bare `-` is a file name.
            flag if flag.starts_with('-') && flag != "-" => {
                bail!("Unknown option: {}\n{}", flag, USAGE)
            }
            _ => options.files.push(PathBuf::from(arg)),
        }
    }

    if options.files.is_empty() {
        bail!("No input files given\n{}", USAGE);
    }

    Ok(options)
}

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config::DEFAULT_LOG_FILTER),
    )
    .init();

    let options = parse_args(std::env::args().skip(1))?;
    info!(
        "Counting {} file(s), header: {}",
        options.files.len(),
        options.has_header
    );

    for path in &options.files {
        let raw = count_file_lines(path)?;
        let report = LineReport::new(path.display().to_string(), raw, options.has_header);

        if options.json {
            println!("{}", report.to_json()?);
        } else {
            println!("{}", report);
        }
    }

    Ok(())
}
