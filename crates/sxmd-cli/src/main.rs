use anyhow::{Context, Result};
use std::io::{Write, stdout};
use std::path::Path;
use std::{env, process};
use sxmd_config::Config;
use sxmd_engine::{InputSource, convert_bytes, io};

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        println!("{}", usage(args.first().map(String::as_str)));
        process::exit(1);
    }

    let source = InputSource::from_arg(&args[1]);
    if let Err(e) = run(&source) {
        log::debug!("conversion failed: {e:?}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Reads the whole input, converts it and writes the result to stdout.
fn run(source: &InputSource) -> Result<()> {
    log::info!("Reading {source}");
    let content =
        io::read_input(source).with_context(|| format!("Could not read input file {source}"))?;
    log::debug!("Read {} bytes", content.len());

    let converted = convert_bytes(&content);
    log::debug!("Writing {} bytes", converted.len());

    let mut out = stdout().lock();
    out.write_all(&converted)
        .and_then(|()| out.flush())
        .context("Could not write output")?;
    Ok(())
}

fn usage(program: Option<&str>) -> String {
    let program_name = program
        .and_then(|p| Path::new(p).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sxmd".to_string());
    format!("Usage: {program_name} <file-to-convert>\n\tSpecify '-' for standard input")
}

/// Logs go to stderr so stdout carries only the converted document.
/// The config file sets the default level; `RUST_LOG` overrides it.
fn init_logging() {
    let (level, problem) = match Config::load() {
        Ok(Some(config)) => match config.log_filter() {
            Ok(level) => (level, None),
            Err(e) => (Config::DEFAULT_LOG_LEVEL, Some(e.to_string())),
        },
        Ok(None) => (Config::DEFAULT_LOG_LEVEL, None),
        Err(e) => (Config::DEFAULT_LOG_LEVEL, Some(e.to_string())),
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Some(problem) = problem {
        log::warn!("{problem}; using defaults");
    }
    log::debug!("Config path: {}", Config::config_path().display());
}
