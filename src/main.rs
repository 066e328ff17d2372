//! Main entry point for the bytediff CLI

use bytediff::cli::Cli;
use bytediff::compare::Comparator;
use bytediff::config::{ReportLimits, CONFIG_FILE_NAME};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn main() {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Set up verbose logging if requested
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    // Exit code 0 when everything matched, 1 when differences were found,
    // 2 on fatal errors.
    let exit_code = match run(&cli) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            eprintln!("Error: {}", e);
            2
        }
    };

    if cli.pause {
        pause();
    }

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> bytediff::Result<bool> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let limits = ReportLimits::load(&config_path)?;

    let stdout = io::stdout();
    let mut comparator = Comparator::new(&limits, stdout.lock());
    comparator.run(&cli.path1, &cli.path2)
}

fn pause() {
    print!("press enter to exit");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
