//! Unit tests for CLI argument parsing and validation

use bytediff::cli::Cli;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_cli_requires_both_paths() {
    assert!(Cli::try_parse_from(["bytediff"]).is_err());
    assert!(Cli::try_parse_from(["bytediff", "one"]).is_err());
    assert!(Cli::try_parse_from(["bytediff", "one", "two"]).is_ok());
}

#[test]
fn test_cli_rejects_extra_positional_arguments() {
    assert!(Cli::try_parse_from(["bytediff", "one", "two", "three"]).is_err());
}

#[test]
fn test_cli_default_flags() {
    let cli = Cli::try_parse_from(["bytediff", "a", "b"]).unwrap();
    assert!(cli.config.is_none());
    assert!(!cli.pause);
    assert!(!cli.verbose);
}

#[test]
fn test_cli_config_override() {
    let cli = Cli::try_parse_from(["bytediff", "a", "b", "--config", "custom.cfg"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("custom.cfg")));
}

#[test]
fn test_cli_verbose_short_flag() {
    let cli = Cli::try_parse_from(["bytediff", "a", "b", "-v"]).unwrap();
    assert!(cli.verbose);
}

#[test]
fn test_cli_pause_flag() {
    let cli = Cli::try_parse_from(["bytediff", "a", "b", "--pause"]).unwrap();
    assert!(cli.pause);
}
