//! Tests for command line parsing

#![allow(clippy::expect_used)]

use crate::cli::{Cli, Format};
use clap::Parser;
use driftguard_core::OutputFormat;
use rstest::rstest;
use std::path::{Path, PathBuf};

#[test]
fn test_defaults_to_verify_with_default_baseline() {
    let cli = Cli::try_parse_from(["driftguard", "/srv/data"]).expect("Parse failed");

    assert_eq!(cli.directory, PathBuf::from("/srv/data"));
    assert!(!cli.create);
    assert_eq!(cli.baseline_file, PathBuf::from("baseline.txt"));
    assert_eq!(cli.format, Format::Text);
    assert!(!cli.verbose);
}

#[test]
fn test_create_flag() {
    let cli = Cli::try_parse_from(["driftguard", "/srv/data", "--create"]).expect("Parse failed");

    assert!(cli.create);
}

#[rstest]
#[case::underscore("--baseline_file")]
#[case::hyphen("--baseline-file")]
fn test_baseline_file_option(#[case] flag: &str) {
    let cli = Cli::try_parse_from(["driftguard", "/srv/data", flag, "/var/lib/hashes.txt"])
        .expect("Parse failed");

    assert_eq!(cli.baseline_file, PathBuf::from("/var/lib/hashes.txt"));
}

#[test]
fn test_json_format_and_verbose() {
    let cli = Cli::try_parse_from(["driftguard", "-v", "--format", "json", "/srv/data"])
        .expect("Parse failed");

    assert_eq!(cli.format, Format::Json);
    assert_eq!(OutputFormat::from(cli.format), OutputFormat::Json);
    assert!(cli.verbose);
}

#[test]
fn test_directory_is_required() {
    assert!(Cli::try_parse_from(["driftguard"]).is_err());
}

#[test]
fn test_unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["driftguard", "/srv/data", "--format", "xml"]).is_err());
}

#[test]
fn test_audit_config_from_args() {
    let cli = Cli::try_parse_from(["driftguard", "/srv/data", "--baseline_file", "h.txt"])
        .expect("Parse failed");

    let config = cli.audit_config();

    assert_eq!(config.root(), Path::new("/srv/data"));
    assert_eq!(config.baseline_file(), Path::new("h.txt"));
}

#[test]
fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;

    Cli::command().debug_assert();
}
