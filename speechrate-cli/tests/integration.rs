//! Integration tests for srate CLI.

use clap::Parser;
use speechrate_cli::cli::{Cli, run};
use speechrate_cli::rate::{Config, Status, report};
use speechrate_cli::words::read_words;
use std::path::PathBuf;

const WORDS: &str = "\
signal s0101a
type 0
color 121
#
    0.000000  122 {B_TRANS}
    0.400000  122 <SIL>; U; U; null
    0.700000  122 so; s ow; s ow; RB
    0.900000  122 i; ay; ay; PRP
    1.100000  122 was; w ah z; w ah z; VBD
    1.400000  122 thinking; th ih ng k ih ng; th ih ng k ih n; VBG
    2.000000  122 <SIL>; U; U; null
    2.500000  122 yeah; y eh; y eh; UH
    2.600000  122 {E_TRANS}
";

fn write_transcript(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("speechrate-cli-test");
    std::fs::create_dir_all(&dir).expect("failed to create temp dir");
    let path = dir.join(name);
    std::fs::write(&path, WORDS).expect("failed to write transcript");
    path
}

fn path_arg(path: &PathBuf) -> &str {
    path.to_str().expect("temp path should be utf-8")
}

#[test]
fn rate_command_runs() {
    let path = write_transcript("runs.words");

    let cli = Cli::parse_from(["srate", "rate", path_arg(&path), "--span", "2"]);

    run(cli).expect("failed to compute rates");
}

#[test]
fn rate_command_rejects_negative_span() {
    let path = write_transcript("negative.words");

    let cli = Cli::parse_from(["srate", "rate", path_arg(&path), "--span", "-1"]);

    let err = run(cli).unwrap_err();
    assert!(format!("{err:?}").contains("invalid span: -1"), "{err:?}");
}

#[test]
fn rate_command_rejects_missing_file() {
    let cli = Cli::parse_from(["srate", "rate", "/nonexistent/s01.words"]);

    assert!(run(cli).is_err());
}

#[test]
fn reports_rates_from_transcript() {
    let path = write_transcript("report.words");
    let tokens = read_words(&path).expect("failed to read transcript");

    let config: Config = speechrate_cli::rate::Args {
        path: path.clone(),
        position: None,
        words_only: true,
        format: Default::default(),
        window: speechrate::types::WindowConfig::new(2),
        labels: Default::default(),
    }
    .try_into()
    .expect("valid configuration");

    let rows = report(&tokens, &config).expect("failed to build report");

    let labels: Vec<_> = rows.iter().map(|r| r.label).collect();
    assert_eq!(labels, ["so", "i", "was", "thinking", "yeah"]);

    // "i" at 0.9: left {0.2}, right {0.2, 0.5} -> 3 / 0.7
    let i = &rows[1];
    assert_eq!((i.left, i.right), (1, 2));
    assert!((i.rate.unwrap() - 3.0 / 0.7).abs() < 1e-9);

    // "yeah" is enclosed by a pause and the end of transcript
    assert_eq!(rows[4].status, Status::Undefined);
}

#[test]
fn labels_command_runs() {
    let cli = Cli::parse_from(["srate", "labels", "--break-label", "<HES>"]);

    run(cli).expect("failed to list labels");
}
