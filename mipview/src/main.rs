//! # mipview
//!
//! A CLI tool for viewing MIP variable tables as CSV, HTML or GEXF.
//!
//! ## Overview
//!
//! mipview is built on top of mipviewlib. It reads every
//! `<prefix>_<table>.json` table in a directory that defines variables and
//! writes `mip_table_viewer_<prefix>.<kind>` to an output directory.
//!
//! ## Usage
//!
//! ```bash
//! # Styled HTML page of ../Tables/ARISE_*.json in the current directory
//! mipview
//!
//! # Graph of tables, variables and realms for CMIP6 tables
//! mipview -t ~/cmip6-cmor-tables/Tables -p CMIP6 -k gexf
//!
//! # CSV into another directory, with debug logging
//! mipview -k csv -o /tmp/views --verbose
//! ```

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use mipviewlib::options::{DEFAULT_OUTPUT_DIRECTORY, DEFAULT_PREFIX, DEFAULT_TABLES_DIRECTORY};
use mipviewlib::{MipTableViewer, OutputKind, ViewerOptions};
use outstanding::Theme;
use tracing_subscriber::EnvFilter;

/// Include template at compile time
const SUMMARY_TEMPLATE: &str = include_str!("../templates/summary.jinja");

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("mipview")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render MIP variable tables as CSV, a styled HTML page, or a GEXF graph")
        .arg(
            Arg::new("tables-directory")
                .short('t')
                .long("tables-directory")
                .default_value(DEFAULT_TABLES_DIRECTORY)
                .help("Directory of the MIP table JSON files"),
        )
        .arg(
            Arg::new("prefix")
                .short('p')
                .long("prefix")
                .default_value(DEFAULT_PREFIX)
                .help("Prefix used on the MIP table JSON files"),
        )
        .arg(
            Arg::new("output-directory")
                .short('o')
                .long("output-directory")
                .default_value(DEFAULT_OUTPUT_DIRECTORY)
                .help("Directory the generated file is written to"),
        )
        .arg(
            Arg::new("kind")
                .short('k')
                .long("kind")
                .value_parser(["csv", "gexf", "html"])
                .default_value("html")
                .help("Kind of output to generate"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log pipeline progress to stderr"),
        )
}

/// Build viewer options from matches
fn build_options(matches: &ArgMatches) -> ViewerOptions {
    let mut options = ViewerOptions::new();

    if let Some(dir) = matches.get_one::<String>("tables-directory") {
        options = options.tables_directory(dir);
    }
    if let Some(prefix) = matches.get_one::<String>("prefix") {
        options = options.prefix(prefix);
    }
    if let Some(dir) = matches.get_one::<String>("output-directory") {
        options = options.output_directory(dir);
    }

    options
}

/// Extract output kind from matches
fn extract_kind(matches: &ArgMatches) -> Result<OutputKind, anyhow::Error> {
    matches
        .get_one::<String>("kind")
        .map(|s| s.parse::<OutputKind>().map_err(anyhow::Error::msg))
        .unwrap_or(Ok(OutputKind::default()))
}

/// Logs go to stderr. RUST_LOG wins over --verbose.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("mipviewlib=debug,mipview=debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Create the theme with styles
fn create_theme() -> Theme {
    Theme::new()
        .add("title", Style::new().bold())
        .add("label", Style::new().dim())
}

fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let options = build_options(matches);
    let kind = extract_kind(matches)?;

    tracing::debug!(?options, %kind, "starting run");

    let summary = MipTableViewer::new(options).output(kind)?;
    let value = serde_json::to_value(&summary)?;
    outstanding::render(SUMMARY_TEMPLATE, &value, &create_theme())
        .map_err(|e| anyhow::anyhow!("failed to render summary: {e}"))
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
