//! Integration tests for mipview CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::{tempdir, TempDir};

const AMON: &str = r#"{
    "Header": {"table_id": "Table Amon"},
    "variable_entry": {
        "tas": {
            "frequency": "mon",
            "modeling_realm": "atmos",
            "standard_name": "air_temperature",
            "units": "K",
            "comment": "near-surface (usually, 2 meter) air temperature",
            "dimensions": "longitude latitude time height2m",
            "long_name": "Near-Surface Air Temperature",
            "positive": "",
            "cell_methods": "area: time: mean",
            "cell_measures": "area: areacella"
        },
        "rsds": {
            "frequency": "mon",
            "modeling_realm": "atmos",
            "units": "W m-2",
            "positive": "down"
        }
    }
}"#;

const SIMON: &str = r#"{
    "variable_entry": {
        "siconc": {"frequency": "mon", "modeling_realm": "seaIce ocean", "units": "%"}
    }
}"#;

fn table_dir() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("ARISE_Amon.json"), AMON).unwrap();
    fs::write(dir.path().join("ARISE_SImon.json"), SIMON).unwrap();
    fs::write(dir.path().join("ARISE_grids.json"), r#"{"variable_entry": {"x": {}}}"#).unwrap();
    fs::write(dir.path().join("ARISE_coordinate.json"), r#"{"axis_entry": {}}"#).unwrap();
    dir
}

fn run_mipview(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_mipview"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn run_kind(tables: &Path, out: &Path, kind: &str) -> (String, String, bool) {
    run_mipview(&[
        "-t",
        tables.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "-k",
        kind,
    ])
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_mipview(&["--help"]);

    assert!(success);
    assert!(stdout.contains("mipview"));
    assert!(stdout.contains("--tables-directory"));
    assert!(stdout.contains("--prefix"));
    assert!(stdout.contains("--output-directory"));
    assert!(stdout.contains("--kind"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_mipview(&["--version"]);

    assert!(success);
    assert!(stdout.contains("mipview"));
}

#[test]
fn test_csv_output() {
    let tables = table_dir();
    let out = tempdir().unwrap();

    let (stdout, _, success) = run_kind(tables.path(), out.path(), "csv");

    assert!(success);
    assert!(stdout.contains("mip_table_viewer_ARISE.csv"));
    assert!(stdout.contains("variables"));

    let csv = fs::read_to_string(out.path().join("mip_table_viewer_ARISE.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Table,Variable,Frequency"));
    assert!(lines[1].starts_with("Amon,tas,mon,"));
    assert!(lines[1].contains("\"near-surface (usually, 2 meter) air temperature\""));
    assert!(lines[2].starts_with("Amon,rsds,mon,"));
    assert!(lines[3].starts_with("SImon,siconc,mon,"));
    assert!(!csv.contains("grids"));
}

#[test]
fn test_gexf_output() {
    let tables = table_dir();
    let out = tempdir().unwrap();

    let (_, _, success) = run_kind(tables.path(), out.path(), "gexf");

    assert!(success);
    let doc = fs::read_to_string(out.path().join("mip_table_viewer_ARISE.gexf")).unwrap();
    assert!(doc.starts_with("<?xml"));
    assert!(doc.contains("<node id=\"Amon\" label=\"Amon\"/>"));
    assert!(doc.contains("<node id=\"seaIce_ocean\" label=\"seaIce ocean\"/>"));
    assert!(doc.contains("<edge source=\"siconc\" target=\"seaIce_ocean\"/>"));
    assert_eq!(doc.matches("<attribute ").count(), 10);
    assert_eq!(doc.matches("<edge ").count(), 6);
}

#[test]
fn test_html_is_default_kind() {
    let tables = table_dir();
    let out = tempdir().unwrap();

    let (_, _, success) = run_mipview(&[
        "--tables-directory",
        tables.path().to_str().unwrap(),
        "--output-directory",
        out.path().to_str().unwrap(),
    ]);

    assert!(success);
    let html = fs::read_to_string(out.path().join("mip_table_viewer_ARISE.html")).unwrap();
    assert!(html.contains("<table>"));
    assert!(html.contains("siconc"));
}

#[test]
fn test_prefix_selects_tables() {
    let tables = table_dir();
    fs::write(
        tables.path().join("CMIP6_Omon.json"),
        r#"{"variable_entry": {"tos": {"modeling_realm": "ocean"}}}"#,
    )
    .unwrap();
    let out = tempdir().unwrap();

    let (_, _, success) = run_mipview(&[
        "-t",
        tables.path().to_str().unwrap(),
        "-p",
        "CMIP6",
        "-o",
        out.path().to_str().unwrap(),
        "-k",
        "csv",
    ]);

    assert!(success);
    let csv = fs::read_to_string(out.path().join("mip_table_viewer_CMIP6.csv")).unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains("Omon,tos,"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let tables = table_dir();
    let out = tempdir().unwrap();

    let (_, stderr, success) = run_mipview(&[
        "-t",
        tables.path().to_str().unwrap(),
        "-o",
        out.path().to_str().unwrap(),
        "-k",
        "csv",
        "--verbose",
    ]);

    assert!(success);
    assert!(stderr.contains("located MIP tables"));
}

#[test]
fn test_invalid_tables_directory() {
    let out = tempdir().unwrap();

    let (_, stderr, success) = run_kind(Path::new("/nonexistent/Tables"), out.path(), "csv");

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("path does not exist"));
}

#[test]
fn test_malformed_table_fails() {
    let tables = table_dir();
    fs::write(tables.path().join("ARISE_Omon.json"), "{ broken").unwrap();
    let out = tempdir().unwrap();

    let (_, stderr, success) = run_kind(tables.path(), out.path(), "csv");

    assert!(!success);
    assert!(stderr.contains("ARISE_Omon.json"));
}

#[test]
fn test_invalid_kind() {
    let (_, stderr, success) = run_mipview(&["--kind", "xlsx"]);

    assert!(!success);
    assert!(stderr.contains("xlsx"));
}
