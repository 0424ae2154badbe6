//! Delimited-text rendering of a tabular report.

use crate::report::TabularReport;

/// Quote a field if it contains a delimiter, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_line(values: &[String]) -> String {
    let fields: Vec<String> = values.iter().map(|v| csv_field(v)).collect();
    fields.join(",")
}

/// Render the report as CSV: a header row, then one row per variable.
pub fn render_csv(report: &TabularReport) -> String {
    let mut output = csv_line(&report.headers);
    output.push('\n');
    for row in &report.rows {
        output.push_str(&csv_line(row));
        output.push('\n');
    }
    output
}
