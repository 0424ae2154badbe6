//! Styled HTML page listing a tabular report.

use quick_xml::escape::escape;

use crate::report::TabularReport;

const STYLE: &str = r#"
    body { font-family: Helvetica, Arial, sans-serif; margin: 1.5em; color: #222; }
    h1 { font-size: 1.4em; }
    p.summary { color: #555; }
    table { border-collapse: collapse; font-size: 0.85em; }
    th { position: sticky; top: 0; background: #2c4a6e; color: #fff; text-align: left; }
    th, td { border: 1px solid #ccd; padding: 4px 6px; vertical-align: top; }
    tr:nth-child(even) td { background: #f3f5f9; }
    td.table, td.variable { font-weight: bold; white-space: nowrap; }
"#;

/// Wrap text to lines of at most `width` characters.
///
/// Text no longer than `width` is returned as a single line. Otherwise
/// words are packed greedily and words longer than `width` are split.
pub fn wrap_text(input: &str, width: usize) -> Vec<String> {
    if width == 0 || input.chars().count() <= width {
        return vec![input.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in input.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width && current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

fn html_cell(value: &str, wrap_width: usize) -> String {
    wrap_text(value, wrap_width)
        .iter()
        .map(|line| escape(line.as_str()).into_owned())
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Render the report as a standalone HTML page.
pub fn render_html(report: &TabularReport, title: &str, wrap_width: usize) -> String {
    let title = escape(title);
    let mut page = String::new();

    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{}</title>\n", title));
    page.push_str(&format!("<style>{}</style>\n", STYLE));
    page.push_str("</head>\n<body>\n");
    page.push_str(&format!("<h1>{}</h1>\n", title));
    page.push_str(&format!(
        "<p class=\"summary\">{} variables in {} tables</p>\n",
        report.len(),
        report.tables().len()
    ));

    page.push_str("<table>\n<thead>\n<tr>");
    for header in &report.headers {
        page.push_str(&format!("<th>{}</th>", escape(header.as_str())));
    }
    page.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &report.rows {
        page.push_str("<tr>");
        for (i, value) in row.iter().enumerate() {
            let class = match i {
                0 => " class=\"table\"",
                1 => " class=\"variable\"",
                _ => "",
            };
            page.push_str(&format!("<td{}>{}</td>", class, html_cell(value, wrap_width)));
        }
        page.push_str("</tr>\n");
    }

    page.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    page
}
