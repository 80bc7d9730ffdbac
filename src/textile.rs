use crate::block::{Alignment, Table};
use crate::config::CodeBlockStyle;

fn header_marker(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "_.",
        Alignment::Center => "=.",
        Alignment::Right => ">.",
    }
}

/// Data cells only carry a marker when they leave Textile's default left alignment.
fn cell_marker(alignment: Alignment) -> Option<&'static str> {
    match alignment {
        Alignment::Left => None,
        Alignment::Center => Some("=."),
        Alignment::Right => Some(">."),
    }
}

/// Convert a parsed table to Textile table markup
pub fn table_to_textile(table: &Table) -> String {
    let mut out = String::new();

    let headers: Vec<String> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| format!("{} {}", header_marker(table.alignment(i)), header))
        .collect();
    push_row(&headers, &mut out);

    for row in &table.rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| match cell_marker(table.alignment(i)) {
                Some(marker) => format!("{marker} {cell}"),
                None => cell.clone(),
            })
            .collect();
        push_row(&cells, &mut out);
    }

    out.truncate(out.trim_end().len());
    out
}

fn push_row(cells: &[String], out: &mut String) {
    out.push('|');
    out.push_str(&cells.join("|"));
    out.push_str("|\n");
}

/// Convert a fenced code block body. The body is trimmed; it is never escaped.
pub fn code_block_to_textile(language: Option<&str>, code: &str, style: CodeBlockStyle) -> String {
    let code = code.trim();
    match (style, language) {
        (CodeBlockStyle::Textile, Some(lang)) => format!("bc({lang}). {code}\n"),
        (CodeBlockStyle::Textile, None) => format!("bc. {code}\n"),
        (CodeBlockStyle::Html, Some(lang)) => {
            format!("<pre><code class=\"{lang}\">{code}</code></pre>\n")
        }
        (CodeBlockStyle::Html, None) => format!("<pre><code>{code}</code></pre>\n"),
    }
}
