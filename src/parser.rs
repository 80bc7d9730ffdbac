use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::{Alignment, Table};

/// Separator rows hold only pipes, dashes, colons and whitespace.
static SEPARATOR_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\|[\s:|-]+\|$").expect("Invalid separator row regex"));

/// Split a `| a | b |` line into its cells, dropping the text outside the outer pipes.
fn split_cells(line: &str) -> Vec<&str> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < 2 {
        return Vec::new();
    }
    parts[1..parts.len() - 1].to_vec()
}

fn trimmed_cells(line: &str) -> Vec<String> {
    split_cells(line)
        .into_iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Parse a matched run of pipe-delimited lines.
///
/// Returns `None` when fewer than two non-blank lines remain, since a lone pipe line
/// is not a table and should be left as written.
pub fn parse_table(block: &str) -> Option<Table> {
    let lines: Vec<&str> = block
        .trim()
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        return None;
    }

    let headers = trimmed_cells(lines[0]);

    let (alignments, data_start) = if SEPARATOR_ROW.is_match(lines[1]) {
        let alignments = split_cells(lines[1])
            .into_iter()
            .map(Alignment::from_separator_cell)
            .collect();
        (alignments, 2)
    } else {
        (vec![Alignment::Left; headers.len()], 1)
    };

    let rows = lines[data_start..]
        .iter()
        .map(|line| trimmed_cells(line))
        .collect();

    Some(Table {
        headers,
        alignments,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_is_not_a_table() {
        assert_eq!(parse_table("| A | B |"), None);
        assert_eq!(parse_table("| A | B |\n\n   \n"), None);
    }

    #[test]
    fn separator_row_sets_alignments() {
        let table = parse_table("| L | C | R |\n|:---|:---:|---:|\n| a | b | c |").unwrap();
        assert_eq!(table.headers, vec!["L", "C", "R"]);
        assert_eq!(
            table.alignments,
            vec![Alignment::Left, Alignment::Center, Alignment::Right]
        );
        assert_eq!(table.rows, vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn missing_separator_defaults_to_left() {
        let table = parse_table("| A | B |\n| 1 | 2 |").unwrap();
        assert_eq!(table.alignments, vec![Alignment::Left, Alignment::Left]);
        assert_eq!(table.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn malformed_separator_cell_is_left() {
        assert_eq!(Alignment::from_separator_cell(" --- "), Alignment::Left);
        assert_eq!(Alignment::from_separator_cell(":--"), Alignment::Left);
        assert_eq!(Alignment::from_separator_cell(""), Alignment::Left);
        assert_eq!(Alignment::from_separator_cell(":"), Alignment::Center);
    }

    #[test]
    fn ragged_rows_keep_their_own_length() {
        let table = parse_table("| A | B |\n|---|---|\n| 1 |\n| 1 | 2 | 3 |").unwrap();
        assert_eq!(table.rows[0], vec!["1"]);
        assert_eq!(table.rows[1], vec!["1", "2", "3"]);
        assert_eq!(table.alignment(2), Alignment::Left);
    }

    #[test]
    fn header_only_with_separator_has_no_rows() {
        let table = parse_table("| A |\n|:-:|").unwrap();
        assert!(table.rows.is_empty());
        assert_eq!(table.alignment(0), Alignment::Center);
    }
}
