//! Table rendering utilities for CLI outputs.
//!
//! Takes a generic result set (column names plus rows of possibly-null
//! cells) and produces aligned text: a header line, a dash rule, then one
//! line per row. Absent values render as the `NULL` literal so they stay
//! distinguishable from empty strings.

use unicode_width::UnicodeWidthStr;

/// Fixed literal used for absent values.
pub const NULL_LITERAL: &str = "NULL";

/// A generic query result, detached from any statement or connection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl ResultSet {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Option<String>>) {
        self.rows.push(row);
    }
}

fn cell_text(cell: &Option<String>) -> &str {
    match cell {
        Some(v) => v.as_str(),
        None => NULL_LITERAL,
    }
}

/// Render a result set with cells padded to the widest value per column and
/// joined by `separator`. Zero rows give header + rule only; zero columns
/// give an empty string.
pub fn render(set: &ResultSet, separator: &str) -> String {
    if set.columns.is_empty() {
        return String::new();
    }

    // Column widths: max of header and every cell, by display width.
    let mut widths: Vec<usize> = set.columns.iter().map(|c| c.width()).collect();
    for row in &set.rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell_text(cell).width());
        }
    }

    let sep = format!(" {separator} ");
    let mut out = String::new();

    let header = set
        .columns
        .iter()
        .zip(&widths)
        .map(|(c, w)| pad(c, *w))
        .collect::<Vec<_>>()
        .join(&sep);
    let header = header.trim_end().to_string();
    let rule_width = header.width();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(rule_width));
    out.push('\n');

    for row in &set.rows {
        let line = set
            .columns
            .iter()
            .enumerate()
            .map(|(i, _)| {
                let text = row.get(i).map(cell_text).unwrap_or(NULL_LITERAL);
                pad(text, widths[i])
            })
            .collect::<Vec<_>>()
            .join(&sep);
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(columns: &[&str], rows: Vec<Vec<Option<&str>>>) -> ResultSet {
        ResultSet {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(|c| c.map(str::to_string)).collect())
                .collect(),
        }
    }

    #[test]
    fn renders_header_rule_and_rows() {
        let s = set(&["name"], vec![vec![Some("Acme")]]);
        let text = render(&s, "|");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["name", "----", "Acme"]);
    }

    #[test]
    fn zero_rows_render_header_and_rule_only() {
        let s = set(&["companyID", "name"], vec![]);
        let text = render(&s, "|");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "companyID | name");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[1].len(), lines[0].len());
    }

    #[test]
    fn zero_columns_render_nothing() {
        let s = set(&[], vec![]);
        assert_eq!(render(&s, "|"), "");
    }

    #[test]
    fn null_cells_use_the_fixed_literal() {
        let s = set(
            &["name", "url"],
            vec![vec![Some("Acme"), None], vec![Some("Initech"), Some("x")]],
        );
        let text = render(&s, "|");
        assert!(text.contains("NULL"));
        // NULL is a literal, not an empty cell
        assert!(text.lines().nth(2).unwrap().contains("Acme    | NULL"));
    }

    #[test]
    fn columns_align_to_widest_cell() {
        let s = set(
            &["n", "v"],
            vec![
                vec![Some("short"), Some("a")],
                vec![Some("much longer value"), Some("b")],
            ],
        );
        let text = render(&s, "|");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "short             | a");
        assert_eq!(lines[3], "much longer value | b");
        assert_eq!(lines[2].len(), lines[3].len());
    }

    #[test]
    fn short_rows_pad_with_null() {
        let s = set(&["a", "b"], vec![vec![Some("1")]]);
        let text = render(&s, "|");
        assert!(text.lines().nth(2).unwrap().contains("NULL"));
    }
}
