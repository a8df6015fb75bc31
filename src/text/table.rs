//! Pipe-table layout.
//!
//! Rows arrive already rendered as `| cell | cell |` lines. Layout is two
//! passes: measure the widest cell per column, then re-emit every row with
//! each cell padded to its column width.

use crate::document::{CellKind, DocumentNode, NodeKind};

/// Align rendered table rows into fixed-width columns.
///
/// Empty lines are dropped; a line holding only whitespace is still a row,
/// with one empty cell. Each row is split on `|`, empty segments (the
/// delimiter's leading and trailing artifacts) are discarded, and the rest
/// are trimmed into cells. Rows keep their own cell count; ragged rows are
/// not padded out.
///
/// ```
/// use mergemsg::text::layout_table;
///
/// let raw = "\n| a | bb |\n| ccc | d |";
/// assert_eq!(layout_table(raw), "| a   | bb | \n| ccc | d  | \n");
/// ```
pub fn layout_table(raw: &str) -> String {
    let rows: Vec<Vec<&str>> = raw
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.split('|')
                .filter(|segment| !segment.is_empty())
                .map(str::trim)
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = Vec::new();
    for row in &rows {
        for (col, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            if col >= widths.len() {
                widths.push(len);
            } else if len > widths[col] {
                widths[col] = len;
            }
        }
    }

    let mut out = String::new();
    for row in &rows {
        out.push_str("| ");
        for (col, cell) in row.iter().enumerate() {
            out.push_str(cell);
            let pad = widths[col] - cell.chars().count();
            out.extend(std::iter::repeat_n(' ', pad));
            out.push_str(" | ");
        }
        out.push('\n');
    }
    out
}

/// Number of columns announced by a table head.
///
/// Looks at the head's very first child only, which must be a row. When
/// every cell of that row is a header cell the count is the number of header
/// cells; in every other case it is 1. That includes a head whose first child
/// is whitespace text ahead of the row, as in `<thead>\n<tr>`.
pub fn header_column_count(head: &DocumentNode) -> usize {
    let Some(row) = head.children.first() else {
        return 1;
    };
    if row.kind != NodeKind::TableRow || row.children.is_empty() {
        return 1;
    }

    let mut cells = 0;
    let mut headers = 0;
    for child in row.children.iter().filter(|n| !n.is_text()) {
        cells += 1;
        if child.kind == NodeKind::TableCell(CellKind::Header) {
            headers += 1;
        }
    }

    if headers > 0 && headers == cells {
        headers
    } else {
        1
    }
}

/// Separator line drawn under a table head: `|---|---|`.
pub fn header_separator(columns: usize) -> String {
    format!("|{}", "---|".repeat(columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn th(text: &str) -> DocumentNode {
        DocumentNode::table_cell(CellKind::Header, vec![DocumentNode::text(text)])
    }

    fn td(text: &str) -> DocumentNode {
        DocumentNode::table_cell(CellKind::Data, vec![DocumentNode::text(text)])
    }

    #[test]
    fn test_layout_pads_to_widest_cell() {
        let raw = "| a | bb |\n| ccc | d |\n";
        assert_eq!(layout_table(raw), "| a   | bb | \n| ccc | d  | \n");
    }

    #[test]
    fn test_layout_skips_empty_lines_only() {
        let raw = "\n| x |\n\n| yy |\n   ";
        assert_eq!(layout_table(raw), "| x  | \n| yy | \n|    | \n");
    }

    #[test]
    fn test_layout_keeps_empty_cells() {
        let raw = "| a |  | c |\n| dd | e | f |";
        assert_eq!(layout_table(raw), "| a  |   | c | \n| dd | e | f | \n");
    }

    #[test]
    fn test_layout_ragged_rows() {
        let raw = "| a | b | c |\n| d |";
        assert_eq!(layout_table(raw), "| a | b | c | \n| d | \n");
    }

    #[test]
    fn test_layout_separator_is_a_row() {
        let raw = "| name | v |\n|---|---|\n| x | 1 |";
        assert_eq!(
            layout_table(raw),
            "| name | v   | \n| ---  | --- | \n| x    | 1   | \n"
        );
    }

    #[test]
    fn test_layout_empty_input() {
        assert_eq!(layout_table(""), "");
    }

    #[test]
    fn test_column_count_all_headers() {
        let head = DocumentNode::table_head(vec![DocumentNode::table_row(vec![
            th("a"),
            th("b"),
            th("c"),
        ])]);
        assert_eq!(header_column_count(&head), 3);
    }

    #[test]
    fn test_column_count_leading_whitespace_defaults_to_one() {
        let head = DocumentNode::table_head(vec![
            DocumentNode::text("\n"),
            DocumentNode::table_row(vec![th("a"), th("b")]),
        ]);
        assert_eq!(header_column_count(&head), 1);
    }

    #[test]
    fn test_column_count_skips_text_inside_row() {
        let head = DocumentNode::table_head(vec![DocumentNode::table_row(vec![
            DocumentNode::text("\n"),
            th("a"),
            DocumentNode::text(" "),
            th("b"),
        ])]);
        assert_eq!(header_column_count(&head), 2);
    }

    #[test]
    fn test_column_count_mixed_cells_defaults_to_one() {
        let head =
            DocumentNode::table_head(vec![DocumentNode::table_row(vec![th("a"), td("b")])]);
        assert_eq!(header_column_count(&head), 1);
    }

    #[test]
    fn test_column_count_without_row() {
        assert_eq!(header_column_count(&DocumentNode::table_head(Vec::new())), 1);
        let head = DocumentNode::table_head(vec![th("a")]);
        assert_eq!(header_column_count(&head), 1);
        let head = DocumentNode::table_head(vec![DocumentNode::table_row(Vec::new())]);
        assert_eq!(header_column_count(&head), 1);
    }

    #[test]
    fn test_header_separator() {
        assert_eq!(header_separator(1), "|---|");
        assert_eq!(header_separator(3), "|---|---|---|");
    }

    proptest! {
        #[test]
        fn prop_column_width_is_widest_cell(
            rows in prop::collection::vec(
                prop::collection::vec("[a-z]{1,8}", 2..=2),
                1..6
            )
        ) {
            let raw: String = rows
                .iter()
                .map(|r| format!("\n| {} |", r.join(" | ")))
                .collect();
            let out = layout_table(&raw);
            for col in 0..2 {
                let widest = rows.iter().map(|r| r[col].len()).max().unwrap();
                for line in out.lines() {
                    let cell = line.split(" | ").nth(col).unwrap().trim_start_matches("| ");
                    prop_assert_eq!(cell.len(), widest);
                }
            }
        }
    }
}
