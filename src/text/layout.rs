//! Pure string layout helpers: heading underlines, line indentation and
//! blank-line collapsing.

use memchr::memchr;

use super::context::FormattingContext;

/// Continuation indent for list items.
const LIST_INDENT: &str = "   ";
/// Prefix for every line of a blockquote after the first.
const QUOTE_INDENT: &str = " | ";
/// Marker for unordered list items.
const BULLET: &str = "*  ";

/// Which block the indented text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    Blockquote,
    ListItem,
}

/// Underline drawn below a heading of the given level.
///
/// The width depends only on the level, never on the heading text.
///
/// ```
/// use mergemsg::text::heading_underline;
///
/// assert_eq!(heading_underline(1), "=".repeat(18));
/// assert_eq!(heading_underline(3), "-".repeat(12));
/// assert_eq!(heading_underline(9), "---");
/// ```
pub fn heading_underline(level: u8) -> String {
    match level {
        1 => "===".repeat(6),
        2..=6 => "---".repeat(7 - level as usize),
        _ => "---".to_string(),
    }
}

/// Indent every line of `text` after the first, and mark the first line of a
/// list item with its bullet or number.
///
/// Nothing happens at indent level 0. An empty last line produced by a
/// trailing newline is left bare.
pub fn indent_lines(text: &str, ctx: &FormattingContext, style: IndentStyle) -> String {
    if ctx.indent_level == 0 {
        return text.to_string();
    }

    let (first, rest) = match style {
        IndentStyle::Blockquote => (String::new(), QUOTE_INDENT),
        IndentStyle::ListItem => {
            let marker = if ctx.is_ordered_list() {
                format!("{}. ", ctx.list_item_num())
            } else {
                BULLET.to_string()
            };
            (marker, LIST_INDENT)
        }
    };

    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;
    let mut out = String::with_capacity(text.len() + lines.len() * rest.len() + first.len());
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            out.push_str(&first);
        } else {
            out.push('\n');
            if !(i == last && line.is_empty()) {
                out.push_str(rest);
            }
        }
        out.push_str(line);
    }
    out
}

/// Collapse runs of line breaks.
///
/// Interior lines made only of spaces or tabs are emptied first (indenting
/// leaves those behind). Then every run of more than `max_newlines`
/// consecutive line breaks is shortened to exactly `max_newlines`, so with
/// `max_newlines == 1` no blank lines remain and with `2` at most one blank
/// line separates blocks.
///
/// The result is a fixed point: collapsing it again changes nothing.
///
/// ```
/// use mergemsg::text::collapse_blank_lines;
///
/// assert_eq!(collapse_blank_lines("a\n\n\n\nb", 2), "a\n\nb");
/// assert_eq!(collapse_blank_lines("a\n  \n\nb", 1), "a\nb");
/// ```
pub fn collapse_blank_lines(text: &str, max_newlines: usize) -> String {
    let max_newlines = max_newlines.max(1);
    if memchr(b'\n', text.as_bytes()).is_none() {
        return text.to_string();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;
    let mut out = String::with_capacity(text.len());
    let mut pending = 0usize;

    for (i, &line) in lines.iter().enumerate() {
        if i > 0 {
            pending += 1;
        }
        let line = if i > 0 && i < last && is_blank(line) {
            ""
        } else {
            line
        };
        if line.is_empty() && i != last {
            continue;
        }
        for _ in 0..pending.min(max_newlines) {
            out.push('\n');
        }
        pending = 0;
        out.push_str(line);
    }

    out
}

/// A non-empty line of only spaces and tabs.
fn is_blank(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b == b' ' || b == b'\t')
}
