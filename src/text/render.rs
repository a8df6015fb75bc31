//! Recursive node renderer.
//!
//! Every node kind maps to a fragment of plain text; children are rendered
//! in order and concatenated. Unknown kinds are transparent. Nothing here can
//! fail: a missing attribute renders as an empty string.

use crate::document::{DocumentNode, NodeKind};

use super::context::FormattingContext;
use super::layout::{IndentStyle, collapse_blank_lines, heading_underline, indent_lines};
use super::table::{header_column_count, header_separator, layout_table};

/// Render a node and its descendants.
///
/// `None` renders as the empty string.
pub fn render_node(node: Option<&DocumentNode>, ctx: FormattingContext) -> String {
    match node {
        Some(node) => render(node, ctx),
        None => String::new(),
    }
}

fn render(node: &DocumentNode, ctx: FormattingContext) -> String {
    match &node.kind {
        NodeKind::Heading(level) => {
            let inner = render_children(node, ctx);
            format!("\n\n{inner}\n{}", heading_underline(*level))
        }

        NodeKind::Text(text) => text.clone(),

        NodeKind::LineBreak => "\n".to_string(),

        NodeKind::Paragraph => format!("\n\n{}", render_children(node, ctx)),

        NodeKind::Blockquote => {
            let quoted = ctx.quoted();
            let inner = render_children(node, quoted);
            let inner = format!("\n{}\n", inner.trim());
            format!(
                "\n{}\n",
                indent_lines(&inner, &quoted, IndentStyle::Blockquote)
            )
        }

        NodeKind::Preformatted => format!("\n```\n{}\n```\n", render_children(node, ctx)),

        NodeKind::List(kind) => {
            let items = render_children(node, ctx.enter_list(*kind));
            let items = collapse_blank_lines(&items, 1);
            if ctx.indent_level == 0 {
                format!("\n{items}")
            } else {
                items
            }
        }

        NodeKind::ListItem => {
            let item = ctx.next_item();
            let inner = render_children(node, item);
            format!(
                "\n{}",
                indent_lines(inner.trim(), &item, IndentStyle::ListItem)
            )
        }

        // Code spans use the raw character data; markup inside is not rendered.
        NodeKind::InlineCode => format!("`{}`", node.text_content()),

        NodeKind::Link { href } => format!(" {} ", href.as_deref().unwrap_or("")),

        NodeKind::Image { src, alt } => {
            let alt = alt.as_deref().filter(|a| !a.is_empty()).unwrap_or("Image");
            format!(" {alt}: {} ", src.as_deref().unwrap_or(""))
        }

        NodeKind::Table => {
            let rows = collapse_blank_lines(&render_children(node, ctx), 1);
            format!("\n{}", layout_table(&rows))
        }

        NodeKind::TableHead => {
            let inner = render_children(node, ctx);
            let separator = header_separator(header_column_count(node));
            format!("\n{inner}\n{separator}")
        }

        NodeKind::TableRow => {
            let inner = render_children(node, ctx);
            let cells: String = inner.trim().chars().filter(|&c| c != '\n').collect();
            format!("\n| {cells}")
        }

        NodeKind::TableCell(_) => format!(" {} |", render_children(node, ctx).trim()),

        NodeKind::Other => render_children(node, ctx),
    }
}

/// Render the children of `node` in order.
///
/// The children share one list item counter, starting from the number in
/// `ctx`. Each child sees the count emitted before it and each list item
/// advances it, so items wrapped in other elements keep counting up. The
/// counter is local to this call: nothing a child does reaches the parent's
/// counter or a sibling's subtree.
fn render_children(node: &DocumentNode, ctx: FormattingContext) -> String {
    let mut item_num = ctx.list_item_num();
    let mut out = String::new();
    for child in &node.children {
        out.push_str(&render(child, ctx.with_item_num(item_num)));
        if child.kind == NodeKind::ListItem {
            item_num += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{CellKind, ListKind};

    fn text(s: &str) -> DocumentNode {
        DocumentNode::text(s)
    }

    fn item(s: &str) -> DocumentNode {
        DocumentNode::list_item(vec![text(s)])
    }

    fn root(node: &DocumentNode) -> String {
        render_node(Some(node), FormattingContext::root())
    }

    #[test]
    fn test_absent_node_is_empty() {
        assert_eq!(render_node(None, FormattingContext::root()), "");
    }

    #[test]
    fn test_heading() {
        let h = DocumentNode::heading(2, vec![text("Notes")]);
        assert_eq!(root(&h), format!("\n\nNotes\n{}", "-".repeat(15)));
    }

    #[test]
    fn test_text_is_verbatim() {
        assert_eq!(root(&text("a *b* <c>")), "a *b* <c>");
    }

    #[test]
    fn test_paragraph_and_line_break() {
        let p = DocumentNode::paragraph(vec![text("a"), DocumentNode::line_break(), text("b")]);
        assert_eq!(root(&p), "\n\na\nb");
    }

    #[test]
    fn test_blockquote() {
        let q = DocumentNode::blockquote(vec![text("  one"), DocumentNode::line_break(), text("two  ")]);
        assert_eq!(root(&q), "\n\n | one\n | two\n\n");
    }

    #[test]
    fn test_nested_blockquote() {
        let q = DocumentNode::blockquote(vec![
            text("outer"),
            DocumentNode::blockquote(vec![text("inner")]),
        ]);
        // inner renders "\n\n | inner\n\n", trimmed and re-prefixed by the outer quote
        assert_eq!(root(&q), "\n\n | outer\n | \n |  | inner\n\n");
    }

    #[test]
    fn test_preformatted() {
        let pre = DocumentNode::preformatted(vec![text("let x = 1;\n  x")]);
        assert_eq!(root(&pre), "\n```\nlet x = 1;\n  x\n```\n");
    }

    #[test]
    fn test_unordered_list() {
        let list = DocumentNode::list(ListKind::Unordered, vec![item("A"), item("B")]);
        assert_eq!(root(&list), "\n\n*  A\n*  B");
    }

    #[test]
    fn test_ordered_list_numbers_items() {
        let list = DocumentNode::list(ListKind::Ordered, vec![item("x"), item("y"), item("z")]);
        assert_eq!(root(&list), "\n\n1. x\n2. y\n3. z");
    }

    #[test]
    fn test_numbering_skips_whitespace_between_items() {
        let list = DocumentNode::list(
            ListKind::Ordered,
            vec![text("\n  "), item("x"), text("\n  "), item("y"), text("\n")],
        );
        assert_eq!(root(&list), "\n\n1. x\n2. y\n");
    }

    #[test]
    fn test_nested_ordered_list_restarts() {
        let nested = DocumentNode::list(ListKind::Ordered, vec![item("a"), item("b")]);
        let list = DocumentNode::list(
            ListKind::Ordered,
            vec![
                DocumentNode::list_item(vec![text("one"), nested]),
                item("two"),
            ],
        );
        assert_eq!(root(&list), "\n\n1. one\n   1. a\n   2. b\n2. two");
    }

    #[test]
    fn test_mixed_nesting() {
        let nested = DocumentNode::list(ListKind::Unordered, vec![item("a")]);
        let list = DocumentNode::list(
            ListKind::Ordered,
            vec![DocumentNode::list_item(vec![text("one"), nested])],
        );
        assert_eq!(root(&list), "\n\n1. one\n   *  a");
    }

    #[test]
    fn test_list_item_paragraphs_collapse() {
        let list = DocumentNode::list(
            ListKind::Unordered,
            vec![DocumentNode::list_item(vec![
                DocumentNode::paragraph(vec![text("first")]),
                DocumentNode::paragraph(vec![text("second")]),
            ])],
        );
        assert_eq!(root(&list), "\n\n*  first\n   second");
    }

    #[test]
    fn test_sibling_lists_number_independently() {
        let doc = DocumentNode::other(vec![
            DocumentNode::list(ListKind::Ordered, vec![item("a"), item("b")]),
            DocumentNode::list(ListKind::Ordered, vec![item("c")]),
        ]);
        assert_eq!(root(&doc), "\n\n1. a\n2. b\n\n1. c");
    }

    #[test]
    fn test_wrapped_items_keep_counting() {
        let list = DocumentNode::list(
            ListKind::Ordered,
            vec![DocumentNode::other(vec![item("a"), item("b")])],
        );
        assert_eq!(root(&list), "\n\n1. a\n2. b");
    }

    #[test]
    fn test_wrapper_counter_does_not_leak_to_list() {
        let list = DocumentNode::list(
            ListKind::Ordered,
            vec![
                item("a"),
                DocumentNode::block(vec![item("b"), item("c")]),
                item("d"),
            ],
        );
        assert_eq!(root(&list), "\n\n1. a\n2. b\n3. c\n2. d");
    }

    #[test]
    fn test_inline_code_uses_raw_text() {
        let code = DocumentNode::inline_code(vec![
            text("a<"),
            DocumentNode::link(Some("http://x"), vec![text("b")]),
        ]);
        assert_eq!(root(&code), "`a<b`");
    }

    #[test]
    fn test_link_discards_label() {
        let link = DocumentNode::link(Some("http://x"), vec![text("click here")]);
        let out = root(&link);
        assert_eq!(out, " http://x ");
        assert!(!out.contains("click here"));
    }

    #[test]
    fn test_link_without_href() {
        assert_eq!(root(&DocumentNode::link(None, vec![text("x")])), "  ");
    }

    #[test]
    fn test_image() {
        assert_eq!(
            root(&DocumentNode::image(Some("a.png"), Some("diagram"))),
            " diagram: a.png "
        );
        assert_eq!(root(&DocumentNode::image(Some("a.png"), None)), " Image: a.png ");
        assert_eq!(root(&DocumentNode::image(None, Some(""))), " Image:  ");
    }

    #[test]
    fn test_table_with_head() {
        let cell = |kind, s: &str| DocumentNode::table_cell(kind, vec![text(s)]);
        let table = DocumentNode::table(vec![
            DocumentNode::table_head(vec![DocumentNode::table_row(vec![
                cell(CellKind::Header, "Name"),
                cell(CellKind::Header, "Value"),
            ])]),
            DocumentNode::other(vec![DocumentNode::table_row(vec![
                cell(CellKind::Data, "x"),
                cell(CellKind::Data, "10"),
            ])]),
        ]);
        assert_eq!(
            root(&table),
            "\n| Name | Value | \n| ---  | ---   | \n| x    | 10    | \n"
        );
    }

    #[test]
    fn test_table_row_flattens_newlines() {
        let row = DocumentNode::table_row(vec![DocumentNode::table_cell(
            CellKind::Data,
            vec![text("a"), DocumentNode::line_break(), text("b")],
        )]);
        assert_eq!(root(&row), "\n| ab |");
    }

    #[test]
    fn test_other_is_transparent() {
        let doc = DocumentNode::other(vec![text("a"), DocumentNode::other(vec![text("b")])]);
        assert_eq!(root(&doc), "ab");
    }
}
