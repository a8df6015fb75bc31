//! Rich text → plain text rendering.
//!
//! Turns a [`DocumentNode`] tree into the Markdown-flavoured plain text used
//! for commit message bodies:
//!
//! - setext-style headings with a fixed-width underline per level
//! - fenced code blocks, raw code spans
//! - `*  ` and `N. ` list markers with three-space continuation indent
//! - ` | `-prefixed blockquote lines
//! - pipe tables padded to the widest cell of each column
//! - links reduced to their URL, images to `alt: src`
//!
//! The dialect is not CommonMark. Output is deterministic for any tree, and
//! rendering never fails.
//!
//! - [`context`]: formatting state threaded through the walk
//! - [`render`]: the recursive node renderer
//! - [`layout`]: underline, indentation and blank-line helpers
//! - [`table`]: pipe-table column alignment

mod context;
mod layout;
mod render;
mod table;

pub use context::{FormattingContext, ListFrame};
pub use layout::{IndentStyle, collapse_blank_lines, heading_underline, indent_lines};
pub use render::render_node;
pub use table::{header_column_count, header_separator, layout_table};

use crate::document::DocumentNode;
use crate::dom::{self, HtmlOptions};

/// Blank-line limit applied to the finished document.
const DOCUMENT_MAX_NEWLINES: usize = 2;

/// Render a document tree to plain text.
///
/// `None` (a description that does not exist) renders as the empty string.
///
/// ```
/// use mergemsg::document::DocumentNode;
/// use mergemsg::text::to_text;
///
/// let doc = DocumentNode::other(vec![
///     DocumentNode::paragraph(vec![DocumentNode::text("Hello")]),
///     DocumentNode::paragraph(vec![DocumentNode::text("World")]),
/// ]);
/// assert_eq!(to_text(Some(&doc)), "\n\nHello\n\nWorld");
/// assert_eq!(to_text(None), "");
/// ```
pub fn to_text(root: Option<&DocumentNode>) -> String {
    let text = render_node(root, FormattingContext::root());
    collapse_blank_lines(&text, DOCUMENT_MAX_NEWLINES)
}

/// Parse an HTML fragment and render it to plain text.
///
/// ```
/// use mergemsg::text::html_to_text;
///
/// let text = html_to_text("<ol><li>one</li><li>two</li></ol>");
/// assert_eq!(text, "\n\n1. one\n2. two");
/// ```
pub fn html_to_text(html: &str) -> String {
    html_to_text_with(html, &HtmlOptions::default())
}

/// Like [`html_to_text`], resolving relative link and image URLs per `options`.
pub fn html_to_text_with(html: &str, options: &HtmlOptions) -> String {
    let document = dom::parse_fragment(html, options);
    to_text(Some(&document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ListKind;

    #[test]
    fn test_to_text_empty_root() {
        assert_eq!(to_text(None), "");
        assert_eq!(to_text(Some(&DocumentNode::other(Vec::new()))), "");
    }

    #[test]
    fn test_to_text_collapses_to_one_blank_line() {
        let doc = DocumentNode::other(vec![
            DocumentNode::paragraph(vec![DocumentNode::paragraph(vec![
                DocumentNode::text("a"),
            ])]),
            DocumentNode::list(
                ListKind::Unordered,
                vec![DocumentNode::list_item(vec![DocumentNode::text("b")])],
            ),
        ]);
        assert_eq!(to_text(Some(&doc)), "\n\na\n\n*  b");
    }

    #[test]
    fn test_html_to_text_fragment() {
        assert_eq!(html_to_text("<p>Hi <code>x&lt;y</code></p>"), "\n\nHi `x<y`");
    }
}
