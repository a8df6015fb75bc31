//! Typed document tree handed to the text renderer.
//!
//! A [`DocumentNode`] is a read-only description of rich text: a closed set of
//! node kinds, each with ordered children. Trees are usually produced from
//! parsed HTML (see [`crate::dom`]) but can just as well be built by hand:
//!
//! ```
//! use mergemsg::document::{DocumentNode, ListKind};
//!
//! let doc = DocumentNode::block(vec![
//!     DocumentNode::heading(1, vec![DocumentNode::text("Title")]),
//!     DocumentNode::list(ListKind::Unordered, vec![
//!         DocumentNode::list_item(vec![DocumentNode::text("A")]),
//!     ]),
//! ]);
//! assert_eq!(doc.text_content(), "TitleA");
//! ```

/// Ordering of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    pub fn is_ordered(self) -> bool {
        matches!(self, ListKind::Ordered)
    }
}

/// Whether a table cell is a header (`th`) or data (`td`) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Header,
    Data,
}

/// The kind of a document node, with its kind-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Section heading. Levels outside 1..=6 are kept as given.
    Heading(u8),
    /// Character data, used verbatim.
    Text(String),
    LineBreak,
    /// Paragraph or generic block (`p`, `div`).
    Paragraph,
    Blockquote,
    Preformatted,
    List(ListKind),
    ListItem,
    InlineCode,
    Link {
        href: Option<String>,
    },
    Image {
        src: Option<String>,
        alt: Option<String>,
    },
    Table,
    TableHead,
    TableRow,
    TableCell(CellKind),
    /// Anything else. Rendered as a transparent container.
    Other,
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentNode {
    pub kind: NodeKind,
    pub children: Vec<DocumentNode>,
}

impl DocumentNode {
    /// Create a node of the given kind with children.
    pub fn new(kind: NodeKind, children: Vec<DocumentNode>) -> Self {
        Self { kind, children }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Text(text.into()), Vec::new())
    }

    pub fn line_break() -> Self {
        Self::new(NodeKind::LineBreak, Vec::new())
    }

    pub fn heading(level: u8, children: Vec<DocumentNode>) -> Self {
        Self::new(NodeKind::Heading(level), children)
    }

    pub fn paragraph(children: Vec<DocumentNode>) -> Self {
        Self::new(NodeKind::Paragraph, children)
    }

    /// A generic block. Renders exactly like a paragraph.
    pub fn block(children: Vec<DocumentNode>) -> Self {
        Self::paragraph(children)
    }

    pub fn blockquote(children: Vec<DocumentNode>) -> Self {
        Self::new(NodeKind::Blockquote, children)
    }

    pub fn preformatted(children: Vec<DocumentNode>) -> Self {
        Self::new(NodeKind::Preformatted, children)
    }

    pub fn list(kind: ListKind, items: Vec<DocumentNode>) -> Self {
        Self::new(NodeKind::List(kind), items)
    }

    pub fn list_item(children: Vec<DocumentNode>) -> Self {
        Self::new(NodeKind::ListItem, children)
    }

    pub fn inline_code(children: Vec<DocumentNode>) -> Self {
        Self::new(NodeKind::InlineCode, children)
    }

    pub fn link(href: Option<&str>, children: Vec<DocumentNode>) -> Self {
        Self::new(
            NodeKind::Link {
                href: href.map(str::to_string),
            },
            children,
        )
    }

    pub fn image(src: Option<&str>, alt: Option<&str>) -> Self {
        Self::new(
            NodeKind::Image {
                src: src.map(str::to_string),
                alt: alt.map(str::to_string),
            },
            Vec::new(),
        )
    }

    pub fn table(children: Vec<DocumentNode>) -> Self {
        Self::new(NodeKind::Table, children)
    }

    pub fn table_head(rows: Vec<DocumentNode>) -> Self {
        Self::new(NodeKind::TableHead, rows)
    }

    pub fn table_row(cells: Vec<DocumentNode>) -> Self {
        Self::new(NodeKind::TableRow, cells)
    }

    pub fn table_cell(kind: CellKind, children: Vec<DocumentNode>) -> Self {
        Self::new(NodeKind::TableCell(kind), children)
    }

    pub fn other(children: Vec<DocumentNode>) -> Self {
        Self::new(NodeKind::Other, children)
    }

    /// Check if this node is a text leaf.
    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text(_))
    }

    /// Concatenated character data of this node and all its descendants,
    /// in document order. Markup contributes nothing.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let NodeKind::Text(text) = &self.kind {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }
}
