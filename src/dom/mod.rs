//! HTML parsing and page queries.
//!
//! HTML is parsed with html5ever into an [`ArenaDom`]. Subtrees of the arena
//! are then lowered into [`DocumentNode`] trees for rendering, and CSS
//! selectors find the parts of a pull request page we care about.
//!
//! ```
//! use mergemsg::dom::{self, HtmlOptions};
//! use mergemsg::document::NodeKind;
//!
//! let node = dom::parse_fragment("<h2>Notes</h2>", &HtmlOptions::default());
//! assert_eq!(node.children[0].kind, NodeKind::Heading(2));
//! ```

mod arena;
mod selector;
mod tree_sink;

pub use arena::{ArenaDom, Attribute, Children, Node, NodeData, NodeId};
pub use selector::{ElementRef, PageSelectorImpl, Selector};
pub use tree_sink::{ArenaSink, Handle};

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use url::Url;

use crate::document::{CellKind, DocumentNode, ListKind, NodeKind};

/// How HTML is lowered into document nodes.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Base for resolving relative `href` and `src` values, the way a
    /// browser's `a.href` and `img.src` properties do. Without a base the
    /// attribute text is used as written.
    pub base_url: Option<Url>,
}

impl HtmlOptions {
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    fn resolve(&self, value: &str) -> String {
        match &self.base_url {
            Some(base) => match base.join(value) {
                Ok(abs) => abs.to_string(),
                Err(_) => value.to_string(),
            },
            None => value.to_string(),
        }
    }
}

/// Parse a complete HTML page.
pub fn parse_html(html: &str) -> ArenaDom {
    parse_document(ArenaSink::new(), ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_dom()
}

/// Parse a fragment of HTML (not a full document) into a document tree.
///
/// The fragment is parsed as the body of a minimal page; the returned root is
/// the body, a transparent container.
pub fn parse_fragment(html: &str, options: &HtmlOptions) -> DocumentNode {
    let wrapped = format!("<!DOCTYPE html><html><head></head><body>{html}</body></html>");
    let dom = parse_html(&wrapped);
    match dom.elements_by_tag(dom.document(), "body").first() {
        Some(&body) => to_document(&dom, body, options),
        None => DocumentNode::other(Vec::new()),
    }
}

/// Lower the arena subtree rooted at `id` into a document tree.
///
/// Comments and doctypes disappear; unknown elements become
/// [`NodeKind::Other`] and keep their children.
pub fn to_document(dom: &ArenaDom, id: NodeId, options: &HtmlOptions) -> DocumentNode {
    let kind = match dom.get(id).map(|n| &n.data) {
        Some(NodeData::Text(text)) => return DocumentNode::text(text.clone()),
        Some(NodeData::Element { name, .. }) => element_kind(dom, id, name.local.as_ref(), options),
        _ => NodeKind::Other,
    };

    let children = dom
        .children(id)
        .filter(|&child| {
            dom.get(child)
                .is_some_and(|n| !matches!(n.data, NodeData::Ignored))
        })
        .map(|child| to_document(dom, child, options))
        .collect();

    DocumentNode::new(kind, children)
}

fn element_kind(dom: &ArenaDom, id: NodeId, tag: &str, options: &HtmlOptions) -> NodeKind {
    match tag {
        "h1" => NodeKind::Heading(1),
        "h2" => NodeKind::Heading(2),
        "h3" => NodeKind::Heading(3),
        "h4" => NodeKind::Heading(4),
        "h5" => NodeKind::Heading(5),
        "h6" => NodeKind::Heading(6),
        "br" => NodeKind::LineBreak,
        "p" | "div" => NodeKind::Paragraph,
        "blockquote" => NodeKind::Blockquote,
        "pre" => NodeKind::Preformatted,
        "ul" => NodeKind::List(ListKind::Unordered),
        "ol" => NodeKind::List(ListKind::Ordered),
        "li" => NodeKind::ListItem,
        "code" => NodeKind::InlineCode,
        "a" => NodeKind::Link {
            href: dom.attr(id, "href").map(|href| options.resolve(href)),
        },
        "img" => NodeKind::Image {
            src: dom.attr(id, "src").map(|src| options.resolve(src)),
            alt: dom.attr(id, "alt").map(str::to_string),
        },
        "table" => NodeKind::Table,
        "thead" => NodeKind::TableHead,
        "tr" => NodeKind::TableRow,
        "th" => NodeKind::TableCell(CellKind::Header),
        "td" => NodeKind::TableCell(CellKind::Data),
        _ => NodeKind::Other,
    }
}
