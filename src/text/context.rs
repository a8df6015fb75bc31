//! Formatting state threaded through the render.

use crate::document::ListKind;

/// State of the nearest enclosing list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListFrame {
    /// Ordering of the list.
    pub kind: ListKind,
    /// Nesting depth of lists (1 for a top-level list).
    pub level: usize,
    /// Items emitted so far at this level, as seen by the node being rendered.
    pub item_num: usize,
}

/// Ambient layout parameters for one node.
///
/// The context is `Copy`: every descent takes its own value, so nothing a
/// subtree does can leak into a sibling. The only state that accumulates
/// across siblings is the list item counter. It lives in the loop that
/// renders a node's children (see [`super::render`]), which stamps its
/// current value into the frame handed to each child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormattingContext {
    /// Nesting depth of blockquotes and lists.
    pub indent_level: usize,
    /// Nearest enclosing list, if any.
    pub list: Option<ListFrame>,
}

impl FormattingContext {
    /// The zeroed context used at the root of a document.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_ordered_list(&self) -> bool {
        self.list.is_some_and(|l| l.kind.is_ordered())
    }

    pub fn list_level(&self) -> usize {
        self.list.map_or(0, |l| l.level)
    }

    pub fn list_item_num(&self) -> usize {
        self.list.map_or(0, |l| l.item_num)
    }

    /// Context for the contents of a blockquote.
    pub fn quoted(self) -> Self {
        Self {
            indent_level: self.indent_level + 1,
            ..self
        }
    }

    /// Context for the items of a new list: one level deeper, counter at zero.
    pub fn enter_list(self, kind: ListKind) -> Self {
        Self {
            indent_level: self.indent_level + 1,
            list: Some(ListFrame {
                kind,
                level: self.list_level() + 1,
                item_num: 0,
            }),
        }
    }

    /// The same context with the list counter set to `item_num`.
    ///
    /// Outside a list this is a no-op.
    pub fn with_item_num(self, item_num: usize) -> Self {
        Self {
            list: self.list.map(|l| ListFrame { item_num, ..l }),
            ..self
        }
    }

    /// Context for the contents of a list item: the counter advanced by one.
    pub fn next_item(self) -> Self {
        self.with_item_num(self.list_item_num() + 1)
    }
}
