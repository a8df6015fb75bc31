//! Arena-allocated DOM that html5ever parses into.
//!
//! Nodes live in one vector and refer to each other by index, which keeps
//! the tree cheap to build from the `&self` TreeSink callbacks and easy to
//! walk afterwards.

use std::collections::HashMap;

use html5ever::{LocalName, Namespace, QualName};

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel for "no node".
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

/// Payload of a DOM node.
#[derive(Debug, Clone)]
pub enum NodeData {
    Document,
    Element {
        /// Boxed so the name keeps its address while the arena grows.
        name: Box<QualName>,
        attrs: Vec<Attribute>,
        /// `id` attribute, pulled out at creation.
        id: Option<String>,
        /// `class` attribute split on whitespace.
        classes: Vec<String>,
    },
    Text(String),
    /// Comments, doctypes and processing instructions. Never rendered.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

#[derive(Debug)]
pub struct Node {
    pub data: NodeData,
    pub parent: NodeId,
    pub first_child: NodeId,
    pub last_child: NodeId,
    pub prev_sibling: NodeId,
    pub next_sibling: NodeId,
}

impl Node {
    fn detached(data: NodeData) -> Self {
        Self {
            data,
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
        }
    }
}

/// A parsed HTML page.
pub struct ArenaDom {
    nodes: Vec<Node>,
    document: NodeId,
    by_id: HashMap<String, NodeId>,
}

impl ArenaDom {
    /// An empty DOM holding only the document node.
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            document: NodeId::NONE,
            by_id: HashMap::new(),
        };
        dom.document = dom.alloc(NodeData::Document);
        dom
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::detached(data));
        id
    }

    pub fn document(&self) -> NodeId {
        self.document
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> NodeId {
        let mut id = None;
        let mut classes = Vec::new();
        for attr in &attrs {
            match attr.name.local.as_ref() {
                "id" => id = Some(attr.value.clone()),
                "class" => classes = attr.value.split_whitespace().map(str::to_string).collect(),
                _ => {}
            }
        }

        let node = self.alloc(NodeData::Element {
            name: Box::new(name),
            attrs,
            id: id.clone(),
            classes,
        });
        // First element wins, like getElementById.
        if let Some(id) = id {
            self.by_id.entry(id).or_insert(node);
        }
        node
    }

    pub fn create_text(&mut self, text: String) -> NodeId {
        self.alloc(NodeData::Text(text))
    }

    pub fn create_ignored(&mut self) -> NodeId {
        self.alloc(NodeData::Ignored)
    }

    /// Append `child` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        let last = self.get(parent).map_or(NodeId::NONE, |n| n.last_child);

        if let Some(node) = self.get_mut(child) {
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if let Some(node) = self.get_mut(last) {
            node.next_sibling = child;
        }
        if let Some(node) = self.get_mut(parent) {
            if node.first_child.is_none() {
                node.first_child = child;
            }
            node.last_child = child;
        }
    }

    /// Insert `new_node` immediately before `sibling`.
    pub fn insert_before(&mut self, sibling: NodeId, new_node: NodeId) {
        let (parent, prev) = self
            .get(sibling)
            .map_or((NodeId::NONE, NodeId::NONE), |n| (n.parent, n.prev_sibling));

        if let Some(node) = self.get_mut(new_node) {
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = sibling;
        }
        if let Some(node) = self.get_mut(sibling) {
            node.prev_sibling = new_node;
        }
        if prev.is_some() {
            if let Some(node) = self.get_mut(prev) {
                node.next_sibling = new_node;
            }
        } else if let Some(node) = self.get_mut(parent) {
            node.first_child = new_node;
        }
    }

    /// Unlink `target` from its parent and siblings.
    pub fn detach(&mut self, target: NodeId) {
        let Some((parent, prev, next)) = self
            .get(target)
            .map(|n| (n.parent, n.prev_sibling, n.next_sibling))
        else {
            return;
        };

        if prev.is_some() {
            if let Some(node) = self.get_mut(prev) {
                node.next_sibling = next;
            }
        } else if let Some(node) = self.get_mut(parent) {
            node.first_child = next;
        }
        if next.is_some() {
            if let Some(node) = self.get_mut(next) {
                node.prev_sibling = prev;
            }
        } else if let Some(node) = self.get_mut(parent) {
            node.last_child = prev;
        }

        if let Some(node) = self.get_mut(target) {
            node.parent = NodeId::NONE;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = NodeId::NONE;
        }
    }

    /// Append text to `parent`, merging with a trailing text node.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        let last = self.get(parent).map_or(NodeId::NONE, |n| n.last_child);
        if let Some(node) = self.get_mut(last)
            && let NodeData::Text(existing) = &mut node.data
        {
            existing.push_str(text);
            return;
        }
        let node = self.create_text(text.to_string());
        self.append(parent, node);
    }

    /// Insert text before `sibling`, merging with a preceding text node.
    pub fn insert_text_before(&mut self, sibling: NodeId, text: &str) {
        let prev = self.get(sibling).map_or(NodeId::NONE, |n| n.prev_sibling);
        if let Some(node) = self.get_mut(prev)
            && let NodeData::Text(existing) = &mut node.data
        {
            existing.push_str(text);
            return;
        }
        let node = self.create_text(text.to_string());
        self.insert_before(sibling, node);
    }

    /// Element with the given `id` attribute.
    pub fn get_by_id(&self, id: &str) -> Option<NodeId> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Only the document node exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn children(&self, parent: NodeId) -> Children<'_> {
        Children {
            dom: self,
            next: self.get(parent).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// All nodes below `root` in document order, `root` excluded.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).collect();
        stack.reverse();
        while let Some(id) = stack.pop() {
            out.push(id);
            let mut children: Vec<_> = self.children(id).collect();
            children.reverse();
            stack.extend(children);
        }
        out
    }

    /// Descendant elements of `root` with the given tag, in document order.
    pub fn elements_by_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.tag(id).is_some_and(|name| name.as_ref() == tag))
            .collect()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(NodeId::is_some)
    }
}

impl Default for ArenaDom {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of a node.
pub struct Children<'a> {
    dom: &'a ArenaDom,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_none() {
            return None;
        }
        let id = self.next;
        self.next = self.dom.get(id).map_or(NodeId::NONE, |n| n.next_sibling);
        Some(id)
    }
}

/// Element accessors.
impl ArenaDom {
    /// Local tag name of an element.
    pub fn tag(&self, id: NodeId) -> Option<&LocalName> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { name, .. } => Some(&name.local),
            _ => None,
        })
    }

    pub fn attr(&self, id: NodeId, attr_name: &str) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|a| a.name.local.as_ref() == attr_name)
                .map(|a| a.value.as_str()),
            _ => None,
        })
    }

    /// Namespace of an element.
    pub fn namespace(&self, id: NodeId) -> Option<&Namespace> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { name, .. } => Some(&name.ns),
            _ => None,
        })
    }

    /// The element's own `id` attribute.
    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            NodeData::Element { id, .. } => id.as_deref(),
            _ => None,
        })
    }

    pub fn classes(&self, id: NodeId) -> &[String] {
        self.get(id)
            .and_then(|n| match &n.data {
                NodeData::Element { classes, .. } => Some(classes.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.data, NodeData::Element { .. }))
    }

    /// Concatenated text of `id` and everything below it.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(Node {
            data: NodeData::Text(text),
            ..
        }) = self.get(id)
        {
            out.push_str(text);
        }
        for node in self.descendants(id) {
            if let Some(Node {
                data: NodeData::Text(text),
                ..
            }) = self.get(node)
            {
                out.push_str(text);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use html5ever::ns;

    use super::*;

    fn qname(local: &str) -> QualName {
        QualName::new(None, ns!(html), LocalName::from(local))
    }

    fn attr(name: &str, value: &str) -> Attribute {
        Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_element_attributes() {
        let mut dom = ArenaDom::new();
        let div = dom.create_element(
            qname("div"),
            vec![attr("id", "main"), attr("class", "details  wide")],
        );
        dom.append(dom.document(), div);

        assert_eq!(dom.tag(div).map(|t| t.as_ref()), Some("div"));
        assert_eq!(dom.get_by_id("main"), Some(div));
        assert_eq!(dom.classes(div), ["details", "wide"]);
        assert_eq!(dom.element_id(div), Some("main"));
        assert_eq!(dom.namespace(div), Some(&ns!(html)));
        assert_eq!(dom.attr(div, "class"), Some("details  wide"));
        assert_eq!(dom.attr(div, "href"), None);
    }

    #[test]
    fn test_first_id_wins() {
        let mut dom = ArenaDom::new();
        let a = dom.create_element(qname("p"), vec![attr("id", "x")]);
        let _b = dom.create_element(qname("p"), vec![attr("id", "x")]);
        assert_eq!(dom.get_by_id("x"), Some(a));
    }

    #[test]
    fn test_sibling_links() {
        let mut dom = ArenaDom::new();
        let parent = dom.create_element(qname("ul"), vec![]);
        let a = dom.create_element(qname("li"), vec![]);
        let b = dom.create_element(qname("li"), vec![]);
        let c = dom.create_element(qname("li"), vec![]);
        dom.append(parent, a);
        dom.append(parent, c);
        dom.insert_before(c, b);

        let kids: Vec<_> = dom.children(parent).collect();
        assert_eq!(kids, vec![a, b, c]);

        dom.detach(b);
        let kids: Vec<_> = dom.children(parent).collect();
        assert_eq!(kids, vec![a, c]);
        assert_eq!(dom.parent(b), None);
        assert_eq!(dom.parent(a), Some(parent));
    }

    #[test]
    fn test_text_merging_and_content() {
        let mut dom = ArenaDom::new();
        let p = dom.create_element(qname("p"), vec![]);
        let b = dom.create_element(qname("b"), vec![]);
        dom.append_text(p, "Hello, ");
        dom.append_text(p, "big ");
        dom.append(p, b);
        dom.append_text(b, "world");

        assert_eq!(dom.children(p).count(), 2);
        assert_eq!(dom.text_content(p), "Hello, big world");
    }

    #[test]
    fn test_elements_by_tag_in_order() {
        let mut dom = ArenaDom::new();
        let root = dom.document();
        let outer = dom.create_element(qname("div"), vec![]);
        let h1 = dom.create_element(qname("h2"), vec![]);
        let inner = dom.create_element(qname("div"), vec![]);
        let h2 = dom.create_element(qname("h2"), vec![]);
        dom.append(root, outer);
        dom.append(outer, inner);
        dom.append(inner, h1);
        dom.append(outer, h2);

        assert_eq!(dom.elements_by_tag(root, "h2"), vec![h1, h2]);
        assert_eq!(dom.elements_by_tag(root, "div"), vec![outer, inner]);
    }
}
