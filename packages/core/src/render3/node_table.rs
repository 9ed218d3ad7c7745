//! Node Table
//!
//! In-memory stand-in for the DOM nodes of one view. Nodes live in an arena
//! and are addressed two ways: by [`NodeId`] (arena handle) and by the
//! logical index the creation instructions gave them.

use crate::error::{I18nError, Result};
use crate::render3::interfaces::NodeGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const HOST: NodeId = NodeId(0);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Host,
    Text(String),
    Element { tag: String },
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        NodeData {
            kind,
            parent: None,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NodeTable {
    nodes: Vec<NodeData>,
    by_index: Vec<Option<NodeId>>,
    open_elements: Vec<NodeId>,
}

impl Default for NodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeTable {
    pub fn new() -> Self {
        NodeTable {
            nodes: vec![NodeData::new(NodeKind::Host)],
            by_index: Vec::new(),
            open_elements: Vec::new(),
        }
    }

    /// Creates an empty text node at `index` under the current element.
    pub fn text(&mut self, index: usize) -> Result<NodeId> {
        self.create(index, NodeKind::Text(String::new()))
    }

    /// Creates an element at `index` and makes it the current element.
    pub fn element_start(&mut self, index: usize, tag: &str) -> Result<NodeId> {
        let id = self.create(index, NodeKind::Element { tag: tag.to_string() })?;
        self.open_elements.push(id);
        Ok(id)
    }

    pub fn element_end(&mut self) -> Result<()> {
        self.open_elements
            .pop()
            .map(|_| ())
            .ok_or_else(|| I18nError::mismatch("element end without an open element"))
    }

    fn create(&mut self, index: usize, kind: NodeKind) -> Result<NodeId> {
        if self.node(index).is_some() {
            return Err(I18nError::DuplicateNode(index));
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData::new(kind));
        if self.by_index.len() <= index {
            self.by_index.resize(index + 1, None);
        }
        self.by_index[index] = Some(id);

        let parent = self.open_elements.last().copied().unwrap_or(NodeId::HOST);
        self.attach(parent, id);
        Ok(id)
    }

    pub fn node(&self, index: usize) -> Option<NodeId> {
        self.by_index.get(index).copied().flatten()
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Number of nodes created by instructions (the host excluded).
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sets the content of the text node at `index`. Returns `false` when
    /// there is no text node there.
    pub fn set_text_at(&mut self, index: usize, content: &str) -> bool {
        match self.node(index) {
            Some(id) if matches!(self.kind(id), NodeKind::Text(_)) => {
                self.set_text(id, content);
                true
            }
            _ => false,
        }
    }

    fn attach(&mut self, parent: NodeId, node: NodeId) {
        if self.is_within(parent, node) {
            tracing::warn!(?parent, ?node, "refusing to attach a node under itself");
            return;
        }
        self.detach(node);
        self.nodes[parent.0].children.push(node);
        self.nodes[node.0].parent = Some(parent);
    }

    /// Whether `node` is `ancestor` or one of its descendants.
    fn is_within(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|child| *child != node);
        }
    }

    /// Serializes the children of the host.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for child in self.children(NodeId::HOST) {
            self.write_html(*child, &mut html);
        }
        html
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        match self.kind(id) {
            NodeKind::Text(content) => escape_text(content, out),
            NodeKind::Element { tag } => {
                out.push('<');
                out.push_str(tag);
                out.push('>');
                for child in self.children(id) {
                    self.write_html(*child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            NodeKind::Host => {
                for child in self.children(id) {
                    self.write_html(*child, out);
                }
            }
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

impl NodeGraph for NodeTable {
    type Node = NodeId;

    fn resolve(&self, index: usize) -> Option<NodeId> {
        self.node(index)
    }

    fn host(&self) -> NodeId {
        NodeId::HOST
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent_of(node)
    }

    fn remove_child(&mut self, parent: NodeId, node: NodeId) {
        if self.nodes[node.0].parent == Some(parent) {
            self.detach(node);
        }
    }

    fn append_child(&mut self, parent: NodeId, node: NodeId) {
        self.attach(parent, node);
    }

    fn set_text(&mut self, node: NodeId, content: &str) {
        if let NodeKind::Text(text) = &mut self.nodes[node.0].kind {
            text.clear();
            text.push_str(content);
        }
    }
}
