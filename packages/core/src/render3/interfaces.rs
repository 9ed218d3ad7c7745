//! Render3 Interfaces
//!
//! The index-addressed node graph the i18n engine works against. The view
//! engine owns the nodes; the translation code only resolves them by logical
//! index and moves them around.

use std::fmt;

use serde::{Serialize, Serializer};

/// Parent of a group of children in a translated structure.
///
/// `Root` is the translation's top-level container, written as `-1` when
/// serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParentIndex {
    Root,
    Element(usize),
}

impl ParentIndex {
    pub const ROOT_SENTINEL: i64 = -1;

    pub fn element(&self) -> Option<usize> {
        match self {
            ParentIndex::Root => None,
            ParentIndex::Element(index) => Some(*index),
        }
    }

    pub fn as_i64(&self) -> i64 {
        match self {
            ParentIndex::Root => Self::ROOT_SENTINEL,
            ParentIndex::Element(index) => *index as i64,
        }
    }
}

impl fmt::Display for ParentIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}

impl Serialize for ParentIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Mutable node graph with a single-parent invariant.
pub trait NodeGraph {
    type Node: Copy + Eq + fmt::Debug;

    /// Live node created for `index`, if any.
    fn resolve(&self, index: usize) -> Option<Self::Node>;

    /// Container the translation is rendered into.
    fn host(&self) -> Self::Node;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    fn remove_child(&mut self, parent: Self::Node, node: Self::Node);

    /// Appends `node` as the last child of `parent`, detaching it from its
    /// current parent first.
    fn append_child(&mut self, parent: Self::Node, node: Self::Node);

    fn set_text(&mut self, node: Self::Node, content: &str);
}
