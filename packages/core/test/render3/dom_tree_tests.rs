//! Translated DOM Tree Tests
//!
//! Drives the reconciler against a recording node graph to check the
//! primitive operations it issues.

use std::collections::HashMap;

use angular_core::render3::i18n::{translate_dom_tree, translate_dom_tree_parts, I18nMessage};
use angular_core::render3::{NodeGraph, ParentIndex};
use angular_core::I18nError;
use indexmap::{IndexMap, IndexSet};

const HOST: usize = usize::MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Op {
    Remove { parent: usize, node: usize },
    Append { parent: usize, node: usize },
}

/// Node graph where node handles are the logical indices themselves.
#[derive(Default)]
struct RecordingGraph {
    parents: HashMap<usize, Option<usize>>,
    ops: Vec<Op>,
}

impl RecordingGraph {
    fn with_nodes(nodes: &[(usize, usize)]) -> Self {
        RecordingGraph {
            parents: nodes.iter().map(|&(node, parent)| (node, Some(parent))).collect(),
            ops: Vec::new(),
        }
    }
}

impl NodeGraph for RecordingGraph {
    type Node = usize;

    fn resolve(&self, index: usize) -> Option<usize> {
        self.parents.contains_key(&index).then_some(index)
    }

    fn host(&self) -> usize {
        HOST
    }

    fn parent(&self, node: usize) -> Option<usize> {
        self.parents.get(&node).copied().flatten()
    }

    fn remove_child(&mut self, parent: usize, node: usize) {
        self.ops.push(Op::Remove { parent, node });
        self.parents.insert(node, None);
    }

    fn append_child(&mut self, parent: usize, node: usize) {
        self.ops.push(Op::Append { parent, node });
        self.parents.insert(node, Some(parent));
    }

    fn set_text(&mut self, _node: usize, _content: &str) {}
}

#[test]
fn should_detach_before_reattaching() {
    // <a></a><b><c></c></b> translated to `1<b>2</b>3`
    let mut graph = RecordingGraph::with_nodes(&[
        (0, HOST),
        (1, HOST),
        (2, HOST),
        (7, HOST),
        (8, HOST),
        (9, 8),
    ]);
    let message = I18nMessage::new(
        ["1", "S_B", "2", "C_B", "3"],
        [("S_A", vec![7]), ("S_B", vec![8]), ("S_C", vec![9])]
            .into_iter()
            .collect(),
        Default::default(),
    );
    let translation = message.compute_translation().unwrap();
    translate_dom_tree(&mut graph, &translation).unwrap();

    assert_eq!(
        graph.ops,
        vec![
            Op::Remove { parent: HOST, node: 7 },
            Op::Remove { parent: 8, node: 9 },
            Op::Append { parent: HOST, node: 0 },
            Op::Append { parent: HOST, node: 8 },
            Op::Append { parent: HOST, node: 2 },
            Op::Append { parent: 8, node: 1 },
        ]
    );
    assert_eq!(graph.parent(7), None);
    assert_eq!(graph.parent(9), None);
    assert_eq!(graph.parent(1), Some(8));
}

#[test]
fn should_append_children_in_recorded_order() {
    let mut graph = RecordingGraph::with_nodes(&[(1, HOST), (2, HOST), (3, HOST), (4, HOST)]);
    let mut child_map = IndexMap::new();
    child_map.insert(ParentIndex::Root, vec![4]);
    child_map.insert(ParentIndex::Element(4), vec![3, 1, 2]);

    translate_dom_tree_parts(&mut graph, &IndexSet::new(), &child_map).unwrap();

    let appended: Vec<_> = graph
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Append { parent: 4, node } => Some(*node),
            _ => None,
        })
        .collect();
    assert_eq!(appended, vec![3, 1, 2]);
}

#[test]
fn should_not_mutate_when_a_node_is_missing() {
    let mut graph = RecordingGraph::with_nodes(&[(0, HOST), (5, HOST)]);
    let detached: IndexSet<usize> = [5].into_iter().collect();
    let mut child_map = IndexMap::new();
    child_map.insert(ParentIndex::Root, vec![0, 6]);

    let err = translate_dom_tree_parts(&mut graph, &detached, &child_map).unwrap_err();
    assert_eq!(err, I18nError::MissingNode(6));
    assert!(graph.ops.is_empty());
}

#[test]
fn should_fail_on_a_missing_parent() {
    let mut graph = RecordingGraph::with_nodes(&[(0, HOST)]);
    let mut child_map = IndexMap::new();
    child_map.insert(ParentIndex::Element(3), vec![0]);

    let err = translate_dom_tree_parts(&mut graph, &IndexSet::new(), &child_map).unwrap_err();
    assert_eq!(err, I18nError::MissingNode(3));
}
