//! Translated DOM Tree
//!
//! Applies a [`Translation`] to the nodes a view created in template order:
//! drops the detached elements, then moves every remaining node under its
//! translated parent, in translated order.

use indexmap::{IndexMap, IndexSet};

use super::translation::Translation;
use crate::error::{I18nError, Result};
use crate::render3::interfaces::{NodeGraph, ParentIndex};

/// Rearranges `graph` to match `translation`.
pub fn translate_dom_tree<G: NodeGraph>(graph: &mut G, translation: &Translation) -> Result<()> {
    translate_dom_tree_parts(graph, &translation.detached, &translation.child_map)
}

/// Same as [`translate_dom_tree`], with the detached set and the child map
/// passed separately.
///
/// Every index is resolved before the graph is touched, so a missing node
/// leaves the graph unchanged.
pub fn translate_dom_tree_parts<G: NodeGraph>(
    graph: &mut G,
    detached: &IndexSet<usize>,
    child_map: &IndexMap<ParentIndex, Vec<usize>>,
) -> Result<()> {
    let detached_nodes = detached
        .iter()
        .map(|&index| resolve(graph, index))
        .collect::<Result<Vec<_>>>()?;

    let mut moves = Vec::with_capacity(child_map.len());
    for (parent, children) in child_map {
        let parent_node = match parent {
            ParentIndex::Root => graph.host(),
            ParentIndex::Element(index) => resolve(graph, *index)?,
        };
        let child_nodes = children
            .iter()
            .map(|&index| resolve(graph, index))
            .collect::<Result<Vec<_>>>()?;
        moves.push((parent_node, child_nodes));
    }

    // Detach first so the old parent links do not interfere with the
    // re-attachment order.
    for node in detached_nodes {
        match graph.parent(node) {
            Some(parent) => graph.remove_child(parent, node),
            None => tracing::debug!(?node, "detached i18n node has no parent"),
        }
    }

    let mut moved = 0;
    for (parent, children) in moves {
        for child in children {
            graph.append_child(parent, child);
            moved += 1;
        }
    }

    tracing::debug!(detached = detached.len(), moved, "translated dom tree");
    Ok(())
}

fn resolve<G: NodeGraph>(graph: &G, index: usize) -> Result<G::Node> {
    graph.resolve(index).ok_or(I18nError::MissingNode(index))
}
