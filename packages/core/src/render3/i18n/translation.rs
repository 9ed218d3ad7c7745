//! Translation Structure
//!
//! Turns a translated message into the parent/children layout its nodes must
//! take, the text node definitions to render, and the elements the
//! translation dropped.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use smallvec::SmallVec;

use super::tokens::{ElementPlaceholders, ExpressionPlaceholders, I18nToken, TokenStream};
use crate::error::{I18nError, Result};
use crate::render3::interfaces::ParentIndex;

/// One fragment of a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "camelCase")]
pub enum TextPart {
    /// Position of a static text token in the stream.
    Static(usize),
    /// Binding slot of an expression.
    Binding(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TextNodeDef {
    pub parts: SmallVec<[TextPart; 4]>,
}

impl TextNodeDef {
    /// Empty definitions and a lone empty static fragment produce no node.
    fn is_elided(&self, tokens: &TokenStream) -> bool {
        match self.parts.as_slice() {
            [] => true,
            [TextPart::Static(pos)] => tokens.text_at(*pos).is_empty(),
            _ => false,
        }
    }

    pub fn binding_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.parts.iter().filter_map(|part| match part {
            TextPart::Binding(slot) => Some(*slot),
            TextPart::Static(_) => None,
        })
    }
}

/// Result of [`compute_translation`]. Computed once per message, then shared
/// by every view rendering that message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub child_map: IndexMap<ParentIndex, Vec<usize>>,
    pub detached: IndexSet<usize>,
    pub text_nodes: IndexMap<usize, TextNodeDef>,
}

impl Translation {
    pub fn children(&self, parent: ParentIndex) -> &[usize] {
        self.child_map.get(&parent).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_detached(&self, index: usize) -> bool {
        self.detached.contains(&index)
    }

    pub fn text_node(&self, index: usize) -> Option<&TextNodeDef> {
        self.text_nodes.get(&index)
    }

    /// Elements kept by the translation, in the order they were opened.
    pub fn element_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.child_map.keys().filter_map(ParentIndex::element)
    }
}

struct TranslationBuilder<'a> {
    tokens: &'a TokenStream,
    /// Every element index of the placeholder map before draining.
    element_indices: IndexSet<usize>,
    translation: Translation,
    parents: Vec<ParentIndex>,
    pending: TextNodeDef,
    next_text_index: usize,
}

impl<'a> TranslationBuilder<'a> {
    fn new(tokens: &'a TokenStream, element_indices: IndexSet<usize>) -> Self {
        let mut translation = Translation::default();
        translation.child_map.insert(ParentIndex::Root, Vec::new());
        TranslationBuilder {
            tokens,
            element_indices,
            translation,
            parents: vec![ParentIndex::Root],
            pending: TextNodeDef::default(),
            next_text_index: 0,
        }
    }

    fn current_parent(&self) -> ParentIndex {
        self.parents.last().copied().unwrap_or(ParentIndex::Root)
    }

    fn add_child(&mut self, child: usize) {
        let parent = self.current_parent();
        self.translation
            .child_map
            .entry(parent)
            .or_default()
            .push(child);
    }

    /// Text nodes share the logical index space with elements and must not
    /// land on an index the placeholder map assigns to an element.
    fn close_text_node(&mut self, pos: usize) -> Result<()> {
        let def = std::mem::take(&mut self.pending);
        if def.is_elided(self.tokens) {
            return Ok(());
        }
        let index = self.next_text_index;
        if self.element_indices.contains(&index) {
            return Err(I18nError::mismatch_at(
                pos,
                format!("text node {} collides with an element index", index),
            ));
        }
        self.next_text_index += 1;
        self.translation.text_nodes.insert(index, def);
        self.add_child(index);
        Ok(())
    }

    fn open_element(&mut self, pos: usize, name: &str, elements: &mut ElementPlaceholders) -> Result<()> {
        self.close_text_node(pos)?;
        let index = elements.take_next(name).ok_or_else(|| {
            let reason = if elements.contains(name) {
                format!("no element left for placeholder \"{}\"", name)
            } else {
                format!("unknown element placeholder \"{}\"", name)
            };
            I18nError::mismatch_at(pos, reason)
        })?;
        self.add_child(index);
        let element = ParentIndex::Element(index);
        if self.translation.child_map.contains_key(&element) {
            return Err(I18nError::mismatch_at(
                pos,
                format!("element {} is opened twice", index),
            ));
        }
        self.translation.child_map.insert(element, Vec::new());
        self.parents.push(element);
        Ok(())
    }

    fn close_element(&mut self, pos: usize, name: &str) -> Result<()> {
        self.close_text_node(pos)?;
        if self.parents.len() <= 1 {
            return Err(I18nError::mismatch_at(
                pos,
                format!("closing tag \"{}\" has no open element", name),
            ));
        }
        self.parents.pop();
        Ok(())
    }

    fn finish(mut self) -> Result<Translation> {
        let last = self.tokens.len().saturating_sub(1);
        self.close_text_node(last)?;
        if let Some(ParentIndex::Element(index)) = self.parents.last() {
            return Err(I18nError::mismatch(format!(
                "element {} is never closed",
                index
            )));
        }
        let child_map = &self.translation.child_map;
        self.translation.detached = self
            .element_indices
            .iter()
            .copied()
            .filter(|index| !child_map.contains_key(&ParentIndex::Element(*index)))
            .collect();
        Ok(self.translation)
    }
}

/// Computes the translated structure of a message.
///
/// `elements` is drained: every opening tag consumes one index from its
/// queue. Clone the map first if it has to be reused.
pub fn compute_translation(
    tokens: &TokenStream,
    elements: &mut ElementPlaceholders,
    expressions: &ExpressionPlaceholders,
) -> Result<Translation> {
    let element_indices = elements.all_indices().into_iter().collect();
    let mut builder = TranslationBuilder::new(tokens, element_indices);

    for (pos, token) in tokens.iter().enumerate() {
        tracing::trace!(pos, ?token, parent = %builder.current_parent(), "i18n token");
        match token {
            I18nToken::Text(_) => builder.pending.parts.push(TextPart::Static(pos)),
            I18nToken::Expression(name) => {
                let slot = expressions.get(name).ok_or_else(|| {
                    I18nError::mismatch_at(pos, format!("unknown expression placeholder \"{}\"", name))
                })?;
                builder.pending.parts.push(TextPart::Binding(slot));
            }
            I18nToken::OpenTag(name) => builder.open_element(pos, name, elements)?,
            I18nToken::CloseTag(name) => builder.close_element(pos, name)?,
        }
    }

    let translation = builder.finish()?;
    tracing::debug!(
        parents = translation.child_map.len(),
        text_nodes = translation.text_nodes.len(),
        detached = translation.detached.len(),
        "computed i18n translation"
    );
    Ok(translation)
}
