//! Dynamic Text Binding
//!
//! Renders the text nodes of a translation: static fragments come from the
//! token stream, expression fragments from the view's binding slots.

use serde::{Deserialize, Serialize};

use super::tokens::TokenStream;
use super::translation::{TextNodeDef, TextPart, Translation};
use crate::error::{I18nError, Result};
use crate::render3::interfaces::NodeGraph;

/// Value handed to a binding slot for one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BindingValue {
    Value(String),
    /// Keep whatever the slot held on the previous pass.
    NoChange,
}

pub const NO_CHANGE: BindingValue = BindingValue::NoChange;

impl From<&str> for BindingValue {
    fn from(value: &str) -> Self {
        BindingValue::Value(value.to_string())
    }
}

impl From<String> for BindingValue {
    fn from(value: String) -> Self {
        BindingValue::Value(value)
    }
}

/// Binding slot values of one view, kept across render passes.
#[derive(Debug, Clone, Default)]
pub struct BindingSlots {
    values: Vec<String>,
    changed: Vec<bool>,
}

impl BindingSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the values of a new pass and records which slots changed.
    pub fn update(&mut self, ctx: &[BindingValue]) {
        if self.values.len() < ctx.len() {
            self.values.resize(ctx.len(), String::new());
        }
        self.changed.clear();
        self.changed.resize(self.values.len(), false);

        for (slot, value) in ctx.iter().enumerate() {
            if let BindingValue::Value(value) = value {
                if self.values[slot] != *value {
                    self.values[slot].clone_from(value);
                    self.changed[slot] = true;
                }
            }
        }
    }

    /// Current value of `slot`, empty when it never received one.
    pub fn get(&self, slot: usize) -> &str {
        self.values.get(slot).map_or("", String::as_str)
    }

    pub fn is_changed(&self, slot: usize) -> bool {
        self.changed.get(slot).copied().unwrap_or(false)
    }
}

/// Concatenates the parts of one text node.
pub fn render_text_node(def: &TextNodeDef, tokens: &TokenStream, slots: &BindingSlots) -> String {
    def.parts
        .iter()
        .map(|part| match part {
            TextPart::Static(pos) => tokens.text_at(*pos),
            TextPart::Binding(slot) => slots.get(*slot),
        })
        .collect()
}

/// Writes the content of every translated text node.
///
/// On the first pass all text nodes are written; later passes only rewrite
/// nodes that reference a changed binding slot. Returns the number of nodes
/// written.
pub fn dynamic_text_binding<G: NodeGraph>(
    graph: &mut G,
    tokens: &TokenStream,
    translation: &Translation,
    slots: &BindingSlots,
    first_pass: bool,
) -> Result<usize> {
    let mut written = 0;
    for (&index, def) in &translation.text_nodes {
        if !first_pass && !def.binding_slots().any(|slot| slots.is_changed(slot)) {
            continue;
        }
        let node = graph.resolve(index).ok_or(I18nError::MissingNode(index))?;
        let content = render_text_node(def, tokens, slots);
        graph.set_text(node, &content);
        written += 1;
    }
    tracing::trace!(written, first_pass, "dynamic text binding");
    Ok(written)
}
