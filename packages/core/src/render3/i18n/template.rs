//! I18n Template
//!
//! Ties the pieces together for one translated template: creation
//! instructions build the nodes in template order, the (cached) translation
//! rearranges them, and dynamic text binding fills in the text on every pass.

use std::rc::Rc;

use super::cache::TranslationCache;
use super::dom_tree::translate_dom_tree;
use super::message::I18nMessage;
use super::text_binding::{dynamic_text_binding, BindingSlots, BindingValue};
use super::tokens::TokenStream;
use super::translation::Translation;
use crate::config::I18nConfig;
use crate::error::Result;
use crate::render3::instructions::{apply_instructions, CreateInstruction};
use crate::render3::node_table::NodeTable;

#[derive(Debug, Clone)]
pub struct I18nTemplate {
    message: I18nMessage,
    tokens: TokenStream,
    create: Vec<CreateInstruction>,
    config: I18nConfig,
}

/// One rendered instance of an [`I18nTemplate`].
#[derive(Debug)]
pub struct TemplateView {
    nodes: NodeTable,
    bindings: BindingSlots,
    translation: Option<Rc<Translation>>,
}

impl TemplateView {
    pub fn to_html(&self) -> String {
        self.nodes.to_html()
    }

    pub fn nodes(&self) -> &NodeTable {
        &self.nodes
    }

    /// `None` when the view fell back to its untranslated structure.
    pub fn translation(&self) -> Option<&Translation> {
        self.translation.as_deref()
    }

    pub fn is_translated(&self) -> bool {
        self.translation.is_some()
    }
}

impl I18nTemplate {
    pub fn new(message: I18nMessage, create: impl IntoIterator<Item = CreateInstruction>) -> Self {
        let tokens = message.token_stream();
        I18nTemplate {
            message,
            tokens,
            create: create.into_iter().collect(),
            config: I18nConfig::default(),
        }
    }

    pub fn with_config(mut self, config: I18nConfig) -> Self {
        self.config = config;
        self
    }

    pub fn message(&self) -> &I18nMessage {
        &self.message
    }

    pub fn config(&self) -> &I18nConfig {
        &self.config
    }

    /// Creation pass: builds the nodes, applies the translation and renders
    /// the text with `ctx`.
    pub fn create_view(&self, cache: &mut TranslationCache, ctx: &[BindingValue]) -> Result<TemplateView> {
        let mut nodes = NodeTable::new();
        apply_instructions(&self.create, &mut nodes)?;
        let mut bindings = BindingSlots::new();
        bindings.update(ctx);

        match self.translate(cache, &mut nodes, &bindings) {
            Ok(translation) => Ok(TemplateView {
                nodes,
                bindings,
                translation: Some(translation),
            }),
            Err(err) if self.config.falls_back_to_untranslated() => {
                tracing::warn!(error = %err, "i18n translation not applied, keeping untranslated structure");
                let mut nodes = NodeTable::new();
                apply_instructions(&self.create, &mut nodes)?;
                Ok(TemplateView {
                    nodes,
                    bindings,
                    translation: None,
                })
            }
            Err(err) => Err(err),
        }
    }

    fn translate(
        &self,
        cache: &mut TranslationCache,
        nodes: &mut NodeTable,
        bindings: &BindingSlots,
    ) -> Result<Rc<Translation>> {
        let translation = cache.get_or_compute(&self.message)?;
        translate_dom_tree(nodes, &translation)?;
        dynamic_text_binding(nodes, &self.tokens, &translation, bindings, true)?;
        Ok(translation)
    }

    /// Update pass: re-renders the text nodes whose bindings changed. The
    /// structure is never touched again. Returns the number of text nodes
    /// written.
    pub fn update_view(&self, view: &mut TemplateView, ctx: &[BindingValue]) -> Result<usize> {
        view.bindings.update(ctx);
        match &view.translation {
            Some(translation) => {
                dynamic_text_binding(&mut view.nodes, &self.tokens, translation, &view.bindings, false)
            }
            None => Ok(0),
        }
    }
}
